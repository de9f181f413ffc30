use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::{RequireAdmin, RequireAuth};
use crate::server::AppState;
use crate::server::dto::PageParams;
use crate::server::multipart::parse_form;
use crate::server::response::{ApiError, ApiResponse};
use crate::types::{SingerAlbumUpdate, SongInput};

pub async fn list_singer_albums(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let albums = state
        .services
        .singer_albums
        .list(params.page, params.size)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(albums)))
}

pub async fn get_singer_album(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let album = state.services.singer_albums.get_one(id).await?;
    Ok::<_, ApiError>(Json(ApiResponse::success(album)))
}

pub async fn update_singer_album(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> impl IntoResponse {
    let (input, file) = parse_form::<SingerAlbumUpdate>(multipart)
        .await?
        .payload_or_default();

    let album = state
        .services
        .singer_albums
        .update(id, input, file, &principal)
        .await?;

    Ok::<_, ApiError>(Json(ApiResponse::success(album)))
}

pub async fn delete_singer_album(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.services.singer_albums.delete(id, &principal).await?;
    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}

pub async fn create_song(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(album_id): Path<i64>,
    multipart: Multipart,
) -> impl IntoResponse {
    let (input, file) = parse_form::<SongInput>(multipart)
        .await?
        .require_payload()?;

    let song = state
        .services
        .singer_albums
        .create_song(album_id, input, file, &principal)
        .await?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(song))))
}
