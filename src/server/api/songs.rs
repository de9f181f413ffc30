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
use crate::types::SongUpdate;

pub async fn list_songs(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let songs = state.services.songs.list(params.page, params.size)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(songs)))
}

pub async fn get_song(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let song = state.services.songs.get_one(id).await?;
    Ok::<_, ApiError>(Json(ApiResponse::success(song)))
}

pub async fn update_song(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> impl IntoResponse {
    let (input, file) = parse_form::<SongUpdate>(multipart)
        .await?
        .payload_or_default();

    let song = state
        .services
        .songs
        .update(id, input, file, &principal)
        .await?;

    Ok::<_, ApiError>(Json(ApiResponse::success(song)))
}

pub async fn delete_song(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.services.songs.delete(id, &principal).await?;
    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}

pub async fn attach_to_playlist(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path((song_id, playlist_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    let membership = state
        .services
        .songs
        .attach_to_playlist(song_id, playlist_id)
        .await?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(membership))))
}
