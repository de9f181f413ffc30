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
use crate::types::{SingerAlbumInput, SingerInput, SingerUpdate};

pub async fn list_singers(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let singers = state.services.singers.list(params.page, params.size)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(singers)))
}

pub async fn get_singer(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let singer = state.services.singers.get_one(id).await?;
    Ok::<_, ApiError>(Json(ApiResponse::success(singer)))
}

pub async fn create_singer(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> impl IntoResponse {
    let (input, file) = parse_form::<SingerInput>(multipart)
        .await?
        .require_payload()?;

    let singer = state
        .services
        .singers
        .create(input, file, &principal)
        .await?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(singer))))
}

pub async fn update_singer(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> impl IntoResponse {
    let (input, file) = parse_form::<SingerUpdate>(multipart)
        .await?
        .payload_or_default();

    let singer = state
        .services
        .singers
        .update(id, input, file, &principal)
        .await?;

    Ok::<_, ApiError>(Json(ApiResponse::success(singer)))
}

pub async fn delete_singer(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.services.singers.delete(id, &principal).await?;
    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}

pub async fn create_singer_album(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(singer_id): Path<i64>,
    multipart: Multipart,
) -> impl IntoResponse {
    let (input, file) = parse_form::<SingerAlbumInput>(multipart)
        .await?
        .require_payload()?;

    let album = state
        .services
        .singers
        .create_singer_album(singer_id, input, file, &principal)
        .await?;

    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(album))))
}
