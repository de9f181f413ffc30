use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::{RequireAdmin, RequireAuth};
use crate::server::AppState;
use crate::server::dto::PageParams;
use crate::server::response::{ApiError, ApiResponse};
use crate::types::{PlaylistInput, PlaylistUpdate};

pub async fn list_playlists(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let playlists = state.services.playlists.list(params.page, params.size)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(playlists)))
}

pub async fn get_playlist(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let playlist = state.services.playlists.get_one(id).await?;
    Ok::<_, ApiError>(Json(ApiResponse::success(playlist)))
}

pub async fn create_playlist(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaylistInput>,
) -> impl IntoResponse {
    let playlist = state.services.playlists.create(req, &principal)?;
    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(playlist))))
}

pub async fn update_playlist(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<PlaylistUpdate>,
) -> impl IntoResponse {
    let playlist = state
        .services
        .playlists
        .update(id, req, &principal)
        .await?;
    Ok::<_, ApiError>(Json(ApiResponse::success(playlist)))
}

pub async fn delete_playlist(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.services.playlists.delete(id, &principal).await?;
    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
