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
use crate::types::{NewUser, UserUpdate};

pub async fn list_users(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let users = state.services.users.list(params.page, params.size)?;
    Ok::<_, ApiError>(Json(ApiResponse::success(users)))
}

pub async fn get_user(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let user = state.services.users.get_one(id).await?;
    Ok::<_, ApiError>(Json(ApiResponse::success(user)))
}

pub async fn create_user(
    _admin: RequireAdmin,
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewUser>,
) -> impl IntoResponse {
    let user = state.services.users.create(req)?;
    Ok::<_, ApiError>((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

pub async fn update_user(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> impl IntoResponse {
    let (input, file) = parse_form::<UserUpdate>(multipart)
        .await?
        .payload_or_default();

    let user = state
        .services
        .users
        .update(id, input, file, &principal)
        .await?;

    Ok::<_, ApiError>(Json(ApiResponse::success(user)))
}

pub async fn delete_user(
    RequireAuth(principal): RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    state.services.users.delete(id, &principal).await?;
    Ok::<_, ApiError>(StatusCode::NO_CONTENT)
}
