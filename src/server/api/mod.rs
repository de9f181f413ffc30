mod playlists;
mod singer_albums;
mod singers;
mod songs;
mod users;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::server::AppState;

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Singer routes
        .route("/singers", get(singers::list_singers))
        .route("/singers", post(singers::create_singer))
        .route("/singers/{id}", get(singers::get_singer))
        .route("/singers/{id}", put(singers::update_singer))
        .route("/singers/{id}", delete(singers::delete_singer))
        .route(
            "/singers/{id}/singer-albums",
            post(singers::create_singer_album),
        )
        // Singer album routes
        .route("/singer-albums", get(singer_albums::list_singer_albums))
        .route("/singer-albums/{id}", get(singer_albums::get_singer_album))
        .route(
            "/singer-albums/{id}",
            put(singer_albums::update_singer_album),
        )
        .route(
            "/singer-albums/{id}",
            delete(singer_albums::delete_singer_album),
        )
        .route("/singer-albums/{id}/songs", post(singer_albums::create_song))
        // Song routes
        .route("/songs", get(songs::list_songs))
        .route("/songs/{id}", get(songs::get_song))
        .route("/songs/{id}", put(songs::update_song))
        .route("/songs/{id}", delete(songs::delete_song))
        .route(
            "/songs/{id}/playlists/{playlist_id}",
            post(songs::attach_to_playlist),
        )
        // Playlist routes
        .route("/playlists", get(playlists::list_playlists))
        .route("/playlists", post(playlists::create_playlist))
        .route("/playlists/{id}", get(playlists::get_playlist))
        .route("/playlists/{id}", put(playlists::update_playlist))
        .route("/playlists/{id}", delete(playlists::delete_playlist))
        // User routes
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .route("/users/{id}", put(users::update_user))
        .route("/users/{id}", delete(users::delete_user))
}
