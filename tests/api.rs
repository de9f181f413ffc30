//! Router tests driven in-process with `tower::ServiceExt::oneshot`.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::json;

use songbook::types::Role;

use common::TestApp;

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = TestApp::new();

    let (status, _) = app
        .send(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_or_bad_token_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Request::builder()
                .uri("/api/singers/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authentication required");

    let (status, body) = app.get("/api/singers/1", "not-a-jwt").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_list_requires_admin() {
    let app = TestApp::new();
    let user = app.env.user("user", Role::User);
    let admin = app.env.user("admin", Role::Admin);

    let (status, _) = app.get("/api/singers", &app.token(&user)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .get("/api/users?page=0&size=10", &app.token(&admin))
        .await;
    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));

    let (status, _) = app
        .get("/api/songs?page=-1&size=10", &app.token(&admin))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_singer_lifecycle_over_http() {
    let app = TestApp::new();
    let owner = app.env.user("owner", Role::User);
    let other = app.env.user("other", Role::User);
    let token = app.token(&owner);

    let (status, body) = app
        .multipart(
            Method::POST,
            "/api/singers",
            &token,
            Some(json!({"name": "Nina", "info": "vocalist", "singer_type": "SINGLE"})),
            Some(("nina.jpg", &b"jpeg-bytes"[..])),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let singer = &body["data"];
    assert_eq!(singer["name"], "Nina");
    assert_eq!(singer["photo_name"], "nina.jpg");
    assert!(singer.get("user_id").is_none());
    let id = singer["id"].as_i64().unwrap();
    assert!(app.env.upload_path("nina.jpg").exists());

    let (status, body) = app.get(&format!("/api/singers/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["singer_type"], "SINGLE");

    let (status, body) = app
        .multipart(
            Method::PUT,
            &format!("/api/singers/{id}"),
            &app.token(&other),
            Some(json!({"name": "Hijacked"})),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized user");

    let (status, body) = app
        .multipart(
            Method::PUT,
            &format!("/api/singers/{id}"),
            &token,
            Some(json!({"singer_type": "BAND"})),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["singer_type"], "BAND");
    assert_eq!(body["data"]["name"], "Nina");
    assert!(body["data"]["photo_name"].is_null());

    let (status, _) = app.delete(&format!("/api/singers/{id}"), &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&format!("/api/singers/{id}"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Singer not found");
}

#[tokio::test]
async fn test_nested_creation_and_attach() {
    let app = TestApp::new();
    let owner = app.env.user("owner", Role::User);
    let token = app.token(&owner);

    let (_, body) = app
        .multipart(
            Method::POST,
            "/api/singers",
            &token,
            Some(json!({"name": "A", "info": "band", "singer_type": "BAND"})),
            None,
        )
        .await;
    let singer_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .multipart(
            Method::POST,
            &format!("/api/singers/{singer_id}/singer-albums"),
            &token,
            Some(json!({"name": "Debut"})),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"].get("singer_id").is_none());
    let album_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .multipart(
            Method::POST,
            &format!("/api/singer-albums/{album_id}/songs"),
            &token,
            Some(json!({
                "name": "Opener",
                "description": "first",
                "artist": "A",
                "song_type": "ROCK",
                "language": "english",
                "rate": 5
            })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let song_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = app
        .json(
            Method::POST,
            "/api/playlists",
            &token,
            json!({"name": "Road trip"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let playlist_id = body["data"]["id"].as_i64().unwrap();

    let path = format!("/api/songs/{song_id}/playlists/{playlist_id}");
    let (status, first) = app.json(Method::POST, &path, &token, json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, second) = app.json(Method::POST, &path, &token, json!({})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(first["data"]["song_id"], song_id);

    let (status, _) = app
        .multipart(
            Method::POST,
            "/api/singer-albums/9999/songs",
            &token,
            Some(json!({
                "name": "Lost",
                "description": "",
                "artist": "",
                "song_type": "OTHER",
                "language": "",
                "rate": 0
            })),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_requires_payload() {
    let app = TestApp::new();
    let owner = app.env.user("owner", Role::User);

    let (status, body) = app
        .multipart(
            Method::POST,
            "/api/singers",
            &app.token(&owner),
            None,
            Some(("a.png", &b"png"[..])),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing payload field");
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let app = TestApp::new();
    let owner = app.env.user("owner", Role::User);
    let big = vec![0u8; 10 * 1024 * 1024 + 1];

    let (status, _) = app
        .multipart(
            Method::POST,
            "/api/singers",
            &app.token(&owner),
            Some(json!({"name": "Big", "info": "", "singer_type": "SINGLE"})),
            Some(("big.bin", big.as_slice())),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!app.env.upload_path("big.bin").exists());
}

#[tokio::test]
async fn test_user_endpoints_follow_self_only_rule() {
    let app = TestApp::new();
    let admin = app.env.user("admin", Role::Admin);
    let admin_token = app.token(&admin);

    let (status, body) = app
        .json(
            Method::POST,
            "/api/users",
            &admin_token,
            json!({"username": "dana", "email": "dana@example.com", "password": "pw-123456"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["role"], "USER");
    assert!(body["data"].get("password_hash").is_none());
    let dana_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = app
        .multipart(
            Method::PUT,
            &format!("/api/users/{dana_id}"),
            &admin_token,
            Some(json!({"username": "renamed"})),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let dana = songbook::types::Principal::new(dana_id, Role::User);
    let dana_token = app.token(&dana);
    let (status, body) = app
        .multipart(
            Method::PUT,
            &format!("/api/users/{dana_id}"),
            &dana_token,
            Some(json!({"username": "dana2"})),
            Some(("dana.png", &b"png"[..])),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["username"], "dana2");
    assert_eq!(body["data"]["photo_name"], "dana.png");

    let (status, _) = app
        .json(
            Method::POST,
            "/api/users",
            &dana_token,
            json!({"username": "eve", "email": "eve@example.com", "password": "pw"}),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .delete(&format!("/api/users/{dana_id}"), &dana_token)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let app = TestApp::new();
    let admin = app.env.user("admin", Role::Admin);
    let token = app.token(&admin);
    let body = json!({"username": "x", "email": "dup@example.com", "password": "pw"});

    let (status, _) = app
        .json(Method::POST, "/api/users", &token, body.clone())
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.json(Method::POST, "/api/users", &token, body).await;
    assert_eq!(status, StatusCode::CONFLICT);
}
