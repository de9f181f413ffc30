#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use songbook::auth::issue_access_token;
use songbook::cache::{Cache, MemoryCache};
use songbook::config::JwtConfig;
use songbook::server::{AppState, create_router};
use songbook::service::Services;
use songbook::store::{SqliteStore, Store};
use songbook::types::{Principal, Role};
use songbook::upload::{LocalUploader, Uploader};

/// An isolated store, cache and upload directory in a temp dir.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub store: Arc<SqliteStore>,
    pub cache: Arc<MemoryCache>,
    pub uploader: Arc<dyn Uploader>,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let uploader: Arc<dyn Uploader> =
            Arc::new(LocalUploader::new(&temp_dir.path().join("uploads")));
        Self::build(temp_dir, uploader)
    }

    pub fn with_uploader(uploader: Arc<dyn Uploader>) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        Self::build(temp_dir, uploader)
    }

    fn build(temp_dir: TempDir, uploader: Arc<dyn Uploader>) -> Self {
        let store = SqliteStore::new(temp_dir.path().join("songbook.db")).expect("open store");
        store.initialize().expect("initialize schema");

        Self {
            temp_dir,
            store: Arc::new(store),
            cache: Arc::new(MemoryCache::new()),
            uploader,
        }
    }

    pub fn services(&self) -> Services {
        let store: Arc<dyn Store> = self.store.clone();
        let cache: Arc<dyn Cache> = self.cache.clone();
        Services::new(store, cache, self.uploader.clone())
    }

    pub fn upload_path(&self, filename: &str) -> std::path::PathBuf {
        self.temp_dir.path().join("uploads").join(filename)
    }

    /// Inserts an account directly and returns the principal a token for it
    /// would carry.
    pub fn user(&self, username: &str, role: Role) -> Principal {
        let user = self
            .store
            .create_user(
                username,
                &format!("{username}@example.com"),
                "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA",
                role,
            )
            .expect("create user");
        Principal::new(user.id, user.role)
    }
}

/// The full router over a [`TestEnv`], driven in-process.
pub struct TestApp {
    pub env: TestEnv,
    pub router: Router,
    pub jwt: JwtConfig,
}

impl TestApp {
    pub fn new() -> Self {
        let env = TestEnv::new();
        let jwt = JwtConfig::new("integration-test-secret").expect("jwt config");

        let store: Arc<dyn Store> = env.store.clone();
        let cache: Arc<dyn Cache> = env.cache.clone();
        let state = Arc::new(AppState::new(
            store,
            cache,
            env.uploader.clone(),
            jwt.clone(),
        ));

        Self {
            router: create_router(state),
            env,
            jwt,
        }
    }

    pub fn token(&self, principal: &Principal) -> String {
        issue_access_token(principal.id, principal.role, &self.jwt).expect("issue token")
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(path)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(path)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn json(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri(path)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn multipart(
        &self,
        method: Method,
        path: &str,
        token: &str,
        payload: Option<Value>,
        file: Option<(&str, &[u8])>,
    ) -> (StatusCode, Value) {
        let (content_type, body) = multipart_body(payload, file);
        self.send(
            Request::builder()
                .method(method)
                .uri(path)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }
}

const BOUNDARY: &str = "songbook-test-boundary";

pub fn multipart_body(payload: Option<Value>, file: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    if let Some(payload) = payload {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"payload\"\r\n\r\n{payload}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
