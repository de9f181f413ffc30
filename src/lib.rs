//! # Songbook
//!
//! A catalog server for singers, their albums and songs, playlists and user
//! accounts, usable both as a standalone binary and as a library.
//!
//! Reads go through a read-through cache: the first lookup of a record stores
//! a snapshot and later lookups return that snapshot. Writes never refresh
//! or evict it.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::path::Path;
//! use songbook::cache::MemoryCache;
//! use songbook::config::JwtConfig;
//! use songbook::server::{AppState, create_router};
//! use songbook::store::{SqliteStore, Store};
//! use songbook::upload::LocalUploader;
//!
//! let store = SqliteStore::new("./data/songbook.db").unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(
//!     Arc::new(store),
//!     Arc::new(MemoryCache::new()),
//!     Arc::new(LocalUploader::new(Path::new("./data/uploads"))),
//!     JwtConfig::new("secret").unwrap(),
//! ));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `songbook` binary.

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod server;
pub mod service;
pub mod store;
pub mod types;
pub mod upload;

pub use error::{Error, Result};
