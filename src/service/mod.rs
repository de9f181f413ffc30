//! Resource services: read-through lookups, ownership checks, mutations and
//! redaction of everything that is returned.

mod access;
mod lookup;
mod playlists;
mod redact;
mod resource;
mod singer_albums;
mod singers;
mod songs;
mod users;

use std::sync::Arc;

pub use access::Authorizer;
pub use lookup::ReadThrough;
pub use playlists::PlaylistService;
pub use redact::Redact;
pub use resource::{Owned, Resource};
pub use singer_albums::SingerAlbumService;
pub use singers::SingerService;
pub use songs::SongService;
pub use users::UserService;

use crate::cache::Cache;
use crate::error::{Error, Result};
use crate::store::Store;
use crate::upload::{UploadedFile, Uploader};

/// Handles shared by every service. Cloning is cheap.
#[derive(Clone)]
pub struct Context {
    pub store: Arc<dyn Store>,
    pub uploader: Arc<dyn Uploader>,
    pub lookup: ReadThrough,
    pub access: Authorizer,
}

impl Context {
    pub fn new(store: Arc<dyn Store>, cache: Arc<dyn Cache>, uploader: Arc<dyn Uploader>) -> Self {
        let lookup = ReadThrough::new(store.clone(), cache);
        let access = Authorizer::new(lookup.clone());
        Self {
            store,
            uploader,
            lookup,
            access,
        }
    }

    /// Stores an attached file and returns the name to record on the row.
    /// A failed upload aborts the calling operation before anything is written.
    async fn store_upload(&self, file: Option<&UploadedFile>) -> Result<Option<String>> {
        match file {
            Some(file) => {
                self.uploader.upload(&file.filename, &file.bytes).await?;
                Ok(Some(file.filename.clone()))
            }
            None => Ok(None),
        }
    }
}

/// The five resource services, built once over the same handles.
#[derive(Clone)]
pub struct Services {
    pub singers: SingerService,
    pub singer_albums: SingerAlbumService,
    pub songs: SongService,
    pub playlists: PlaylistService,
    pub users: UserService,
}

impl Services {
    pub fn new(store: Arc<dyn Store>, cache: Arc<dyn Cache>, uploader: Arc<dyn Uploader>) -> Self {
        let ctx = Context::new(store, cache, uploader);
        Self {
            singers: SingerService::new(ctx.clone()),
            singer_albums: SingerAlbumService::new(ctx.clone()),
            songs: SongService::new(ctx.clone()),
            playlists: PlaylistService::new(ctx.clone()),
            users: UserService::new(ctx),
        }
    }
}

/// Converts `page`/`size` into `(offset, limit)`.
pub fn page_bounds(page: i64, size: i64) -> Result<(i64, i64)> {
    if page < 0 || size < 0 {
        return Err(Error::BadRequest(
            "page and size must not be negative".to_string(),
        ));
    }
    let offset = page
        .checked_mul(size)
        .ok_or_else(|| Error::BadRequest("page out of range".to_string()))?;
    Ok((offset, size))
}

fn not_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}
