use chrono::Utc;

use super::{Context, Redact, Resource, not_empty, page_bounds};
use crate::error::{Error, Result};
use crate::types::*;
use crate::upload::UploadedFile;

#[derive(Clone)]
pub struct SingerAlbumService {
    ctx: Context,
}

impl SingerAlbumService {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self, page: i64, size: i64) -> Result<Vec<SingerAlbumView>> {
        let (offset, limit) = page_bounds(page, size)?;
        let albums = self.ctx.store.list_singer_albums(offset, limit)?;
        Ok(albums.iter().map(Redact::redact).collect())
    }

    pub async fn get_one(&self, id: i64) -> Result<SingerAlbumView> {
        self.ctx.lookup.get::<SingerAlbum>(id).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: SingerAlbumUpdate,
        file: Option<UploadedFile>,
        principal: &Principal,
    ) -> Result<SingerAlbumView> {
        self.ctx
            .access
            .require_owner_or_admin::<SingerAlbum>(id, principal)
            .await?;
        if let Some(name) = &input.name {
            not_empty("name", name)?;
        }

        let photo_name = self.ctx.store_upload(file.as_ref()).await?;

        let mut album = self
            .ctx
            .store
            .get_singer_album(id)?
            .ok_or(Error::NotFound(SingerAlbum::NAME))?;
        if let Some(name) = input.name {
            album.name = name;
        }
        album.photo_name = photo_name;
        album.updated_at = Utc::now();

        self.ctx.store.update_singer_album(&album)?;

        tracing::info!(kind = SingerAlbum::KIND, id, user_id = principal.id, "Updated");
        Ok(album.redact())
    }

    pub async fn delete(&self, id: i64, principal: &Principal) -> Result<()> {
        self.ctx
            .access
            .require_owner_or_admin::<SingerAlbum>(id, principal)
            .await?;

        if !self.ctx.store.delete_singer_album(id)? {
            return Err(Error::NotFound(SingerAlbum::NAME));
        }

        tracing::info!(kind = SingerAlbum::KIND, id, user_id = principal.id, "Deleted");
        Ok(())
    }

    /// Creates a song under an existing album, owned by the caller.
    pub async fn create_song(
        &self,
        album_id: i64,
        input: SongInput,
        file: Option<UploadedFile>,
        principal: &Principal,
    ) -> Result<SongView> {
        not_empty("name", &input.name)?;

        let album = self.ctx.lookup.lookup::<SingerAlbum>(album_id).await?;

        let photo_name = self.ctx.store_upload(file.as_ref()).await?;
        let song =
            self.ctx
                .store
                .create_song(principal.id, album.id, &input, photo_name.as_deref())?;

        tracing::info!(
            kind = Song::KIND,
            id = song.id,
            album_id,
            user_id = principal.id,
            "Created"
        );
        Ok(song.redact())
    }
}
