use chrono::Utc;

use super::{Context, Redact, Resource, not_empty, page_bounds};
use crate::error::{Error, Result};
use crate::types::*;
use crate::upload::UploadedFile;

#[derive(Clone)]
pub struct SingerService {
    ctx: Context,
}

impl SingerService {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self, page: i64, size: i64) -> Result<Vec<SingerView>> {
        let (offset, limit) = page_bounds(page, size)?;
        let singers = self.ctx.store.list_singers(offset, limit)?;
        Ok(singers.iter().map(Redact::redact).collect())
    }

    pub async fn get_one(&self, id: i64) -> Result<SingerView> {
        self.ctx.lookup.get::<Singer>(id).await
    }

    pub async fn create(
        &self,
        input: SingerInput,
        file: Option<UploadedFile>,
        principal: &Principal,
    ) -> Result<SingerView> {
        not_empty("name", &input.name)?;

        let photo_name = self.ctx.store_upload(file.as_ref()).await?;
        let singer = self
            .ctx
            .store
            .create_singer(principal.id, &input, photo_name.as_deref())?;

        tracing::info!(kind = Singer::KIND, id = singer.id, user_id = principal.id, "Created");
        Ok(singer.redact())
    }

    pub async fn update(
        &self,
        id: i64,
        input: SingerUpdate,
        file: Option<UploadedFile>,
        principal: &Principal,
    ) -> Result<SingerView> {
        self.ctx
            .access
            .require_owner_or_admin::<Singer>(id, principal)
            .await?;
        if let Some(name) = &input.name {
            not_empty("name", name)?;
        }

        let photo_name = self.ctx.store_upload(file.as_ref()).await?;

        let mut singer = self
            .ctx
            .store
            .get_singer(id)?
            .ok_or(Error::NotFound(Singer::NAME))?;
        if let Some(name) = input.name {
            singer.name = name;
        }
        if let Some(info) = input.info {
            singer.info = info;
        }
        if let Some(singer_type) = input.singer_type {
            singer.singer_type = singer_type;
        }
        singer.photo_name = photo_name;
        singer.updated_at = Utc::now();

        self.ctx.store.update_singer(&singer)?;

        tracing::info!(kind = Singer::KIND, id, user_id = principal.id, "Updated");
        Ok(singer.redact())
    }

    pub async fn delete(&self, id: i64, principal: &Principal) -> Result<()> {
        self.ctx
            .access
            .require_owner_or_admin::<Singer>(id, principal)
            .await?;

        if !self.ctx.store.delete_singer(id)? {
            return Err(Error::NotFound(Singer::NAME));
        }

        tracing::info!(kind = Singer::KIND, id, user_id = principal.id, "Deleted");
        Ok(())
    }

    /// Creates an album under an existing singer, owned by the caller.
    pub async fn create_singer_album(
        &self,
        singer_id: i64,
        input: SingerAlbumInput,
        file: Option<UploadedFile>,
        principal: &Principal,
    ) -> Result<SingerAlbumView> {
        not_empty("name", &input.name)?;

        let singer = self.ctx.lookup.lookup::<Singer>(singer_id).await?;

        let photo_name = self.ctx.store_upload(file.as_ref()).await?;
        let album = self.ctx.store.create_singer_album(
            principal.id,
            singer.id,
            &input,
            photo_name.as_deref(),
        )?;

        tracing::info!(
            kind = SingerAlbum::KIND,
            id = album.id,
            singer_id,
            user_id = principal.id,
            "Created"
        );
        Ok(album.redact())
    }
}
