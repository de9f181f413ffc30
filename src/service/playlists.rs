use chrono::Utc;

use super::{Context, Redact, Resource, not_empty, page_bounds};
use crate::error::{Error, Result};
use crate::types::*;

#[derive(Clone)]
pub struct PlaylistService {
    ctx: Context,
}

impl PlaylistService {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self, page: i64, size: i64) -> Result<Vec<PlaylistView>> {
        let (offset, limit) = page_bounds(page, size)?;
        let playlists = self.ctx.store.list_playlists(offset, limit)?;
        Ok(playlists.iter().map(Redact::redact).collect())
    }

    pub async fn get_one(&self, id: i64) -> Result<PlaylistView> {
        self.ctx.lookup.get::<Playlist>(id).await
    }

    pub fn create(&self, input: PlaylistInput, principal: &Principal) -> Result<PlaylistView> {
        not_empty("name", &input.name)?;

        let playlist = self.ctx.store.create_playlist(principal.id, &input)?;

        tracing::info!(kind = Playlist::KIND, id = playlist.id, user_id = principal.id, "Created");
        Ok(playlist.redact())
    }

    pub async fn update(
        &self,
        id: i64,
        input: PlaylistUpdate,
        principal: &Principal,
    ) -> Result<PlaylistView> {
        self.ctx
            .access
            .require_owner_or_admin::<Playlist>(id, principal)
            .await?;

        let mut playlist = self
            .ctx
            .store
            .get_playlist(id)?
            .ok_or(Error::NotFound(Playlist::NAME))?;
        if let Some(name) = input.name {
            not_empty("name", &name)?;
            playlist.name = name;
        }
        playlist.updated_at = Utc::now();

        self.ctx.store.update_playlist(&playlist)?;

        tracing::info!(kind = Playlist::KIND, id, user_id = principal.id, "Updated");
        Ok(playlist.redact())
    }

    pub async fn delete(&self, id: i64, principal: &Principal) -> Result<()> {
        self.ctx
            .access
            .require_owner_or_admin::<Playlist>(id, principal)
            .await?;

        if !self.ctx.store.delete_playlist(id)? {
            return Err(Error::NotFound(Playlist::NAME));
        }

        tracing::info!(kind = Playlist::KIND, id, user_id = principal.id, "Deleted");
        Ok(())
    }
}
