use chrono::Utc;

use super::{Context, Redact, Resource, not_empty, page_bounds};
use crate::error::{Error, Result};
use crate::types::*;
use crate::upload::UploadedFile;

#[derive(Clone)]
pub struct SongService {
    ctx: Context,
}

impl SongService {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self, page: i64, size: i64) -> Result<Vec<SongView>> {
        let (offset, limit) = page_bounds(page, size)?;
        let songs = self.ctx.store.list_songs(offset, limit)?;
        Ok(songs.iter().map(Redact::redact).collect())
    }

    pub async fn get_one(&self, id: i64) -> Result<SongView> {
        self.ctx.lookup.get::<Song>(id).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: SongUpdate,
        file: Option<UploadedFile>,
        principal: &Principal,
    ) -> Result<SongView> {
        self.ctx
            .access
            .require_owner_or_admin::<Song>(id, principal)
            .await?;
        if let Some(name) = &input.name {
            not_empty("name", name)?;
        }

        let photo_name = self.ctx.store_upload(file.as_ref()).await?;

        let mut song = self
            .ctx
            .store
            .get_song(id)?
            .ok_or(Error::NotFound(Song::NAME))?;
        if let Some(name) = input.name {
            song.name = name;
        }
        if let Some(description) = input.description {
            song.description = description;
        }
        if let Some(artist) = input.artist {
            song.artist = artist;
        }
        if let Some(song_type) = input.song_type {
            song.song_type = song_type;
        }
        if let Some(language) = input.language {
            song.language = language;
        }
        if let Some(rate) = input.rate {
            song.rate = rate;
        }
        song.photo_name = photo_name;
        song.updated_at = Utc::now();

        self.ctx.store.update_song(&song)?;

        tracing::info!(kind = Song::KIND, id, user_id = principal.id, "Updated");
        Ok(song.redact())
    }

    pub async fn delete(&self, id: i64, principal: &Principal) -> Result<()> {
        self.ctx
            .access
            .require_owner_or_admin::<Song>(id, principal)
            .await?;

        if !self.ctx.store.delete_song(id)? {
            return Err(Error::NotFound(Song::NAME));
        }

        tracing::info!(kind = Song::KIND, id, user_id = principal.id, "Deleted");
        Ok(())
    }

    /// Links a song to a playlist. Repeating the call adds another row.
    pub async fn attach_to_playlist(
        &self,
        song_id: i64,
        playlist_id: i64,
    ) -> Result<PlaylistMembership> {
        let song = self.ctx.lookup.lookup::<Song>(song_id).await?;
        let playlist = self
            .ctx
            .store
            .get_playlist(playlist_id)?
            .ok_or(Error::NotFound(Playlist::NAME))?;

        let membership = self.ctx.store.add_playlist_song(playlist.id, song.id)?;

        tracing::info!(
            song_id,
            playlist_id,
            membership_id = membership.id,
            "Attached song to playlist"
        );
        Ok(membership)
    }
}
