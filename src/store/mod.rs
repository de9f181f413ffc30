mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the primary database interface.
///
/// List operations page with `offset`/`limit` and return rows in the
/// database's default order.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // User operations
    fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User>;
    fn get_user(&self, id: i64) -> Result<Option<User>>;
    fn list_users(&self, offset: i64, limit: i64) -> Result<Vec<User>>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: i64) -> Result<bool>;
    fn has_admin(&self) -> Result<bool>;

    // Singer operations
    fn create_singer(
        &self,
        user_id: i64,
        input: &SingerInput,
        photo_name: Option<&str>,
    ) -> Result<Singer>;
    fn get_singer(&self, id: i64) -> Result<Option<Singer>>;
    fn list_singers(&self, offset: i64, limit: i64) -> Result<Vec<Singer>>;
    fn update_singer(&self, singer: &Singer) -> Result<()>;
    fn delete_singer(&self, id: i64) -> Result<bool>;

    // Singer album operations (one-to-many under a singer)
    fn create_singer_album(
        &self,
        user_id: i64,
        singer_id: i64,
        input: &SingerAlbumInput,
        photo_name: Option<&str>,
    ) -> Result<SingerAlbum>;
    fn get_singer_album(&self, id: i64) -> Result<Option<SingerAlbum>>;
    fn list_singer_albums(&self, offset: i64, limit: i64) -> Result<Vec<SingerAlbum>>;
    fn update_singer_album(&self, album: &SingerAlbum) -> Result<()>;
    fn delete_singer_album(&self, id: i64) -> Result<bool>;

    // Song operations (one-to-many under a singer album)
    fn create_song(
        &self,
        user_id: i64,
        singer_album_id: i64,
        input: &SongInput,
        photo_name: Option<&str>,
    ) -> Result<Song>;
    fn get_song(&self, id: i64) -> Result<Option<Song>>;
    fn list_songs(&self, offset: i64, limit: i64) -> Result<Vec<Song>>;
    fn update_song(&self, song: &Song) -> Result<()>;
    fn delete_song(&self, id: i64) -> Result<bool>;

    // Playlist operations
    fn create_playlist(&self, user_id: i64, input: &PlaylistInput) -> Result<Playlist>;
    fn get_playlist(&self, id: i64) -> Result<Option<Playlist>>;
    fn list_playlists(&self, offset: i64, limit: i64) -> Result<Vec<Playlist>>;
    fn update_playlist(&self, playlist: &Playlist) -> Result<()>;
    fn delete_playlist(&self, id: i64) -> Result<bool>;

    // Playlist-Song M2M operations
    fn add_playlist_song(&self, playlist_id: i64, song_id: i64) -> Result<PlaylistMembership>;
    fn list_playlist_songs(&self, playlist_id: i64) -> Result<Vec<PlaylistMembership>>;
}
