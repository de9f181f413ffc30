use serde::Serialize;
use serde::de::DeserializeOwned;

use super::redact::Redact;
use crate::error::Result;
use crate::store::Store;
use crate::types::{Playlist, Singer, SingerAlbum, Song, User};

/// A record kind served through the read-through cache.
pub trait Resource: Redact + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Cache key prefix.
    const KIND: &'static str;
    /// Display name used in `NotFound` errors.
    const NAME: &'static str;

    fn load(store: &dyn Store, id: i64) -> Result<Option<Self>>;
}

/// A resource stamped with the id of the user that created it.
pub trait Owned: Resource {
    fn owner_id(&self) -> i64;
}

impl Resource for Singer {
    const KIND: &'static str = "singer";
    const NAME: &'static str = "Singer";

    fn load(store: &dyn Store, id: i64) -> Result<Option<Self>> {
        store.get_singer(id)
    }
}

impl Owned for Singer {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Resource for SingerAlbum {
    const KIND: &'static str = "singer-album";
    const NAME: &'static str = "Singer album";

    fn load(store: &dyn Store, id: i64) -> Result<Option<Self>> {
        store.get_singer_album(id)
    }
}

impl Owned for SingerAlbum {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Resource for Song {
    const KIND: &'static str = "song";
    const NAME: &'static str = "Song";

    fn load(store: &dyn Store, id: i64) -> Result<Option<Self>> {
        store.get_song(id)
    }
}

impl Owned for Song {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Resource for Playlist {
    const KIND: &'static str = "playlist";
    const NAME: &'static str = "Playlist";

    fn load(store: &dyn Store, id: i64) -> Result<Option<Self>> {
        store.get_playlist(id)
    }
}

impl Owned for Playlist {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Resource for User {
    const KIND: &'static str = "user";
    const NAME: &'static str = "User";

    fn load(store: &dyn Store, id: i64) -> Result<Option<Self>> {
        store.get_user(id)
    }
}
