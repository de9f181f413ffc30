use serde::Serialize;

use crate::types::*;

/// Projection of a record into the form that may leave the service boundary.
///
/// Views are their own projection, so redacting twice yields the same value.
pub trait Redact {
    type View: Serialize + Clone + PartialEq + Send + 'static;

    fn redact(&self) -> Self::View;
}

impl Redact for Singer {
    type View = SingerView;

    fn redact(&self) -> SingerView {
        SingerView {
            id: self.id,
            name: self.name.clone(),
            info: self.info.clone(),
            singer_type: self.singer_type,
            photo_name: self.photo_name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Redact for SingerAlbum {
    type View = SingerAlbumView;

    fn redact(&self) -> SingerAlbumView {
        SingerAlbumView {
            id: self.id,
            name: self.name.clone(),
            photo_name: self.photo_name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Redact for Song {
    type View = SongView;

    fn redact(&self) -> SongView {
        SongView {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            artist: self.artist.clone(),
            song_type: self.song_type,
            language: self.language.clone(),
            rate: self.rate,
            photo_name: self.photo_name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Redact for Playlist {
    type View = PlaylistView;

    fn redact(&self) -> PlaylistView {
        PlaylistView {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Redact for User {
    type View = UserView;

    fn redact(&self) -> UserView {
        UserView {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            photo_name: self.photo_name.clone(),
            role: self.role,
            confirmed: self.confirmed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

macro_rules! redacts_to_self {
    ($($view:ty),* $(,)?) => {
        $(
            impl Redact for $view {
                type View = $view;

                fn redact(&self) -> $view {
                    self.clone()
                }
            }
        )*
    };
}

redacts_to_self!(SingerView, SingerAlbumView, SongView, PlaylistView, UserView);
