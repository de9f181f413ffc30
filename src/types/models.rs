use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ParseEnumError, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SingerType {
    Single,
    Band,
}

impl SingerType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SingerType::Single => "SINGLE",
            SingerType::Band => "BAND",
        }
    }
}

impl FromStr for SingerType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLE" => Ok(SingerType::Single),
            "BAND" => Ok(SingerType::Band),
            _ => Err(ParseEnumError {
                kind: "singer type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SongType {
    Pop,
    Rock,
    Rap,
    Jazz,
    Classical,
    Other,
}

impl SongType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SongType::Pop => "POP",
            SongType::Rock => "ROCK",
            SongType::Rap => "RAP",
            SongType::Jazz => "JAZZ",
            SongType::Classical => "CLASSICAL",
            SongType::Other => "OTHER",
        }
    }
}

impl FromStr for SongType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POP" => Ok(SongType::Pop),
            "ROCK" => Ok(SongType::Rock),
            "RAP" => Ok(SongType::Rap),
            "JAZZ" => Ok(SongType::Jazz),
            "CLASSICAL" => Ok(SongType::Classical),
            "OTHER" => Ok(SongType::Other),
            _ => Err(ParseEnumError {
                kind: "song type",
                value: s.to_string(),
            }),
        }
    }
}

// Stored records. These carry every column, including the ones that must
// never leave the service boundary; the serialized form is what the cache
// holds.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Singer {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub info: String,
    pub singer_type: SingerType,
    pub photo_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingerAlbum {
    pub id: i64,
    pub user_id: i64,
    pub singer_id: i64,
    pub name: String,
    pub photo_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub user_id: i64,
    pub singer_album_id: i64,
    pub name: String,
    pub description: String,
    pub artist: String,
    pub song_type: SongType,
    pub language: String,
    pub rate: i32,
    pub photo_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub photo_name: Option<String>,
    pub role: Role,
    pub confirmed: bool,
    pub password_hash: String,
    pub session_secret: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistMembership {
    pub id: i64,
    pub playlist_id: i64,
    pub song_id: i64,
    pub created_at: DateTime<Utc>,
}

// Outward views: projections without ownership keys or credentials.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingerView {
    pub id: i64,
    pub name: String,
    pub info: String,
    pub singer_type: SingerType,
    pub photo_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingerAlbumView {
    pub id: i64,
    pub name: String,
    pub photo_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub artist: String,
    pub song_type: SongType,
    pub language: String,
    pub rate: i32,
    pub photo_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistView {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub photo_name: Option<String>,
    pub role: Role,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Inputs

#[derive(Debug, Clone, Deserialize)]
pub struct SingerInput {
    pub name: String,
    pub info: String,
    pub singer_type: SingerType,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SingerUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub singer_type: Option<SingerType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingerAlbumInput {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SingerAlbumUpdate {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongInput {
    pub name: String,
    pub description: String,
    pub artist: String,
    pub song_type: SongType,
    pub language: String,
    pub rate: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub song_type: Option<SongType>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub rate: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistInput {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistUpdate {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
