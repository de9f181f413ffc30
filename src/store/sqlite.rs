use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

const USER_COLUMNS: &str = "id, username, email, photo_name, role, confirmed, password_hash, \
                            session_secret, created_at, updated_at";
const SINGER_COLUMNS: &str =
    "id, user_id, name, info, singer_type, photo_name, created_at, updated_at";
const SINGER_ALBUM_COLUMNS: &str =
    "id, user_id, singer_id, name, photo_name, created_at, updated_at";
const SONG_COLUMNS: &str = "id, user_id, singer_album_id, name, description, artist, song_type, \
                            language, rate, photo_name, created_at, updated_at";
const PLAYLIST_COLUMNS: &str = "id, user_id, name, created_at, updated_at";
const MEMBERSHIP_COLUMNS: &str = "id, playlist_id, song_id, created_at";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a guard to the underlying database connection.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn()
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = ParseEnumError>,
{
    let text: String = row.get(idx)?;
    text.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        photo_name: row.get(3)?,
        role: parse_column(row, 4)?,
        confirmed: row.get(5)?,
        password_hash: row.get(6)?,
        session_secret: row.get(7)?,
        created_at: parse_datetime(&row.get::<_, String>(8)?),
        updated_at: parse_datetime(&row.get::<_, String>(9)?),
    })
}

fn singer_from_row(row: &Row<'_>) -> rusqlite::Result<Singer> {
    Ok(Singer {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        info: row.get(3)?,
        singer_type: parse_column(row, 4)?,
        photo_name: row.get(5)?,
        created_at: parse_datetime(&row.get::<_, String>(6)?),
        updated_at: parse_datetime(&row.get::<_, String>(7)?),
    })
}

fn singer_album_from_row(row: &Row<'_>) -> rusqlite::Result<SingerAlbum> {
    Ok(SingerAlbum {
        id: row.get(0)?,
        user_id: row.get(1)?,
        singer_id: row.get(2)?,
        name: row.get(3)?,
        photo_name: row.get(4)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?),
        updated_at: parse_datetime(&row.get::<_, String>(6)?),
    })
}

fn song_from_row(row: &Row<'_>) -> rusqlite::Result<Song> {
    Ok(Song {
        id: row.get(0)?,
        user_id: row.get(1)?,
        singer_album_id: row.get(2)?,
        name: row.get(3)?,
        description: row.get(4)?,
        artist: row.get(5)?,
        song_type: parse_column(row, 6)?,
        language: row.get(7)?,
        rate: row.get(8)?,
        photo_name: row.get(9)?,
        created_at: parse_datetime(&row.get::<_, String>(10)?),
        updated_at: parse_datetime(&row.get::<_, String>(11)?),
    })
}

fn playlist_from_row(row: &Row<'_>) -> rusqlite::Result<Playlist> {
    Ok(Playlist {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?),
        updated_at: parse_datetime(&row.get::<_, String>(4)?),
    })
}

fn membership_from_row(row: &Row<'_>) -> rusqlite::Result<PlaylistMembership> {
    Ok(PlaylistMembership {
        id: row.get(0)?,
        playlist_id: row.get(1)?,
        song_id: row.get(2)?,
        created_at: parse_datetime(&row.get::<_, String>(3)?),
    })
}

fn get_one<T>(
    conn: &Connection,
    sql: &str,
    id: i64,
    map: fn(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Option<T>> {
    conn.query_row(sql, params![id], map)
        .optional()
        .map_err(Error::from)
}

fn list_page<T>(
    conn: &Connection,
    sql: &str,
    offset: i64,
    limit: i64,
    map: fn(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![limit, offset], map)?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::from)
}

/// Reads back the row that was just inserted on this connection.
fn inserted<T>(
    conn: &Connection,
    sql: &str,
    map: fn(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<T> {
    let id = conn.last_insert_rowid();
    conn.query_row(sql, params![id], map).map_err(Error::from)
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // User operations

    fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User> {
        let conn = self.conn();
        let now = format_datetime(&Utc::now());
        conn.execute(
            "INSERT INTO users (username, email, role, confirmed, password_hash, created_at, updated_at)
             VALUES (?1, ?2, ?3, 0, ?4, ?5, ?6)",
            params![username, email, role.as_str(), password_hash, now, now],
        )?;
        inserted(
            &conn,
            &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
            user_from_row,
        )
    }

    fn get_user(&self, id: i64) -> Result<Option<User>> {
        get_one(
            &self.conn(),
            &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
            id,
            user_from_row,
        )
    }

    fn list_users(&self, offset: i64, limit: i64) -> Result<Vec<User>> {
        list_page(
            &self.conn(),
            &format!("SELECT {USER_COLUMNS} FROM users LIMIT ?1 OFFSET ?2"),
            offset,
            limit,
            user_from_row,
        )
    }

    fn update_user(&self, user: &User) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE users SET username = ?1, email = ?2, photo_name = ?3, role = ?4, confirmed = ?5,
             password_hash = ?6, session_secret = ?7, updated_at = ?8 WHERE id = ?9",
            params![
                user.username,
                user.email,
                user.photo_name,
                user.role.as_str(),
                user.confirmed,
                user.password_hash,
                user.session_secret,
                format_datetime(&user.updated_at),
                user.id,
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound("User"));
        }
        Ok(())
    }

    fn delete_user(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM users WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    fn has_admin(&self) -> Result<bool> {
        let count: i64 = self.conn().query_row(
            "SELECT COUNT(*) FROM users WHERE role = ?1",
            params![Role::Admin.as_str()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    // Singer operations

    fn create_singer(
        &self,
        user_id: i64,
        input: &SingerInput,
        photo_name: Option<&str>,
    ) -> Result<Singer> {
        let conn = self.conn();
        let now = format_datetime(&Utc::now());
        conn.execute(
            "INSERT INTO singers (user_id, name, info, singer_type, photo_name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                user_id,
                input.name,
                input.info,
                input.singer_type.as_str(),
                photo_name,
                now,
                now,
            ],
        )?;
        inserted(
            &conn,
            &format!("SELECT {SINGER_COLUMNS} FROM singers WHERE id = ?1"),
            singer_from_row,
        )
    }

    fn get_singer(&self, id: i64) -> Result<Option<Singer>> {
        get_one(
            &self.conn(),
            &format!("SELECT {SINGER_COLUMNS} FROM singers WHERE id = ?1"),
            id,
            singer_from_row,
        )
    }

    fn list_singers(&self, offset: i64, limit: i64) -> Result<Vec<Singer>> {
        list_page(
            &self.conn(),
            &format!("SELECT {SINGER_COLUMNS} FROM singers LIMIT ?1 OFFSET ?2"),
            offset,
            limit,
            singer_from_row,
        )
    }

    fn update_singer(&self, singer: &Singer) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE singers SET name = ?1, info = ?2, singer_type = ?3, photo_name = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                singer.name,
                singer.info,
                singer.singer_type.as_str(),
                singer.photo_name,
                format_datetime(&singer.updated_at),
                singer.id,
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound("Singer"));
        }
        Ok(())
    }

    fn delete_singer(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM singers WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Singer album operations

    fn create_singer_album(
        &self,
        user_id: i64,
        singer_id: i64,
        input: &SingerAlbumInput,
        photo_name: Option<&str>,
    ) -> Result<SingerAlbum> {
        let conn = self.conn();
        let now = format_datetime(&Utc::now());
        conn.execute(
            "INSERT INTO singer_albums (user_id, singer_id, name, photo_name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![user_id, singer_id, input.name, photo_name, now, now],
        )?;
        inserted(
            &conn,
            &format!("SELECT {SINGER_ALBUM_COLUMNS} FROM singer_albums WHERE id = ?1"),
            singer_album_from_row,
        )
    }

    fn get_singer_album(&self, id: i64) -> Result<Option<SingerAlbum>> {
        get_one(
            &self.conn(),
            &format!("SELECT {SINGER_ALBUM_COLUMNS} FROM singer_albums WHERE id = ?1"),
            id,
            singer_album_from_row,
        )
    }

    fn list_singer_albums(&self, offset: i64, limit: i64) -> Result<Vec<SingerAlbum>> {
        list_page(
            &self.conn(),
            &format!("SELECT {SINGER_ALBUM_COLUMNS} FROM singer_albums LIMIT ?1 OFFSET ?2"),
            offset,
            limit,
            singer_album_from_row,
        )
    }

    fn update_singer_album(&self, album: &SingerAlbum) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE singer_albums SET name = ?1, photo_name = ?2, updated_at = ?3 WHERE id = ?4",
            params![
                album.name,
                album.photo_name,
                format_datetime(&album.updated_at),
                album.id,
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound("Singer album"));
        }
        Ok(())
    }

    fn delete_singer_album(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM singer_albums WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Song operations

    fn create_song(
        &self,
        user_id: i64,
        singer_album_id: i64,
        input: &SongInput,
        photo_name: Option<&str>,
    ) -> Result<Song> {
        let conn = self.conn();
        let now = format_datetime(&Utc::now());
        conn.execute(
            "INSERT INTO songs (user_id, singer_album_id, name, description, artist, song_type,
             language, rate, photo_name, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                user_id,
                singer_album_id,
                input.name,
                input.description,
                input.artist,
                input.song_type.as_str(),
                input.language,
                input.rate,
                photo_name,
                now,
                now,
            ],
        )?;
        inserted(
            &conn,
            &format!("SELECT {SONG_COLUMNS} FROM songs WHERE id = ?1"),
            song_from_row,
        )
    }

    fn get_song(&self, id: i64) -> Result<Option<Song>> {
        get_one(
            &self.conn(),
            &format!("SELECT {SONG_COLUMNS} FROM songs WHERE id = ?1"),
            id,
            song_from_row,
        )
    }

    fn list_songs(&self, offset: i64, limit: i64) -> Result<Vec<Song>> {
        list_page(
            &self.conn(),
            &format!("SELECT {SONG_COLUMNS} FROM songs LIMIT ?1 OFFSET ?2"),
            offset,
            limit,
            song_from_row,
        )
    }

    fn update_song(&self, song: &Song) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE songs SET name = ?1, description = ?2, artist = ?3, song_type = ?4, language = ?5,
             rate = ?6, photo_name = ?7, updated_at = ?8 WHERE id = ?9",
            params![
                song.name,
                song.description,
                song.artist,
                song.song_type.as_str(),
                song.language,
                song.rate,
                song.photo_name,
                format_datetime(&song.updated_at),
                song.id,
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound("Song"));
        }
        Ok(())
    }

    fn delete_song(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM songs WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Playlist operations

    fn create_playlist(&self, user_id: i64, input: &PlaylistInput) -> Result<Playlist> {
        let conn = self.conn();
        let now = format_datetime(&Utc::now());
        conn.execute(
            "INSERT INTO playlists (user_id, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![user_id, input.name, now, now],
        )?;
        inserted(
            &conn,
            &format!("SELECT {PLAYLIST_COLUMNS} FROM playlists WHERE id = ?1"),
            playlist_from_row,
        )
    }

    fn get_playlist(&self, id: i64) -> Result<Option<Playlist>> {
        get_one(
            &self.conn(),
            &format!("SELECT {PLAYLIST_COLUMNS} FROM playlists WHERE id = ?1"),
            id,
            playlist_from_row,
        )
    }

    fn list_playlists(&self, offset: i64, limit: i64) -> Result<Vec<Playlist>> {
        list_page(
            &self.conn(),
            &format!("SELECT {PLAYLIST_COLUMNS} FROM playlists LIMIT ?1 OFFSET ?2"),
            offset,
            limit,
            playlist_from_row,
        )
    }

    fn update_playlist(&self, playlist: &Playlist) -> Result<()> {
        let rows = self.conn().execute(
            "UPDATE playlists SET name = ?1, updated_at = ?2 WHERE id = ?3",
            params![
                playlist.name,
                format_datetime(&playlist.updated_at),
                playlist.id
            ],
        )?;

        if rows == 0 {
            return Err(Error::NotFound("Playlist"));
        }
        Ok(())
    }

    fn delete_playlist(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM playlists WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Playlist-Song M2M operations

    fn add_playlist_song(&self, playlist_id: i64, song_id: i64) -> Result<PlaylistMembership> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO playlist_songs (playlist_id, song_id, created_at) VALUES (?1, ?2, ?3)",
            params![playlist_id, song_id, format_datetime(&Utc::now())],
        )?;
        inserted(
            &conn,
            &format!("SELECT {MEMBERSHIP_COLUMNS} FROM playlist_songs WHERE id = ?1"),
            membership_from_row,
        )
    }

    fn list_playlist_songs(&self, playlist_id: i64) -> Result<Vec<PlaylistMembership>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM playlist_songs WHERE playlist_id = ?1 ORDER BY id"
        ))?;

        let rows = stmt.query_map(params![playlist_id], membership_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(temp: &TempDir) -> SqliteStore {
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        store
    }

    fn seed_user(store: &SqliteStore) -> User {
        store
            .create_user("owner", "owner@example.com", "$argon2id$stub", Role::User)
            .unwrap()
    }

    #[test]
    fn test_initialize_creates_tables() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let conn = store.conn();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"singers".to_string()));
        assert!(tables.contains(&"singer_albums".to_string()));
        assert!(tables.contains(&"songs".to_string()));
        assert!(tables.contains(&"playlists".to_string()));
        assert!(tables.contains(&"playlist_songs".to_string()));
    }

    #[test]
    fn test_user_crud() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let user = seed_user(&store);
        assert_eq!(user.role, Role::User);
        assert!(!user.confirmed);

        let mut fetched = store.get_user(user.id).unwrap().unwrap();
        assert_eq!(fetched.email, "owner@example.com");

        fetched.role = Role::Admin;
        fetched.photo_name = Some("avatar.png".to_string());
        store.update_user(&fetched).unwrap();

        let updated = store.get_user(user.id).unwrap().unwrap();
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.photo_name.as_deref(), Some("avatar.png"));

        assert!(store.has_admin().unwrap());

        assert!(store.delete_user(user.id).unwrap());
        assert!(store.get_user(user.id).unwrap().is_none());
        assert!(!store.has_admin().unwrap());
        assert!(!store.delete_user(user.id).unwrap());
    }

    #[test]
    fn test_singer_crud() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let user = seed_user(&store);

        let input = SingerInput {
            name: "Nina".to_string(),
            info: "jazz vocalist".to_string(),
            singer_type: SingerType::Single,
        };
        let singer = store
            .create_singer(user.id, &input, Some("nina.jpg"))
            .unwrap();
        assert_eq!(singer.user_id, user.id);
        assert_eq!(singer.photo_name.as_deref(), Some("nina.jpg"));

        let mut fetched = store.get_singer(singer.id).unwrap().unwrap();
        assert_eq!(fetched, singer);

        fetched.singer_type = SingerType::Band;
        fetched.photo_name = None;
        store.update_singer(&fetched).unwrap();

        let updated = store.get_singer(singer.id).unwrap().unwrap();
        assert_eq!(updated.singer_type, SingerType::Band);
        assert!(updated.photo_name.is_none());

        assert!(store.delete_singer(singer.id).unwrap());
        assert!(store.get_singer(singer.id).unwrap().is_none());
    }

    #[test]
    fn test_update_missing_row_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let playlist = Playlist {
            id: 42,
            user_id: 1,
            name: "ghost".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(matches!(
            store.update_playlist(&playlist),
            Err(Error::NotFound("Playlist"))
        ));
    }

    #[test]
    fn test_list_pages_with_offset_and_limit() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let user = seed_user(&store);

        for name in ["one", "two", "three"] {
            store
                .create_playlist(
                    user.id,
                    &PlaylistInput {
                        name: name.to_string(),
                    },
                )
                .unwrap();
        }

        let first = store.list_playlists(0, 2).unwrap();
        assert_eq!(first.len(), 2);
        let rest = store.list_playlists(2, 2).unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "three");
        assert!(store.list_playlists(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_nested_rows_cascade_with_singer() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let user = seed_user(&store);

        let singer = store
            .create_singer(
                user.id,
                &SingerInput {
                    name: "Band".to_string(),
                    info: "info".to_string(),
                    singer_type: SingerType::Band,
                },
                None,
            )
            .unwrap();
        let album = store
            .create_singer_album(
                user.id,
                singer.id,
                &SingerAlbumInput {
                    name: "Debut".to_string(),
                },
                None,
            )
            .unwrap();
        let song = store
            .create_song(
                user.id,
                album.id,
                &SongInput {
                    name: "Opener".to_string(),
                    description: "first track".to_string(),
                    artist: "Band".to_string(),
                    song_type: SongType::Rock,
                    language: "english".to_string(),
                    rate: 4,
                },
                None,
            )
            .unwrap();
        assert_eq!(album.singer_id, singer.id);
        assert_eq!(song.singer_album_id, album.id);

        store.delete_singer(singer.id).unwrap();
        assert!(store.get_singer_album(album.id).unwrap().is_none());
        assert!(store.get_song(song.id).unwrap().is_none());
    }

    #[test]
    fn test_playlist_song_duplicates_are_kept() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let user = seed_user(&store);

        let singer = store
            .create_singer(
                user.id,
                &SingerInput {
                    name: "A".to_string(),
                    info: "i".to_string(),
                    singer_type: SingerType::Single,
                },
                None,
            )
            .unwrap();
        let album = store
            .create_singer_album(
                user.id,
                singer.id,
                &SingerAlbumInput {
                    name: "B".to_string(),
                },
                None,
            )
            .unwrap();
        let song = store
            .create_song(
                user.id,
                album.id,
                &SongInput {
                    name: "C".to_string(),
                    description: "d".to_string(),
                    artist: "A".to_string(),
                    song_type: SongType::Pop,
                    language: "english".to_string(),
                    rate: 5,
                },
                None,
            )
            .unwrap();
        let playlist = store
            .create_playlist(
                user.id,
                &PlaylistInput {
                    name: "mix".to_string(),
                },
            )
            .unwrap();

        let first = store.add_playlist_song(playlist.id, song.id).unwrap();
        let second = store.add_playlist_song(playlist.id, song.id).unwrap();
        assert_ne!(first.id, second.id);

        let rows = store.list_playlist_songs(playlist.id).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|m| m.song_id == song.id));
    }

    #[test]
    fn test_unknown_enum_text_is_a_conversion_error() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        let user = seed_user(&store);

        store
            .connection()
            .execute(
                "UPDATE users SET role = 'ROOT' WHERE id = ?1",
                params![user.id],
            )
            .unwrap();

        assert!(matches!(
            store.get_user(user.id),
            Err(Error::Database(rusqlite::Error::FromSqlConversionFailure(..)))
        ));
    }
}
