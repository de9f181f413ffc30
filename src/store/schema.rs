pub const SCHEMA: &str = r#"
-- Accounts; every owned row references its creator here
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    photo_name TEXT,
    role TEXT NOT NULL DEFAULT 'USER',       -- ADMIN | USER
    confirmed INTEGER NOT NULL DEFAULT 0,
    password_hash TEXT NOT NULL,             -- argon2id PHC string
    session_secret TEXT,                     -- managed by the auth layer
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS singers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    info TEXT NOT NULL,
    singer_type TEXT NOT NULL,               -- SINGLE | BAND
    photo_name TEXT,                         -- filename in upload storage
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS singer_albums (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    singer_id INTEGER NOT NULL REFERENCES singers(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    photo_name TEXT,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS songs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    singer_album_id INTEGER NOT NULL REFERENCES singer_albums(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    artist TEXT NOT NULL,
    song_type TEXT NOT NULL,
    language TEXT NOT NULL,
    rate INTEGER NOT NULL DEFAULT 0,
    photo_name TEXT,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS playlists (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

-- Many-to-many between playlists and songs. No uniqueness on the pair:
-- attaching the same song twice yields two rows.
CREATE TABLE IF NOT EXISTS playlist_songs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    playlist_id INTEGER NOT NULL REFERENCES playlists(id) ON DELETE CASCADE,
    song_id INTEGER NOT NULL REFERENCES songs(id) ON DELETE CASCADE,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_singers_user ON singers(user_id);
CREATE INDEX IF NOT EXISTS idx_singer_albums_singer ON singer_albums(singer_id);
CREATE INDEX IF NOT EXISTS idx_songs_singer_album ON songs(singer_album_id);
CREATE INDEX IF NOT EXISTS idx_playlists_user ON playlists(user_id);
CREATE INDEX IF NOT EXISTS idx_playlist_songs_playlist ON playlist_songs(playlist_id);
CREATE INDEX IF NOT EXISTS idx_playlist_songs_song ON playlist_songs(song_id);
"#;
