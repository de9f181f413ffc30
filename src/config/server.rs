use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// `None` keeps the cache in process memory.
    pub cache: Option<CacheConfig>,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("songbook.db")
    }

    #[must_use]
    pub fn upload_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }
}

/// Connection settings for the key/value cache. Every field is mandatory.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl CacheConfig {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("cache host is required".to_string()));
        }
        if self.port == 0 {
            return Err(Error::Config("cache port is required".to_string()));
        }
        if self.username.is_empty() {
            return Err(Error::Config("cache username is required".to_string()));
        }
        if self.password.is_empty() {
            return Err(Error::Config("cache password is required".to_string()));
        }
        Ok(())
    }

    /// Connection URL with the credentials percent-encoded.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "redis://{}:{}@{}:{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port
        )
    }
}

pub const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify access tokens.
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::Config("JWT secret must not be empty".to_string()));
        }
        Ok(Self {
            secret,
            access_token_expiry_mins: DEFAULT_ACCESS_EXPIRY_MINS,
        })
    }
}
