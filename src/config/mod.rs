mod server;

pub use server::{CacheConfig, DEFAULT_ACCESS_EXPIRY_MINS, JwtConfig, ServerConfig};
