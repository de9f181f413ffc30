use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use songbook::auth::{hash_password, issue_access_token};
use songbook::cache::{Cache, MemoryCache, RedisCache};
use songbook::config::{CacheConfig, JwtConfig, ServerConfig};
use songbook::server::{AppState, create_router};
use songbook::store::{SqliteStore, Store};
use songbook::types::Role;
use songbook::upload::LocalUploader;

#[derive(Parser)]
#[command(name = "songbook")]
#[command(about = "A media catalog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Administrative commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Start the server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, short, default_value = "8080")]
        port: u16,

        /// Data directory for the database and uploads
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Keep the cache in process memory instead of Redis
        #[arg(long)]
        memory_cache: bool,

        #[command(flatten)]
        cache: CacheArgs,

        /// Secret used to sign and verify access tokens
        #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Initialize the database and create the first admin account
    Init {
        /// Data directory for the database and uploads
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "SONGBOOK_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,

        /// Secret used to sign the printed access token
        #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
    },

    /// Print an access token for an existing user
    Token {
        /// Data directory for the database and uploads
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        user_id: i64,

        /// Secret used to sign the printed access token
        #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
        jwt_secret: String,
    },
}

#[derive(Args)]
struct CacheArgs {
    #[arg(long, env = "REDIS_CACHE_HOST")]
    cache_host: Option<String>,

    #[arg(long, env = "REDIS_CACHE_PORT")]
    cache_port: Option<u16>,

    #[arg(long, env = "REDIS_CACHE_USERNAME")]
    cache_username: Option<String>,

    #[arg(long, env = "REDIS_CACHE_SECRET", hide_env_values = true)]
    cache_password: Option<String>,
}

impl CacheArgs {
    fn into_config(self) -> anyhow::Result<CacheConfig> {
        let Some(host) = self.cache_host else {
            bail!("Cache host is required (--cache-host or REDIS_CACHE_HOST)");
        };
        let Some(port) = self.cache_port else {
            bail!("Cache port is required (--cache-port or REDIS_CACHE_PORT)");
        };
        let Some(username) = self.cache_username else {
            bail!("Cache username is required (--cache-username or REDIS_CACHE_USERNAME)");
        };
        let Some(password) = self.cache_password else {
            bail!("Cache password is required (--cache-password or REDIS_CACHE_SECRET)");
        };
        Ok(CacheConfig {
            host,
            port,
            username,
            password,
        })
    }
}

fn open_store(data_dir: &str) -> anyhow::Result<SqliteStore> {
    let data_path = PathBuf::from(data_dir);
    let db_path = data_path.join("songbook.db");

    if !db_path.exists() {
        bail!(
            "Database not found at {}. Run 'songbook admin init' first.",
            db_path.display()
        );
    }

    SqliteStore::new(&db_path).map_err(Into::into)
}

fn run_init(
    data_dir: String,
    username: String,
    email: String,
    password: String,
    jwt_secret: String,
) -> anyhow::Result<()> {
    let jwt = JwtConfig::new(jwt_secret)?;

    let data_path = PathBuf::from(data_dir);
    fs::create_dir_all(&data_path)?;

    let store = SqliteStore::new(data_path.join("songbook.db"))?;
    store.initialize()?;

    if store.has_admin()? {
        bail!("Server already initialized. An admin account exists.");
    }

    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        bail!("Username, email and password must not be empty");
    }

    let password_hash = hash_password(&password)?;
    let admin = store.create_user(&username, &email, &password_hash, Role::Admin)?;
    let token = issue_access_token(admin.id, admin.role, &jwt)?;

    println!();
    println!("========================================");
    println!("Created admin '{}' (id {})", admin.username, admin.id);
    println!("Access token (valid {} minutes):", jwt.access_token_expiry_mins);
    println!();
    println!("  {token}");
    println!();
    println!("========================================");
    println!();

    Ok(())
}

fn run_token(data_dir: String, user_id: i64, jwt_secret: String) -> anyhow::Result<()> {
    let jwt = JwtConfig::new(jwt_secret)?;
    let store = open_store(&data_dir)?;

    let Some(user) = store.get_user(user_id)? else {
        bail!("User {user_id} not found");
    };

    let token = issue_access_token(user.id, user.role, &jwt)?;
    println!("{token}");

    Ok(())
}

async fn run_serve(config: ServerConfig) -> anyhow::Result<()> {
    fs::create_dir_all(config.upload_dir())?;

    let store = SqliteStore::new(config.db_path())?;
    store.initialize()?;

    let cache: Arc<dyn Cache> = match &config.cache {
        Some(cache_config) => {
            let redis = RedisCache::connect(cache_config)
                .await
                .context("Failed to connect to the cache")?;
            Arc::new(redis)
        }
        None => {
            info!("Using in-process cache");
            Arc::new(MemoryCache::new())
        }
    };

    let uploader = LocalUploader::new(&config.upload_dir());

    let state = Arc::new(AppState::new(
        Arc::new(store),
        cache,
        Arc::new(uploader),
        config.jwt.clone(),
    ));

    let app = create_router(state);
    let addr = config.socket_addr()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("songbook=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Admin { command } => match command {
            AdminCommands::Init {
                data_dir,
                username,
                email,
                password,
                jwt_secret,
            } => {
                run_init(data_dir, username, email, password, jwt_secret)?;
            }
            AdminCommands::Token {
                data_dir,
                user_id,
                jwt_secret,
            } => {
                run_token(data_dir, user_id, jwt_secret)?;
            }
        },
        Commands::Serve {
            host,
            port,
            data_dir,
            memory_cache,
            cache,
            jwt_secret,
        } => {
            let cache = if memory_cache {
                None
            } else {
                Some(cache.into_config()?)
            };
            let config = ServerConfig {
                host,
                port,
                data_dir: data_dir.into(),
                cache,
                jwt: JwtConfig::new(jwt_secret)?,
            };
            run_serve(config).await?;
        }
    }

    Ok(())
}
