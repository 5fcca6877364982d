use anyhow::{Context, Result, bail};
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// Full connection URL; wins over the discrete fields when present.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,

    // Pool sizing
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database: DatabaseConfig,
    pub api_prefix: String,
    /// 0 disables the limiter
    pub rate_api_per_min: u32,
    pub log_dir: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 3306,
            user: String::new(),
            password: String::new(),
            name: String::new(),
            max_connections: 10,
            acquire_timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:3000".to_string(),
            database: DatabaseConfig::default(),
            api_prefix: "/api".to_string(),
            rate_api_per_min: 1000,
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset keys fall back to
    /// the defaults; the database needs either `DATABASE_URL` or both
    /// `DB_USER` and `DB_NAME`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let db_defaults = defaults.database;

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            host: lookup("DB_HOST").unwrap_or(db_defaults.host),
            port: parse_or(&lookup, "DB_PORT", db_defaults.port)?,
            user: lookup("DB_USER").unwrap_or_default(),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: lookup("DB_NAME").unwrap_or_default(),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", db_defaults.max_connections)?,
            acquire_timeout_secs: parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                db_defaults.acquire_timeout_secs,
            )?,
        };

        if database.url.is_none() && (database.user.is_empty() || database.name.is_empty()) {
            bail!("either DATABASE_URL or both DB_USER and DB_NAME must be set");
        }
        if database.max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or(defaults.server_addr),
            database,
            api_prefix: lookup("API_PREFIX").unwrap_or(defaults.api_prefix),
            rate_api_per_min: parse_or(&lookup, "RATE_API_PER_MIN", defaults.rate_api_per_min)?,
            log_dir: lookup("LOG_DIR").unwrap_or(defaults.log_dir),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
