use std::str::FromStr;
use std::time::Duration;

use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

use crate::config::DatabaseConfig;

pub fn connect_options(settings: &DatabaseConfig) -> Result<MySqlConnectOptions, sqlx::Error> {
    match &settings.url {
        Some(url) => MySqlConnectOptions::from_str(url),
        None => Ok(MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.name)),
    }
}

/// Opens the bounded pool shared by every entity store.
pub async fn init_db(settings: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(connect_options(settings)?)
        .await
}
