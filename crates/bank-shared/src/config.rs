//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_CLIENT_RIGHTS;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub clients: ClientSettings,
    pub rights: RightsSettings,
    pub logging: LoggingSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// No URL means the in-memory repositories are used
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    /// Read clients through the second-level cache
    pub cache_enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RightsSettings {
    /// Rights synthesized by the mock external store for unknown clients
    pub default_permissions: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
    pub directory: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", env.clone())?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "bank-server")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_seconds", 5)?
            .set_default("clients.cache_enabled", true)?
            .set_default("rights.default_permissions", DEFAULT_CLIENT_RIGHTS.to_vec())?
            .set_default("logging.level", "info,bank_server=debug")?
            .set_default("logging.format", "pretty")?
            .set_default(
                "cors.allowed_origins",
                vec!["http://localhost:8080", "http://localhost:3000"],
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("BANK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("rights.default_permissions")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }
}
