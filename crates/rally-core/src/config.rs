use std::time::Duration;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::DEFAULT_PROXY_IDENTITY_HEADER;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    SingleUser,
    Proxy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    pub proxy: Option<ProxyAuthConfig>,
    pub single_user: Option<SingleUserAuthConfig>,
}

impl AuthConfig {
    /// ## Summary
    /// Returns the header carrying the caller identity in proxy mode.
    #[must_use]
    pub fn proxy_header(&self) -> &str {
        self.proxy
            .as_ref()
            .and_then(|proxy| proxy.header.as_deref())
            .unwrap_or(DEFAULT_PROXY_IDENTITY_HEADER)
    }
}

/// Identity is asserted by the hosted identity provider's proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyAuthConfig {
    pub header: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleUserAuthConfig {
    pub owner_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
    /// Connections kept open while idle. Unset keeps none.
    #[serde(default)]
    pub min_idle: Option<u8>,
    /// Seconds before an idle connection above `min_idle` is closed.
    pub idle_timeout_secs: u64,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    #[must_use]
    pub fn pool_size(&self) -> u32 {
        u32::from(self.max_connections.max(1))
    }

    /// ## Summary
    /// Returns the idle floor, capped at the pool size.
    #[must_use]
    pub fn min_idle(&self) -> Option<u32> {
        self.min_idle.map(|idle| u32::from(idle).min(self.pool_size()))
    }

    #[must_use]
    pub fn idle_timeout(&self) -> Option<Duration> {
        (self.idle_timeout_secs > 0).then(|| Duration::from_secs(self.idle_timeout_secs))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn serve_origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            self.serve_origin()
        }
    }

    /// ## Summary
    /// Returns the socket address to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8710)?
            .set_default("database.max_connections", 4)?
            .set_default("database.idle_timeout_secs", 600)?
            .set_default("database.run_migrations", false)?
            .set_default("auth.method", "proxy")?
            .set_default("logging.level", "info")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
