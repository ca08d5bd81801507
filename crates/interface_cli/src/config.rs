//! CLI configuration

use std::time::Duration;

use serde::Deserialize;

use infra_db::DatabaseConfig;

/// Environment prefix for every setting, e.g. `OBJECTS_DATABASE_URL`
pub const ENV_PREFIX: &str = "OBJECTS";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// Upper bound of pooled connections
    pub max_connections: u32,
    /// Seconds to wait for a connection before giving up
    pub connect_timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/objects".to_string(),
            log_level: "info".to_string(),
            max_connections: 5,
            connect_timeout_secs: 30,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Loads configuration from the given variables
    ///
    /// `OBJECTS_*` variables win; a bare `DATABASE_URL` is honoured when
    /// `OBJECTS_DATABASE_URL` is not set. A malformed value is an error,
    /// never a silent fallback to defaults.
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self, config::ConfigError> {
        let fallback_url = if vars.contains_key(&format!("{ENV_PREFIX}_DATABASE_URL")) {
            None
        } else {
            vars.get("DATABASE_URL").cloned()
        };

        let mut builder = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)));
        if let Some(url) = fallback_url {
            builder = builder.set_override("database_url", url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Returns the pool settings for `infra_db::create_pool`
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url.clone())
            .max_connections(self.max_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}
