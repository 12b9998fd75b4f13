//! Layered configuration: defaults -> YAML file -> env (`HOTELS__*`) ->
//! CLI overrides (applied by the binary).

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8087,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://hotels.db?mode=rwc".to_owned(),
            max_connections: 5,
        }
    }
}

impl AppConfig {
    /// Loads the effective configuration. `HOTELS__SERVER__PORT=9000` style
    /// environment variables override the file; the file overrides defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment
            .merge(Env::prefixed("HOTELS__").split("__"))
            .extract()?;
        Ok(config)
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:8087");
        assert!(config.database.url.starts_with("sqlite://"));
    }

    #[test]
    fn yaml_overrides_defaults_and_keeps_the_rest() {
        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::string("server:\n  port: 9000\n"));
        let config: AppConfig = figment.extract().unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.max_connections, 5);
    }
}
