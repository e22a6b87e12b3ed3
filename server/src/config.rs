//! Runtime settings read from the environment at start-up.

use thiserror::Error;

pub const HOST_VAR: &str = "ASTRAL_HOST";
pub const PORT_VAR: &str = "ASTRAL_PORT";
pub const OPEN_BROWSER_VAR: &str = "ASTRAL_OPEN_BROWSER";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ASTRAL_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("ASTRAL_OPEN_BROWSER must be a boolean, got {0:?}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the admin in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(flag) = lookup(OPEN_BROWSER_VAR) {
            config.open_browser = parse_flag(&flag).ok_or(ConfigError::InvalidFlag(flag))?;
        }

        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, " 3000 "),
            (OPEN_BROWSER_VAR, "off"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(!config.open_browser);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[(PORT_VAR, "http")])),
            Err(ConfigError::InvalidPort("http".into()))
        );
        assert_eq!(
            ServerConfig::from_lookup(lookup(&[(OPEN_BROWSER_VAR, "maybe")])),
            Err(ConfigError::InvalidFlag("maybe".into()))
        );
    }
}
