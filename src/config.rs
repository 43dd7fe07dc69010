use crate::time_utils;
use thiserror::Error;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown timezone: {0}")]
    InvalidTimezone(String),
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Absent means the in-memory store.
    pub database_url: Option<String>,
    pub bind_addr: String,
    /// Zone used to decide which calendar day is "today".
    pub timezone: String,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = non_empty("BIND_ADDR").unwrap_or_else(|| {
            let port = non_empty("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
            format!("0.0.0.0:{}", port)
        });

        let timezone = match non_empty("APP_TIMEZONE") {
            Some(raw) => time_utils::normalize_timezone(&raw)
                .ok_or(ConfigError::InvalidTimezone(raw))?,
            None => "UTC".to_string(),
        };

        let db_max_connections = match non_empty("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidNumber {
                    name: "DB_MAX_CONNECTIONS",
                    value: raw,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            bind_addr,
            timezone,
            db_max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
        assert_eq!(cfg.timezone, "UTC");
        assert_eq!(cfg.db_max_connections, 10);
    }

    #[test]
    fn test_bind_addr_wins_over_port() {
        assert_eq!(config(&[("PORT", "8080")]).unwrap().bind_addr, "0.0.0.0:8080");
        let cfg = config(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn test_timezone_validation() {
        let cfg = config(&[("APP_TIMEZONE", "Asia/Kolkata")]).unwrap();
        assert_eq!(cfg.timezone, "Asia/Kolkata");
        assert_eq!(
            config(&[("APP_TIMEZONE", "Nowhere/Special")]),
            Err(ConfigError::InvalidTimezone("Nowhere/Special".to_string()))
        );
        assert_eq!(
            config(&[("APP_TIMEZONE", "+é1")]),
            Err(ConfigError::InvalidTimezone("+é1".to_string()))
        );
    }

    #[test]
    fn test_max_connections_parsing() {
        let cfg = config(&[("DB_MAX_CONNECTIONS", "4"), ("DATABASE_URL", "postgres://x")]).unwrap();
        assert_eq!(cfg.db_max_connections, 4);
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://x"));
        assert!(matches!(
            config(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(config(&[("DATABASE_URL", "  ")]).unwrap().database_url.is_none());
    }
}
