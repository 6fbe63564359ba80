//! Load service config from environment variables (a `.env` file is read by the binaries).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

pub const DATABASE_PATH: &str = "DATABASE_PATH";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const BIND_ADDR: &str = "BIND_ADDR";
pub const PORT: &str = "PORT";
pub const RESET_SCHEMA_ON_BOOT: &str = "RESET_SCHEMA_ON_BOOT";
pub const SCHEMA_FAILURE: &str = "SCHEMA_FAILURE";

impl ServiceConfig {
    pub fn from_env(kind: ServiceKind) -> Result<Self, ConfigError> {
        Self::from_lookup(kind, |key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; unset or blank keys keep the defaults for `kind`.
    pub fn from_lookup<F>(kind: ServiceKind, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = ServiceConfig::defaults(kind);

        if let Some(path) = get(DATABASE_PATH) {
            config.database.path = path;
        }
        if let Some(v) = get(DATABASE_MAX_CONNECTIONS) {
            config.database.max_connections = parse_number(DATABASE_MAX_CONNECTIONS, &v)?;
            if config.database.max_connections == 0 {
                return Err(ConfigError::InvalidValue {
                    key: DATABASE_MAX_CONNECTIONS,
                    value: v,
                });
            }
        }
        if let Some(addr) = get(BIND_ADDR) {
            config.bind_addr = addr;
        }
        if let Some(v) = get(PORT) {
            config.port = parse_number(PORT, &v)?;
        }
        if let Some(v) = get(RESET_SCHEMA_ON_BOOT) {
            config.schema.reset_on_boot = parse_flag(RESET_SCHEMA_ON_BOOT, &v)?;
        }
        if let Some(v) = get(SCHEMA_FAILURE) {
            config.schema.on_failure = SchemaFailurePolicy::from_str(&v)?;
        }
        // A private in-memory database only exists on its one connection.
        if config.database.is_memory() {
            config.database.max_connections = 1;
        }
        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(kind: ServiceKind, vars: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServiceConfig::from_lookup(kind, |k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_follow_service_kind() {
        let tasks = load(ServiceKind::Tasks, &[]).unwrap();
        assert_eq!(tasks.port, 8080);
        assert_eq!(tasks.database.path, "tasks.db");
        assert!(!tasks.schema.reset_on_boot);
        assert_eq!(tasks.schema.on_failure, SchemaFailurePolicy::Continue);

        let library = load(ServiceKind::Library, &[]).unwrap();
        assert_eq!(library.port, 8081);
        assert_eq!(library.database.path, "library.db");
        assert_eq!(library.listen_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn env_overrides_defaults() {
        let config = load(
            ServiceKind::Library,
            &[
                (PORT, "9000"),
                (DATABASE_PATH, "/tmp/lib.db"),
                (RESET_SCHEMA_ON_BOOT, "true"),
                (SCHEMA_FAILURE, "Abort"),
                (DATABASE_MAX_CONNECTIONS, "4"),
            ],
        )
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.database.path, "/tmp/lib.db");
        assert_eq!(config.database.max_connections, 4);
        assert!(config.schema.reset_on_boot);
        assert_eq!(config.schema.on_failure, SchemaFailurePolicy::Abort);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = load(ServiceKind::Tasks, &[(PORT, "  ")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn memory_database_is_pinned_to_one_connection() {
        let config = load(
            ServiceKind::Tasks,
            &[(DATABASE_PATH, ":memory:"), (DATABASE_MAX_CONNECTIONS, "8")],
        )
        .unwrap();
        assert_eq!(config.database.max_connections, 1);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(ServiceKind::Tasks, &[(PORT, "eighty")]),
            Err(ConfigError::InvalidValue { key: PORT, .. })
        ));
        assert!(load(ServiceKind::Tasks, &[(RESET_SCHEMA_ON_BOOT, "maybe")]).is_err());
        assert!(load(ServiceKind::Tasks, &[(SCHEMA_FAILURE, "ignore")]).is_err());
        assert!(load(ServiceKind::Tasks, &[(DATABASE_MAX_CONNECTIONS, "0")]).is_err());
    }

    #[test]
    fn parses_service_kind() {
        assert_eq!("Library".parse::<ServiceKind>().unwrap(), ServiceKind::Library);
        assert_eq!("tasks".parse::<ServiceKind>().unwrap(), ServiceKind::Tasks);
        assert!("books".parse::<ServiceKind>().is_err());
    }
}
