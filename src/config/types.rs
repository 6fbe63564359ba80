//! Service configuration types.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Which entity set a process serves. Both kinds share one implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    /// `/tasks`
    Tasks,
    /// `/users` and `/books`
    Library,
}

impl ServiceKind {
    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::Tasks => 8080,
            ServiceKind::Library => 8081,
        }
    }

    pub fn default_database(self) -> &'static str {
        match self {
            ServiceKind::Tasks => "tasks.db",
            ServiceKind::Library => "library.db",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Tasks => "tasks",
            ServiceKind::Library => "library",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ServiceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tasks" | "task" => Ok(ServiceKind::Tasks),
            "library" => Ok(ServiceKind::Library),
            other => Err(ConfigError::UnknownService(other.to_string())),
        }
    }
}

/// What the bootstrap does when schema setup fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchemaFailurePolicy {
    /// Log the failure and keep starting; requests touching a broken table fail with 500.
    #[default]
    Continue,
    /// Return the failure from startup.
    Abort,
}

impl FromStr for SchemaFailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continue" => Ok(SchemaFailurePolicy::Continue),
            "abort" => Ok(SchemaFailurePolicy::Abort),
            _ => Err(ConfigError::InvalidValue {
                key: "SCHEMA_FAILURE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// File path, or `:memory:` for a private in-memory database.
    pub path: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        DatabaseConfig {
            path: ":memory:".into(),
            max_connections: 1,
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Drop and recreate the service's tables on every boot.
    pub reset_on_boot: bool,
    pub on_failure: SchemaFailurePolicy,
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub kind: ServiceKind,
    pub bind_addr: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub schema: SchemaConfig,
}

impl ServiceConfig {
    /// Defaults for `kind`, ignoring the environment.
    pub fn defaults(kind: ServiceKind) -> Self {
        ServiceConfig {
            kind,
            bind_addr: "0.0.0.0".into(),
            port: kind.default_port(),
            database: DatabaseConfig {
                path: kind.default_database().into(),
                max_connections: 1,
            },
            schema: SchemaConfig::default(),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
