//! Record services: parameterized CRUD HTTP services over SQLite.
//!
//! One implementation serves both the task service (`/tasks`) and the library service
//! (`/users`, `/books`); [`ServiceKind`] selects the entity set.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{SchemaFailurePolicy, ServiceConfig, ServiceKind};
pub use error::{AppError, ConfigError, StartupError};
pub use migration::{apply_schema, ensure_schema, reset_schema};
pub use model::{Book, Record, Task, User};
pub use routes::{entity_routes, service_routes};
pub use server::{app, prepare, run};
pub use service::CrudService;
pub use state::AppState;
