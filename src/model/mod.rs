//! Entity definitions and the `Record` trait that ties a row type to its table and routes.

mod library;
mod task;

pub use library::{Book, User, ALLOWED_ROLES};
pub use task::{Task, PENDING};

use crate::error::AppError;
use crate::sql::BindValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// Static description of one entity's table and collection path.
#[derive(Clone, Copy, Debug)]
pub struct EntityDef {
    /// Display name used in response messages ("Task not found").
    pub name: &'static str,
    /// Collection path segment, e.g. `tasks`.
    pub path: &'static str,
    pub table: &'static str,
    /// Primary key column.
    pub key: &'static str,
    /// Key assigned by the store (autoincrement) rather than by the client.
    pub key_generated: bool,
    /// Mutable columns in bind order; every update overwrites all of them.
    pub columns: &'static [&'static str],
}

/// A row type served by the generic store and handlers.
pub trait Record:
    Serialize + DeserializeOwned + for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static
{
    type Key: Clone + Default + Send + Sync + Into<BindValue> + 'static;

    const ENTITY: EntityDef;

    /// Parse a path segment into a key. `None` means no row can match it.
    fn parse_key(raw: &str) -> Option<Self::Key>;

    /// The client-supplied key, bound on insert when the key is not generated.
    fn key(&self) -> Self::Key;

    /// Replace the key, e.g. with the one from the request path.
    fn with_key(self, key: Self::Key) -> Self;

    /// Values for `ENTITY.columns`, in the same order.
    fn column_values(&self) -> Vec<BindValue>;

    /// Server-side normalization applied before insert.
    fn prepare_create(&mut self) {}

    /// Checks run on create only; updates are not validated.
    fn validate_create(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Parse an integer path key. Text that is not an in-range integer matches no row.
pub(crate) fn parse_int_key(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
