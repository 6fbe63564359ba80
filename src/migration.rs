//! Schema lifecycle on boot: idempotent table creation, optionally preceded by a destructive reset.

use crate::config::{SchemaConfig, ServiceKind};
use crate::error::StartupError;
use sqlx::SqlitePool;

/// One table owned by a service.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    /// Column and constraint definitions, in order.
    pub definitions: &'static [&'static str],
}

const TASKS: TableDef = TableDef {
    name: "tasks",
    definitions: &[
        "id INTEGER PRIMARY KEY AUTOINCREMENT",
        "title TEXT",
        "description TEXT",
        "due_date TEXT",
        "status TEXT",
    ],
};

const USERS: TableDef = TableDef {
    name: "users",
    definitions: &[
        "id INTEGER PRIMARY KEY AUTOINCREMENT",
        "name TEXT",
        "email TEXT",
        "contact TEXT",
        "role TEXT",
        "lib_id TEXT UNIQUE",
    ],
};

const BOOK_INVENTORY: TableDef = TableDef {
    name: "book_inventory",
    definitions: &[
        "isbn TEXT PRIMARY KEY",
        "lib_id TEXT",
        "title TEXT",
        "authors TEXT",
        "publisher TEXT",
        "version TEXT",
        "total_copies INTEGER",
        "available_copies INTEGER",
        "FOREIGN KEY (lib_id) REFERENCES users (lib_id)",
    ],
};

/// Created with the library schema; no route reads or writes it.
const LIBRARY: TableDef = TableDef {
    name: "library",
    definitions: &["id INTEGER PRIMARY KEY AUTOINCREMENT", "name TEXT"],
};

/// Tables created for `kind`, in creation order.
pub fn tables(kind: ServiceKind) -> &'static [TableDef] {
    match kind {
        ServiceKind::Tasks => &[TASKS],
        ServiceKind::Library => &[USERS, BOOK_INVENTORY, LIBRARY],
    }
}

/// Tables dropped by a reset. `books` is a legacy name kept for databases written by older
/// deployments; `book_inventory` is the live table.
pub fn reset_targets(kind: ServiceKind) -> &'static [&'static str] {
    match kind {
        ServiceKind::Tasks => &["tasks"],
        ServiceKind::Library => &["users", "books", "library", "book_inventory"],
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn create_table_sql(table: &TableDef) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(table.name),
        table.definitions.join(",\n  ")
    )
}

/// Create every table of `kind` that does not exist yet. Safe on every boot.
pub async fn ensure_schema(pool: &SqlitePool, kind: ServiceKind) -> Result<(), sqlx::Error> {
    for table in tables(kind) {
        let sql = create_table_sql(table);
        tracing::debug!(sql = %sql, "ensure table");
        sqlx::query(&sql).execute(pool).await?;
    }
    Ok(())
}

/// Drop the service's tables and recreate them empty.
pub async fn reset_schema(pool: &SqlitePool, kind: ServiceKind) -> Result<(), sqlx::Error> {
    for name in reset_targets(kind) {
        let sql = format!("DROP TABLE IF EXISTS {}", quote(name));
        tracing::debug!(sql = %sql, "drop table");
        sqlx::query(&sql).execute(pool).await?;
    }
    ensure_schema(pool, kind).await
}

/// Run the configured schema step once. The caller decides what a failure means.
pub async fn apply_schema(pool: &SqlitePool, kind: ServiceKind, config: &SchemaConfig) -> Result<(), StartupError> {
    let result = if config.reset_on_boot {
        tracing::warn!(service = %kind, tables = ?reset_targets(kind), "resetting schema: existing rows are discarded");
        reset_schema(pool, kind).await
    } else {
        ensure_schema(pool, kind).await
    };
    result.map_err(StartupError::Schema)
}
