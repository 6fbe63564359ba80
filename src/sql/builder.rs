//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from an entity definition.
//! Identifiers come from static definitions only; values are always `?` parameters.

use crate::model::EntityDef;

/// Quote identifier for SQLite (safe: only from entity definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// Key column followed by the mutable columns, matching the record's row shape.
fn select_column_list(entity: &EntityDef) -> String {
    std::iter::once(entity.key)
        .chain(entity.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// INSERT returning the stored row. With a generated key the caller binds the mutable columns only;
/// otherwise the key is bound first.
pub fn insert(entity: &EntityDef) -> String {
    let mut cols: Vec<String> = Vec::with_capacity(entity.columns.len() + 1);
    if !entity.key_generated {
        cols.push(quoted(entity.key));
    }
    cols.extend(entity.columns.iter().map(|c| quoted(c)));
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(entity.table),
        cols.join(", "),
        placeholders(cols.len()),
        select_column_list(entity)
    )
}

/// SELECT by key. Caller binds the key as sole param.
pub fn select_by_key(entity: &EntityDef) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_column_list(entity),
        quoted(entity.table),
        quoted(entity.key)
    )
}

/// SELECT every row, in store scan order.
pub fn select_all(entity: &EntityDef) -> String {
    format!("SELECT {} FROM {}", select_column_list(entity), quoted(entity.table))
}

/// UPDATE all mutable columns. Caller binds the column values, then the key.
pub fn update(entity: &EntityDef) -> String {
    let sets: Vec<String> = entity.columns.iter().map(|c| format!("{} = ?", quoted(c))).collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        quoted(entity.table),
        sets.join(", "),
        quoted(entity.key)
    )
}

/// DELETE by key. Caller binds the key.
pub fn delete(entity: &EntityDef) -> String {
    format!("DELETE FROM {} WHERE {} = ?", quoted(entity.table), quoted(entity.key))
}
