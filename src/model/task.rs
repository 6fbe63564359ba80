use super::{parse_int_key, EntityDef, Record};
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};

/// Status every task starts with, whatever the client sent.
pub const PENDING: &str = "pending";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Free text; the date format is not checked.
    pub due_date: String,
    pub status: String,
}

impl Record for Task {
    type Key = i64;

    const ENTITY: EntityDef = EntityDef {
        name: "Task",
        path: "tasks",
        table: "tasks",
        key: "id",
        key_generated: true,
        columns: &["title", "description", "due_date", "status"],
    };

    fn parse_key(raw: &str) -> Option<i64> {
        parse_int_key(raw)
    }

    fn key(&self) -> i64 {
        self.id
    }

    fn with_key(self, id: i64) -> Self {
        Task { id, ..self }
    }

    fn column_values(&self) -> Vec<BindValue> {
        vec![
            self.title.clone().into(),
            self.description.clone().into(),
            self.due_date.clone().into(),
            self.status.clone().into(),
        ]
    }

    fn prepare_create(&mut self) {
        self.status = PENDING.to_string();
    }
}
