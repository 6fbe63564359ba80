use super::{parse_int_key, EntityDef, Record};
use crate::error::AppError;
use crate::service::RequestValidator;
use crate::sql::BindValue;
use serde::{Deserialize, Serialize};

/// Roles a user may be created with. Exact, case-sensitive match.
pub const ALLOWED_ROLES: &[&str] = &["Admin", "Reader"];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub role: String,
    /// Unique per user; books point at it.
    #[serde(rename = "libID")]
    pub lib_id: String,
}

impl Record for User {
    type Key = i64;

    const ENTITY: EntityDef = EntityDef {
        name: "User",
        path: "users",
        table: "users",
        key: "id",
        key_generated: true,
        columns: &["name", "email", "contact", "role", "lib_id"],
    };

    fn parse_key(raw: &str) -> Option<i64> {
        parse_int_key(raw)
    }

    fn key(&self) -> i64 {
        self.id
    }

    fn with_key(self, id: i64) -> Self {
        User { id, ..self }
    }

    fn column_values(&self) -> Vec<BindValue> {
        vec![
            self.name.clone().into(),
            self.email.clone().into(),
            self.contact.clone().into(),
            self.role.clone().into(),
            self.lib_id.clone().into(),
        ]
    }

    fn validate_create(&self) -> Result<(), AppError> {
        RequestValidator::one_of("role", &self.role, ALLOWED_ROLES)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    /// Client-supplied primary key; format not checked.
    pub isbn: String,
    #[serde(rename = "libID")]
    pub lib_id: String,
    pub title: String,
    pub authors: String,
    pub publisher: String,
    pub version: String,
    pub total_copies: i64,
    pub available_copies: i64,
}

impl Record for Book {
    type Key = String;

    const ENTITY: EntityDef = EntityDef {
        name: "Book",
        path: "books",
        table: "book_inventory",
        key: "isbn",
        key_generated: false,
        columns: &[
            "lib_id",
            "title",
            "authors",
            "publisher",
            "version",
            "total_copies",
            "available_copies",
        ],
    };

    fn parse_key(raw: &str) -> Option<String> {
        Some(raw.to_string())
    }

    fn key(&self) -> String {
        self.isbn.clone()
    }

    fn with_key(self, isbn: String) -> Self {
        Book { isbn, ..self }
    }

    fn column_values(&self) -> Vec<BindValue> {
        vec![
            self.lib_id.clone().into(),
            self.title.clone().into(),
            self.authors.clone().into(),
            self.publisher.clone().into(),
            self.version.clone().into(),
            self.total_copies.into(),
            self.available_copies.into(),
        ]
    }
}
