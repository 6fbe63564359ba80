//! Generic CRUD execution against SQLite. One statement per call, no transactions.

use crate::error::AppError;
use crate::model::Record;
use crate::sql::{self, BindValue};
use sqlx::SqlitePool;

pub struct CrudService;

impl CrudService {
    /// Insert one row and return it as stored, including a generated key.
    pub async fn create<R: Record>(pool: &SqlitePool, mut record: R) -> Result<R, AppError> {
        record.prepare_create();
        let entity = &R::ENTITY;
        let sql = sql::insert(entity);
        let mut params: Vec<BindValue> = Vec::with_capacity(entity.columns.len() + 1);
        if !entity.key_generated {
            params.push(record.key().into());
        }
        params.extend(record.column_values());
        tracing::debug!(sql = %sql, params = ?params, "query");

        let mut query = sqlx::query_as::<_, R>(&sql);
        for p in params {
            query = query.bind(p);
        }
        let row = query.fetch_one(pool).await?;
        Ok(row)
    }

    /// Fetch one row by key; `NotFound` when no row matches.
    pub async fn read<R: Record>(pool: &SqlitePool, key: R::Key) -> Result<R, AppError> {
        let sql = sql::select_by_key(&R::ENTITY);
        let key: BindValue = key.into();
        tracing::debug!(sql = %sql, key = ?key, "query");
        sqlx::query_as::<_, R>(&sql)
            .bind(key)
            .fetch_optional(pool)
            .await?
            .ok_or(AppError::NotFound(R::ENTITY.name))
    }

    /// Overwrite every mutable column of the row with `key`. A missing row is not an error;
    /// returns rows affected.
    pub async fn update<R: Record>(pool: &SqlitePool, key: R::Key, record: &R) -> Result<u64, AppError> {
        let sql = sql::update(&R::ENTITY);
        let key: BindValue = key.into();
        let params = record.column_values();
        tracing::debug!(sql = %sql, params = ?params, key = ?key, "query");

        let mut query = sqlx::query(&sql);
        for p in params {
            query = query.bind(p);
        }
        let affected = query.bind(key).execute(pool).await?.rows_affected();
        if affected == 0 {
            tracing::debug!(entity = R::ENTITY.name, "update matched no row");
        }
        Ok(affected)
    }

    /// Delete the row with `key`. A missing row is not an error; returns rows affected.
    pub async fn delete<R: Record>(pool: &SqlitePool, key: R::Key) -> Result<u64, AppError> {
        let sql = sql::delete(&R::ENTITY);
        let key: BindValue = key.into();
        tracing::debug!(sql = %sql, key = ?key, "query");
        let affected = sqlx::query(&sql).bind(key).execute(pool).await?.rows_affected();
        Ok(affected)
    }

    /// All rows in store scan order.
    pub async fn list<R: Record>(pool: &SqlitePool) -> Result<Vec<R>, AppError> {
        let sql = sql::select_all(&R::ENTITY);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, R>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }
}
