//! Entity CRUD handlers, generic over the record type: create, read, update, delete, list.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Record;
use crate::response;
use crate::service::CrudService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list<R: Record>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<R>(&state.pool).await?;
    Ok(response::ok_many(rows))
}

pub async fn create<R: Record>(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<R>,
) -> Result<impl IntoResponse, AppError> {
    record.validate_create()?;
    let row = CrudService::create(&state.pool, record).await?;
    Ok(response::created(row))
}

pub async fn read<R: Record>(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let key = R::parse_key(&key).ok_or(AppError::NotFound(R::ENTITY.name))?;
    let row = CrudService::read::<R>(&state.pool, key).await?;
    Ok(response::ok(row))
}

/// Full overwrite. Responds with the submitted record under the path key; the row is not re-read,
/// and a missing row still answers 200. A key that cannot match any row is echoed as its default.
pub async fn update<R: Record>(
    State(state): State<AppState>,
    Path(key): Path<String>,
    JsonBody(record): JsonBody<R>,
) -> Result<impl IntoResponse, AppError> {
    let key = match R::parse_key(&key) {
        Some(key) => {
            CrudService::update(&state.pool, key.clone(), &record).await?;
            key
        }
        None => R::Key::default(),
    };
    Ok(response::ok(record.with_key(key)))
}

pub async fn delete<R: Record>(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(key) = R::parse_key(&key) {
        CrudService::delete::<R>(&state.pool, key).await?;
    }
    Ok(response::deleted(R::ENTITY.name))
}
