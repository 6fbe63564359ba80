//! Entity CRUD routes. Each record type gets `/<path>` and `/<path>/:key`.

use crate::config::ServiceKind;
use crate::handlers::entity::{create, delete as delete_handler, list, read, update};
use crate::model::{Book, Record, Task, User};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes<R: Record>(state: AppState) -> Router {
    let collection = format!("/{}", R::ENTITY.path);
    let member = format!("/{}/:key", R::ENTITY.path);
    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(
            &member,
            get(read::<R>).put(update::<R>).delete(delete_handler::<R>),
        )
        .with_state(state)
}

/// All entity routes served by `kind`.
pub fn service_routes(kind: ServiceKind, state: AppState) -> Router {
    match kind {
        ServiceKind::Tasks => entity_routes::<Task>(state),
        ServiceKind::Library => Router::new()
            .merge(entity_routes::<User>(state.clone()))
            .merge(entity_routes::<Book>(state)),
    }
}
