//! Route tables for each service.

pub mod entity;
pub use entity::{entity_routes, service_routes};
