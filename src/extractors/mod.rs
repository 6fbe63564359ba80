//! Request extractors with error responses in the service's own shape.

pub mod json;
pub use json::JsonBody;
