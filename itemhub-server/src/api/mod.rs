//! HTTP API modules, one per surface

pub mod error;
pub mod graphql;
pub mod items;
pub mod query;

pub use error::ApiError;
