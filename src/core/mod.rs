//! Core module containing fundamental traits and types

pub mod entity;
pub mod error;
pub mod field;
pub mod query;
pub mod service;

pub use entity::Record;
pub use error::{ApiError, ConfigError, ParkError, QueryError, ViewError};
pub use field::FieldValue;
pub use query::QueryParams;
pub use service::ResourceService;
