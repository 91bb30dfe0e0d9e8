//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod persons;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
