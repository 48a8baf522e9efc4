//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod profiles;
pub mod schemas;
pub mod state;
pub mod validation;
pub mod xml;

pub use error::ApiResult;
