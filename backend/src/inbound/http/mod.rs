//! HTTP inbound adapter exposing the users REST endpoints and health probes.

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
