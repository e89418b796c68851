//! In-memory user directory exposed over a JSON REST API.
//!
//! Layers:
//! - [`domain`]: user records, the error payload and the
//!   [`domain::ports::UserDirectory`] port.
//! - [`outbound`]: the in-memory directory adapter.
//! - [`inbound`]: Actix handlers translating HTTP into directory calls.
//! - [`middleware`]: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
