//! Domain primitives and ports.
//!
//! Purpose: Define strongly typed user records and the transport-agnostic
//! error payload shared by every adapter. Keep types immutable and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — domain error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User (alias to `user::User`) — stored user record.
//! - UserDraft (alias to `user::UserDraft`) — create/update input.
//! - UserId (alias to `user::UserId`) — integer user identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDraft, UserId};

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use user_directory::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("user 7 not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
