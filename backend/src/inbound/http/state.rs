//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable with any directory adapter.

use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use user_directory::inbound::http::state::HttpState;
/// use user_directory::outbound::memory::InMemoryUserDirectory;
///
/// let state = HttpState::new(Arc::new(InMemoryUserDirectory::new()));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// The user collection every users endpoint reads and mutates.
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Wrap a directory implementation for injection into handlers.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}
