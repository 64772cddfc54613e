//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CafeCommand, CafeQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub query: Arc<dyn CafeQuery>,
    pub command: Arc<dyn CafeCommand>,
}

impl HttpState {
    /// Construct state from the read and write ports.
    ///
    /// # Examples
    /// ```ignore
    /// use std::sync::Arc;
    /// use cafe_directory::domain::{CafeCommandService, CafeQueryService};
    /// use cafe_directory::inbound::http::state::HttpState;
    ///
    /// let repo = Arc::new(repository);
    /// let state = HttpState::new(
    ///     Arc::new(CafeQueryService::new(repo.clone())),
    ///     Arc::new(CafeCommandService::new(repo, None)),
    /// );
    /// ```
    pub fn new(query: Arc<dyn CafeQuery>, command: Arc<dyn CafeCommand>) -> Self {
        Self { query, command }
    }
}
