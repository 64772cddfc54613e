//! Driving port for cafe read operations.
//!
//! Inbound adapters call this port instead of the record store so that
//! empty-store and no-match outcomes are decided in one place.

use async_trait::async_trait;

use crate::domain::{Cafe, Error};

/// Request to find a cafe by exact location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCafeRequest {
    pub location: String,
}

/// Driving port for cafe reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CafeQuery: Send + Sync {
    /// Return one cafe chosen uniformly at random from the current records.
    ///
    /// Fails with `EmptyCollection` when nothing is stored.
    async fn random_cafe(&self) -> Result<Cafe, Error>;

    /// Return every stored cafe. An empty list is a valid answer.
    async fn list_cafes(&self) -> Result<Vec<Cafe>, Error>;

    /// Return one cafe at the requested location, or `NotFound`.
    async fn search_by_location(&self, request: SearchCafeRequest) -> Result<Cafe, Error>;
}
