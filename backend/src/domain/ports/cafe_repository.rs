//! Driven port for the cafe record store.
//!
//! The store owns the persisted representation of every cafe. Callers get
//! owned [`Cafe`] snapshots back and never mutate storage except through the
//! operations below. Every lookup reports absence explicitly so callers can
//! branch before acting on a record.

use async_trait::async_trait;

use crate::domain::{Cafe, CafeId, CoffeePrice, NewCafe};

use super::define_port_error;

define_port_error! {
    /// Errors raised by cafe record store adapters.
    pub enum CafeRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } => "cafe store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "cafe store query failed: {message}",
        /// Write rejected by a storage constraint such as the unique name.
        ConstraintViolation { message: String } =>
            "cafe store constraint violated: {message}",
    }
}

/// Port for reading and writing cafe records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CafeRepository: Send + Sync {
    /// Fetch one cafe by identifier.
    async fn find_by_id(&self, id: CafeId) -> Result<Option<Cafe>, CafeRepositoryError>;

    /// Fetch every stored cafe.
    ///
    /// Adapters return records in insertion order where they can, but callers
    /// must treat the result as an unordered collection.
    async fn list_all(&self) -> Result<Vec<Cafe>, CafeRepositoryError>;

    /// Fetch a single cafe whose location equals `location` exactly.
    ///
    /// When several cafes share the location only one is returned. Which one
    /// is an adapter detail (the SQLite adapter picks the lowest id) and must
    /// not be read as the canonical cafe for that location.
    async fn find_first_by_location(
        &self,
        location: &str,
    ) -> Result<Option<Cafe>, CafeRepositoryError>;

    /// Store a new cafe and return it with its assigned identifier.
    ///
    /// Fails with [`CafeRepositoryError::ConstraintViolation`] when the name
    /// is already taken.
    async fn insert(&self, cafe: &NewCafe) -> Result<Cafe, CafeRepositoryError>;

    /// Replace the coffee price of an existing cafe.
    ///
    /// Returns `None` when no cafe has the given identifier.
    async fn update_coffee_price(
        &self,
        id: CafeId,
        price: &CoffeePrice,
    ) -> Result<Option<Cafe>, CafeRepositoryError>;

    /// Permanently remove a cafe. Returns `false` when nothing was deleted.
    async fn delete_by_id(&self, id: CafeId) -> Result<bool, CafeRepositoryError>;
}
