//! Driving port for cafe write operations.

use async_trait::async_trait;

use crate::domain::{Cafe, CafeId, CoffeePrice, Error, NewCafe};

/// Request to create a cafe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCafeRequest {
    pub cafe: NewCafe,
}

/// Request to replace a cafe's coffee price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCoffeePriceRequest {
    pub cafe_id: CafeId,
    pub new_price: CoffeePrice,
}

/// Request to delete a cafe that has closed.
///
/// `api_key` is whatever the caller submitted; `None` when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportClosedRequest {
    pub cafe_id: CafeId,
    pub api_key: Option<String>,
}

/// Driving port for cafe writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CafeCommand: Send + Sync {
    /// Create a cafe. Duplicate names fail with `ConstraintViolation`.
    async fn add_cafe(&self, request: AddCafeRequest) -> Result<Cafe, Error>;

    /// Replace the coffee price. Unknown ids fail with `NotFound`.
    async fn update_coffee_price(&self, request: UpdateCoffeePriceRequest)
    -> Result<Cafe, Error>;

    /// Delete a cafe after checking the API key.
    ///
    /// The key is checked before the record is looked up, so a bad key yields
    /// `Forbidden` whether or not the cafe exists.
    async fn report_closed(&self, request: ReportClosedRequest) -> Result<(), Error>;
}
