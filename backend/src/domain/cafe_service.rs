//! Cafe domain services.
//!
//! These services implement the cafe driving ports on top of the record
//! store. They own the absence checks, the API key gate and the mapping of
//! store failures onto domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    AddCafeRequest, CafeCommand, CafePicker, CafeQuery, CafeRepository, CafeRepositoryError,
    ReportClosedRequest, SearchCafeRequest, ThreadRngCafePicker, UpdateCoffeePriceRequest,
};
use crate::domain::{ApiKey, Cafe, CafeId, Error};

pub(crate) const NO_CAFE_AT_LOCATION: &str = "Sorry, we don't have a cafe at that location";
pub(crate) const NO_CAFES_STORED: &str = "Sorry, there are no cafes in the directory yet";
pub(crate) const DUPLICATE_NAME: &str = "A cafe with that name already exists";
pub(crate) const NOT_ALLOWED: &str =
    "Sorry, that's not allowed. Make sure you have the correct api_key";

fn cafe_not_found(id: CafeId) -> Error {
    Error::not_found(format!(
        "Sorry a cafe with id {id} was not found in the database"
    ))
}

fn map_repository_error(err: CafeRepositoryError) -> Error {
    match err {
        CafeRepositoryError::ConstraintViolation { message } => {
            debug!(%message, "cafe write rejected by constraint");
            Error::constraint_violation(DUPLICATE_NAME)
        }
        CafeRepositoryError::Connection { message } => {
            error!(%message, "cafe store unavailable");
            Error::internal(format!("cafe store unavailable: {message}"))
        }
        CafeRepositoryError::Query { message } => {
            error!(%message, "cafe store query failed");
            Error::internal(format!("cafe store error: {message}"))
        }
    }
}

/// Read-side service implementing [`CafeQuery`].
#[derive(Clone)]
pub struct CafeQueryService<R, P = ThreadRngCafePicker> {
    cafe_repo: Arc<R>,
    picker: P,
}

impl<R> CafeQueryService<R> {
    /// Create a query service that samples random cafes uniformly.
    pub fn new(cafe_repo: Arc<R>) -> Self {
        Self::with_picker(cafe_repo, ThreadRngCafePicker)
    }
}

impl<R, P> CafeQueryService<R, P> {
    /// Create a query service with an explicit selection strategy.
    pub fn with_picker(cafe_repo: Arc<R>, picker: P) -> Self {
        Self { cafe_repo, picker }
    }
}

#[async_trait]
impl<R, P> CafeQuery for CafeQueryService<R, P>
where
    R: CafeRepository,
    P: CafePicker,
{
    async fn random_cafe(&self) -> Result<Cafe, Error> {
        let mut cafes = self
            .cafe_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;

        let index = self
            .picker
            .pick(cafes.len())
            .ok_or_else(|| Error::empty_collection(NO_CAFES_STORED))?;
        if index >= cafes.len() {
            return Err(Error::internal(format!(
                "picker chose index {index} out of {}",
                cafes.len()
            )));
        }
        Ok(cafes.swap_remove(index))
    }

    async fn list_cafes(&self) -> Result<Vec<Cafe>, Error> {
        self.cafe_repo
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    async fn search_by_location(&self, request: SearchCafeRequest) -> Result<Cafe, Error> {
        self.cafe_repo
            .find_first_by_location(&request.location)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(NO_CAFE_AT_LOCATION))
    }
}

/// Write-side service implementing [`CafeCommand`].
#[derive(Clone)]
pub struct CafeCommandService<R> {
    cafe_repo: Arc<R>,
    api_key: Option<ApiKey>,
}

impl<R> CafeCommandService<R> {
    /// Create a command service.
    ///
    /// Without an `api_key` every deletion is refused.
    pub fn new(cafe_repo: Arc<R>, api_key: Option<ApiKey>) -> Self {
        Self { cafe_repo, api_key }
    }

    fn authorise(&self, submitted: Option<&str>) -> Result<(), Error> {
        let allowed = match (&self.api_key, submitted) {
            (Some(expected), Some(candidate)) => expected.matches(candidate),
            _ => false,
        };
        if allowed {
            Ok(())
        } else {
            warn!(key_present = submitted.is_some(), "rejected api key");
            Err(Error::forbidden(NOT_ALLOWED))
        }
    }
}

#[async_trait]
impl<R> CafeCommand for CafeCommandService<R>
where
    R: CafeRepository,
{
    async fn add_cafe(&self, request: AddCafeRequest) -> Result<Cafe, Error> {
        let cafe = self
            .cafe_repo
            .insert(&request.cafe)
            .await
            .map_err(map_repository_error)?;
        info!(cafe_id = %cafe.id(), name = cafe.name(), "cafe added");
        Ok(cafe)
    }

    async fn update_coffee_price(
        &self,
        request: UpdateCoffeePriceRequest,
    ) -> Result<Cafe, Error> {
        let UpdateCoffeePriceRequest { cafe_id, new_price } = request;
        let cafe = self
            .cafe_repo
            .update_coffee_price(cafe_id, &new_price)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| cafe_not_found(cafe_id))?;
        info!(%cafe_id, "coffee price updated");
        Ok(cafe)
    }

    async fn report_closed(&self, request: ReportClosedRequest) -> Result<(), Error> {
        let ReportClosedRequest { cafe_id, api_key } = request;
        self.authorise(api_key.as_deref())?;

        let deleted = self
            .cafe_repo
            .delete_by_id(cafe_id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(cafe_not_found(cafe_id));
        }
        info!(%cafe_id, "cafe reported closed and deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "cafe_service_tests.rs"]
mod tests;
