//! Builders wiring the Diesel repository into the driving ports.

use std::sync::Arc;

use actix_web::web;

use cafe_directory::domain::{ApiKey, CafeCommandService, CafeQueryService};
use cafe_directory::inbound::http::state::HttpState;
use cafe_directory::outbound::persistence::{DbPool, DieselCafeRepository};

/// Build handler state with both services sharing one repository.
pub(super) fn build_http_state(pool: DbPool, api_key: Option<ApiKey>) -> web::Data<HttpState> {
    let repository = Arc::new(DieselCafeRepository::new(pool));
    let query = Arc::new(CafeQueryService::new(repository.clone()));
    let command = Arc::new(CafeCommandService::new(repository, api_key));
    web::Data::new(HttpState::new(query, command))
}
