//! Cafe directory API handlers.
//!
//! ```text
//! GET    /random
//! GET    /all
//! GET    /search?loc=Peckham
//! POST   /add                      (form: name, map_url, ... )
//! PATCH  /update-price/{cafe_id}   (new_price)
//! DELETE /report-closed/{key_id}   (api_key)
//! ```
//!
//! Parameters may arrive in the query string or a form body; both are merged
//! before validation.

use std::collections::HashMap;

use actix_web::{delete, get, patch, post, web};

use crate::domain::ports::{
    AddCafeRequest, ReportClosedRequest, SearchCafeRequest, UpdateCoffeePriceRequest,
};
use crate::domain::{
    Amenities, CafeValidationError, CoffeePrice, Error, NewCafe, NewCafeDraft,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    AcknowledgementResponse, CAFE_ADDED, CAFE_DELETED, CafeBody, CafeResponse,
    CafesListResponse, PRICE_UPDATED, RandomCafeBody, RandomCafeResponse,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, RequestParams, optional_param, parse_cafe_id, parse_flag, require_param,
    require_params,
};

type QueryParams = web::Query<HashMap<String, String>>;
type FormParams = Option<web::Form<HashMap<String, String>>>;

const LOC: FieldName = FieldName::new("loc");
const NAME: FieldName = FieldName::new("name");
const MAP_URL: FieldName = FieldName::new("map_url");
const IMG_URL: FieldName = FieldName::new("img_url");
const LOCATION: FieldName = FieldName::new("location");
const SEATS: FieldName = FieldName::new("seats");
const HAS_TOILET: FieldName = FieldName::new("has_toilet");
const HAS_WIFI: FieldName = FieldName::new("has_wifi");
const HAS_SOCKETS: FieldName = FieldName::new("has_sockets");
const CAN_TAKE_CALLS: FieldName = FieldName::new("can_take_calls");
const COFFEE_PRICE: FieldName = FieldName::new("coffee_price");
const NEW_PRICE: FieldName = FieldName::new("new_price");
const API_KEY: FieldName = FieldName::new("api_key");

const ADD_CAFE_FIELDS: [FieldName; 9] = [
    NAME,
    MAP_URL,
    IMG_URL,
    LOCATION,
    SEATS,
    HAS_TOILET,
    HAS_WIFI,
    HAS_SOCKETS,
    CAN_TAKE_CALLS,
];

fn collect_params(query: QueryParams, form: FormParams) -> RequestParams {
    RequestParams::merge(query.into_inner(), form.map(web::Form::into_inner))
}

fn map_cafe_validation_error(err: CafeValidationError) -> Error {
    match err {
        CafeValidationError::EmptyField { field } => {
            Error::missing_parameter(format!("missing required parameter: {field}"))
        }
    }
}

fn new_cafe_from_params(params: &RequestParams) -> Result<NewCafe, Error> {
    let values = require_params(params, &ADD_CAFE_FIELDS)?;
    let [name, map_url, img_url, location, seats, toilet, wifi, sockets, calls] =
        <[&str; 9]>::try_from(values)
            .map_err(|_| Error::internal("required parameter count mismatch"))?;

    let amenities = Amenities {
        has_toilet: parse_flag(toilet, HAS_TOILET)?,
        has_wifi: parse_flag(wifi, HAS_WIFI)?,
        has_sockets: parse_flag(sockets, HAS_SOCKETS)?,
        can_take_calls: parse_flag(calls, CAN_TAKE_CALLS)?,
    };

    NewCafe::try_from(NewCafeDraft {
        name: name.to_owned(),
        map_url: map_url.to_owned(),
        img_url: img_url.to_owned(),
        location: location.to_owned(),
        seats: seats.to_owned(),
        amenities,
        coffee_price: optional_param(params, COFFEE_PRICE).map(str::to_owned),
    })
    .map_err(map_cafe_validation_error)
}

/// Return one cafe chosen uniformly at random.
///
/// The body deliberately carries no `caffe_id`.
#[utoipa::path(
    get,
    path = "/random",
    responses(
        (status = 200, description = "Randomly chosen cafe", body = RandomCafeResponse),
        (status = 404, description = "No cafes stored", body = crate::domain::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::domain::ErrorEnvelopeSchema)
    ),
    tags = ["cafes"],
    operation_id = "randomCafe"
)]
#[get("/random")]
pub async fn random_cafe(state: web::Data<HttpState>) -> ApiResult<web::Json<RandomCafeResponse>> {
    let cafe = state.query.random_cafe().await?;
    Ok(web::Json(RandomCafeResponse {
        cafe: RandomCafeBody::from(&cafe),
    }))
}

/// List every stored cafe.
#[utoipa::path(
    get,
    path = "/all",
    responses(
        (status = 200, description = "All cafes", body = CafesListResponse),
        (status = 500, description = "Internal server error", body = crate::domain::ErrorEnvelopeSchema)
    ),
    tags = ["cafes"],
    operation_id = "listCafes"
)]
#[get("/all")]
pub async fn all_cafes(state: web::Data<HttpState>) -> ApiResult<web::Json<CafesListResponse>> {
    let cafes = state.query.list_cafes().await?;
    Ok(web::Json(CafesListResponse {
        cafes_list: cafes.iter().map(CafeBody::from).collect(),
    }))
}

/// Find a cafe whose location matches `loc` exactly.
///
/// When several cafes share the location only one of them is returned.
#[utoipa::path(
    get,
    path = "/search",
    params(("loc" = String, Query, description = "Exact location to match")),
    responses(
        (status = 200, description = "Matching cafe", body = CafeResponse),
        (status = 404, description = "Missing `loc` or no cafe at that location", body = crate::domain::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::domain::ErrorEnvelopeSchema)
    ),
    tags = ["cafes"],
    operation_id = "searchCafes"
)]
#[get("/search")]
pub async fn search_cafes(
    state: web::Data<HttpState>,
    query: QueryParams,
) -> ApiResult<web::Json<CafeResponse>> {
    let params = RequestParams::merge(query.into_inner(), None);
    let location = require_param(&params, LOC)?.to_owned();

    let cafe = state
        .query
        .search_by_location(SearchCafeRequest { location })
        .await?;
    Ok(web::Json(CafeResponse {
        cafe: CafeBody::from(&cafe),
    }))
}

/// Create a cafe from the submitted fields.
///
/// Every field except `coffee_price` is required. Boolean fields accept
/// `true/false`, `1/0`, `yes/no` or `on/off`.
#[utoipa::path(
    post,
    path = "/add",
    request_body(
        content = crate::inbound::http::schemas::AddCafeForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Cafe added", body = AcknowledgementResponse),
        (status = 400, description = "Unparseable boolean field", body = crate::domain::ErrorEnvelopeSchema),
        (status = 404, description = "Required field missing", body = crate::domain::ErrorEnvelopeSchema),
        (status = 409, description = "Cafe name already taken", body = crate::domain::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::domain::ErrorEnvelopeSchema)
    ),
    tags = ["cafes"],
    operation_id = "addCafe"
)]
#[post("/add")]
pub async fn add_cafe(
    state: web::Data<HttpState>,
    query: QueryParams,
    form: FormParams,
) -> ApiResult<web::Json<AcknowledgementResponse>> {
    let params = collect_params(query, form);
    let cafe = new_cafe_from_params(&params)?;

    state.command.add_cafe(AddCafeRequest { cafe }).await?;
    Ok(web::Json(AcknowledgementResponse::success(CAFE_ADDED)))
}

/// Replace the coffee price of one cafe.
#[utoipa::path(
    patch,
    path = "/update-price/{cafe_id}",
    params(
        ("cafe_id" = i32, Path, description = "Cafe identifier"),
        ("new_price" = String, Query, description = "Replacement price; may also be sent as a form field")
    ),
    responses(
        (status = 200, description = "Price updated", body = AcknowledgementResponse),
        (status = 404, description = "Missing `new_price` or unknown cafe", body = crate::domain::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::domain::ErrorEnvelopeSchema)
    ),
    tags = ["cafes"],
    operation_id = "updateCoffeePrice"
)]
#[patch("/update-price/{cafe_id}")]
pub async fn update_price(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: QueryParams,
    form: FormParams,
) -> ApiResult<web::Json<AcknowledgementResponse>> {
    let cafe_id = parse_cafe_id(&path.into_inner())?;
    let params = collect_params(query, form);
    let new_price =
        CoffeePrice::new(require_param(&params, NEW_PRICE)?).map_err(map_cafe_validation_error)?;

    state
        .command
        .update_coffee_price(UpdateCoffeePriceRequest { cafe_id, new_price })
        .await?;
    Ok(web::Json(AcknowledgementResponse::success(PRICE_UPDATED)))
}

/// Delete a cafe reported as closed. Requires the shared `api_key`.
#[utoipa::path(
    delete,
    path = "/report-closed/{key_id}",
    params(
        ("key_id" = i32, Path, description = "Identifier of the cafe to delete"),
        ("api_key" = String, Query, description = "Shared secret; may also be sent as a form field")
    ),
    responses(
        (status = 200, description = "Cafe deleted", body = AcknowledgementResponse),
        (status = 403, description = "Missing or wrong api_key", body = crate::domain::ErrorEnvelopeSchema),
        (status = 404, description = "Unknown cafe", body = crate::domain::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::domain::ErrorEnvelopeSchema)
    ),
    tags = ["cafes"],
    operation_id = "reportClosed"
)]
#[delete("/report-closed/{key_id}")]
pub async fn report_closed(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: QueryParams,
    form: FormParams,
) -> ApiResult<web::Json<AcknowledgementResponse>> {
    let cafe_id = parse_cafe_id(&path.into_inner())?;
    let params = collect_params(query, form);
    let api_key = optional_param(&params, API_KEY).map(str::to_owned);

    state
        .command
        .report_closed(ReportClosedRequest { cafe_id, api_key })
        .await?;
    Ok(web::Json(AcknowledgementResponse::success(CAFE_DELETED)))
}

/// Register every cafe endpoint on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(random_cafe)
        .service(all_cafes)
        .service(search_cafes)
        .service(add_cafe)
        .service(update_price)
        .service(report_closed);
}

#[cfg(test)]
#[path = "cafes_tests.rs"]
mod tests;
