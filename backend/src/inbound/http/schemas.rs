//! Response bodies for the cafe endpoints.
//!
//! Domain types stay framework-agnostic and never derive `Serialize` or
//! `ToSchema`. These wrappers give every success response its canonical
//! JSON shape, `{ <operation key>: <payload> }`, and document it for
//! OpenAPI.
//!
//! Field order follows the alphabetical order existing clients receive.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Cafe;

pub(crate) const CAFE_ADDED: &str = "Successfully added the new cafe.";
pub(crate) const PRICE_UPDATED: &str = "Successfully updated the price.";
pub(crate) const CAFE_DELETED: &str = "Successfully deleted the cafe.";

/// Form fields accepted by `POST /add`.
///
/// Handlers read these from a merged parameter map, so this type only
/// documents the request for OpenAPI.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AddCafeForm {
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    /// `true/false`, `1/0`, `yes/no` or `on/off`.
    #[schema(value_type = String, example = "true")]
    has_toilet: bool,
    #[schema(value_type = String, example = "true")]
    has_wifi: bool,
    #[schema(value_type = String, example = "false")]
    has_sockets: bool,
    #[schema(value_type = String, example = "yes")]
    can_take_calls: bool,
    coffee_price: Option<String>,
}

/// Cafe record as returned by list and search, including its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CafeBody {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub caffe_id: i32,
    pub can_take_calls: bool,
    /// Free-form price text, `null` when unknown.
    #[schema(example = "£2.40")]
    pub coffee_price: Option<String>,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub img_url: String,
    #[schema(example = "Peckham")]
    pub location: String,
    pub map_url: String,
    #[schema(example = "Science Gallery London")]
    pub name: String,
    #[schema(example = "20-30")]
    pub seats: String,
}

impl From<&Cafe> for CafeBody {
    fn from(cafe: &Cafe) -> Self {
        let amenities = cafe.amenities();
        Self {
            caffe_id: cafe.id().as_i32(),
            can_take_calls: amenities.can_take_calls,
            coffee_price: cafe.coffee_price().map(str::to_owned),
            has_sockets: amenities.has_sockets,
            has_toilet: amenities.has_toilet,
            has_wifi: amenities.has_wifi,
            img_url: cafe.img_url().to_owned(),
            location: cafe.location().to_owned(),
            map_url: cafe.map_url().to_owned(),
            name: cafe.name().to_owned(),
            seats: cafe.seats().to_owned(),
        }
    }
}

/// Cafe record as returned by the random pick.
///
/// Existing clients receive this shape without the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RandomCafeBody {
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub img_url: String,
    pub location: String,
    pub map_url: String,
    pub name: String,
    pub seats: String,
}

impl From<&Cafe> for RandomCafeBody {
    fn from(cafe: &Cafe) -> Self {
        let CafeBody {
            caffe_id: _,
            can_take_calls,
            coffee_price,
            has_sockets,
            has_toilet,
            has_wifi,
            img_url,
            location,
            map_url,
            name,
            seats,
        } = CafeBody::from(cafe);
        Self {
            can_take_calls,
            coffee_price,
            has_sockets,
            has_toilet,
            has_wifi,
            img_url,
            location,
            map_url,
            name,
            seats,
        }
    }
}

/// `{"cafe": {...}}` for search.
#[derive(Debug, Serialize, ToSchema)]
pub struct CafeResponse {
    pub cafe: CafeBody,
}

/// `{"cafe": {...}}` for the random pick.
#[derive(Debug, Serialize, ToSchema)]
pub struct RandomCafeResponse {
    pub cafe: RandomCafeBody,
}

/// `{"cafes_list": [...]}` for the full listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CafesListResponse {
    pub cafes_list: Vec<CafeBody>,
}

/// Confirmation text for a successful write.
#[derive(Debug, Serialize, ToSchema)]
pub struct Acknowledgement {
    #[schema(example = "Successfully added the new cafe.")]
    pub success: String,
}

/// `{"response": {"success": "..."}}` for create, update and delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct AcknowledgementResponse {
    pub response: Acknowledgement,
}

impl AcknowledgementResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            response: Acknowledgement {
                success: message.into(),
            },
        }
    }
}
