//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use diesel::prelude::*;

use crate::domain::{Amenities, Cafe, CafeDraft, CafeId, NewCafe};

use super::schema::cafes;

/// Row struct for reading from the cafes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cafes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct CafeRow {
    pub id: i32,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl From<CafeRow> for Cafe {
    fn from(row: CafeRow) -> Self {
        let CafeRow {
            id,
            name,
            map_url,
            img_url,
            location,
            seats,
            has_toilet,
            has_wifi,
            has_sockets,
            can_take_calls,
            coffee_price,
        } = row;

        Cafe::from(CafeDraft {
            id: CafeId::new(id),
            name,
            map_url,
            img_url,
            location,
            seats,
            amenities: Amenities {
                has_toilet,
                has_wifi,
                has_sockets,
                can_take_calls,
            },
            coffee_price,
        })
    }
}

/// Insertable struct for creating new cafe records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cafes)]
pub(crate) struct NewCafeRow<'a> {
    pub name: &'a str,
    pub map_url: &'a str,
    pub img_url: &'a str,
    pub location: &'a str,
    pub seats: &'a str,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<&'a str>,
}

impl<'a> From<&'a NewCafe> for NewCafeRow<'a> {
    fn from(cafe: &'a NewCafe) -> Self {
        let amenities = cafe.amenities();
        Self {
            name: cafe.name(),
            map_url: cafe.map_url(),
            img_url: cafe.img_url(),
            location: cafe.location(),
            seats: cafe.seats(),
            has_toilet: amenities.has_toilet,
            has_wifi: amenities.has_wifi,
            has_sockets: amenities.has_sockets,
            can_take_calls: amenities.can_take_calls,
            coffee_price: cafe.coffee_price().map(|price| price.as_str()),
        }
    }
}
