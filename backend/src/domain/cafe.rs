//! Cafe aggregate and its creation draft.
//!
//! `Cafe` is an owned snapshot of a stored record; only the record store
//! hands them out. `NewCafe` carries the fields a caller submits when
//! creating a record, and `CoffeePrice` is the replacement value accepted by
//! the price update.

use std::fmt;

use thiserror::Error;

/// Identifier assigned by the record store when a cafe is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CafeId(i32);

impl CafeId {
    /// Wrap a raw integer identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value as stored.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i32> for CafeId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Amenity flags recorded for every cafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amenities {
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
}

/// Plain field bundle used to assemble a [`Cafe`] snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeDraft {
    pub id: CafeId,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub amenities: Amenities,
    pub coffee_price: Option<String>,
}

/// Snapshot of a stored cafe record.
///
/// # Examples
/// ```
/// use cafe_directory::domain::{Amenities, Cafe, CafeDraft, CafeId};
///
/// let cafe = Cafe::from(CafeDraft {
///     id: CafeId::new(7),
///     name: "Science Gallery London".to_owned(),
///     map_url: "https://g.page/scigallerylon".to_owned(),
///     img_url: "https://example.com/sg.jpg".to_owned(),
///     location: "London Bridge".to_owned(),
///     seats: "50+".to_owned(),
///     amenities: Amenities { has_wifi: true, ..Amenities::default() },
///     coffee_price: Some("£2.40".to_owned()),
/// });
/// assert_eq!(cafe.id(), CafeId::new(7));
/// assert!(cafe.amenities().has_wifi);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cafe {
    id: CafeId,
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    amenities: Amenities,
    coffee_price: Option<String>,
}

impl From<CafeDraft> for Cafe {
    fn from(draft: CafeDraft) -> Self {
        let CafeDraft {
            id,
            name,
            map_url,
            img_url,
            location,
            seats,
            amenities,
            coffee_price,
        } = draft;
        Self {
            id,
            name,
            map_url,
            img_url,
            location,
            seats,
            amenities,
            coffee_price,
        }
    }
}

impl Cafe {
    pub fn id(&self) -> CafeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map_url(&self) -> &str {
        &self.map_url
    }

    pub fn img_url(&self) -> &str {
        &self.img_url
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Free-text seating capacity, e.g. `"20-30"`.
    pub fn seats(&self) -> &str {
        &self.seats
    }

    pub fn amenities(&self) -> Amenities {
        self.amenities
    }

    /// Free-form price text; not parsed as currency.
    pub fn coffee_price(&self) -> Option<&str> {
        self.coffee_price.as_deref()
    }
}

/// Validation errors raised while building a [`NewCafe`] or [`CoffeePrice`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CafeValidationError {
    /// A required text field is empty once trimmed.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

fn require_text(field: &'static str, value: String) -> Result<String, CafeValidationError> {
    if value.trim().is_empty() {
        return Err(CafeValidationError::EmptyField { field });
    }
    Ok(value)
}

/// Text fields submitted when creating a cafe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafeDraft {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub amenities: Amenities,
    pub coffee_price: Option<String>,
}

/// Validated creation request for the record store.
///
/// ## Invariants
/// - every required text field is non-empty once trimmed;
/// - `coffee_price`, when present, is non-empty (blank input becomes `None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    name: String,
    map_url: String,
    img_url: String,
    location: String,
    seats: String,
    amenities: Amenities,
    coffee_price: Option<CoffeePrice>,
}

impl TryFrom<NewCafeDraft> for NewCafe {
    type Error = CafeValidationError;

    fn try_from(draft: NewCafeDraft) -> Result<Self, Self::Error> {
        let NewCafeDraft {
            name,
            map_url,
            img_url,
            location,
            seats,
            amenities,
            coffee_price,
        } = draft;
        Ok(Self {
            name: require_text("name", name)?,
            map_url: require_text("map_url", map_url)?,
            img_url: require_text("img_url", img_url)?,
            location: require_text("location", location)?,
            seats: require_text("seats", seats)?,
            amenities,
            coffee_price: coffee_price.and_then(|raw| CoffeePrice::new(raw).ok()),
        })
    }
}

impl NewCafe {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn map_url(&self) -> &str {
        &self.map_url
    }

    pub fn img_url(&self) -> &str {
        &self.img_url
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn seats(&self) -> &str {
        &self.seats
    }

    pub fn amenities(&self) -> Amenities {
        self.amenities
    }

    pub fn coffee_price(&self) -> Option<&CoffeePrice> {
        self.coffee_price.as_ref()
    }
}

/// Replacement coffee price. Free-form text such as `"£1.50"`.
///
/// # Examples
/// ```
/// use cafe_directory::domain::CoffeePrice;
///
/// let price = CoffeePrice::new("£1.50").expect("non-empty");
/// assert_eq!(price.as_str(), "£1.50");
/// assert!(CoffeePrice::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeePrice(String);

impl CoffeePrice {
    /// Accept any non-blank price text.
    pub fn new(value: impl Into<String>) -> Result<Self, CafeValidationError> {
        require_text("coffee_price", value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CoffeePrice {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn draft() -> NewCafeDraft {
        NewCafeDraft {
            name: "Monmouth Coffee".to_owned(),
            map_url: "https://goo.gl/maps/monmouth".to_owned(),
            img_url: "https://example.com/monmouth.jpg".to_owned(),
            location: "Borough".to_owned(),
            seats: "10-20".to_owned(),
            amenities: Amenities {
                has_toilet: true,
                ..Amenities::default()
            },
            coffee_price: Some("£2.80".to_owned()),
        }
    }

    #[rstest]
    fn accepts_complete_draft(draft: NewCafeDraft) {
        let cafe = NewCafe::try_from(draft).expect("valid draft");
        assert_eq!(cafe.name(), "Monmouth Coffee");
        assert_eq!(cafe.coffee_price().map(CoffeePrice::as_str), Some("£2.80"));
        assert!(cafe.amenities().has_toilet);
    }

    #[rstest]
    #[case::name("name")]
    #[case::map_url("map_url")]
    #[case::img_url("img_url")]
    #[case::location("location")]
    #[case::seats("seats")]
    fn rejects_blank_required_field(mut draft: NewCafeDraft, #[case] field: &'static str) {
        let slot = match field {
            "name" => &mut draft.name,
            "map_url" => &mut draft.map_url,
            "img_url" => &mut draft.img_url,
            "location" => &mut draft.location,
            _ => &mut draft.seats,
        };
        *slot = "   ".to_owned();

        let err = NewCafe::try_from(draft).expect_err("blank field rejected");
        assert_eq!(err, CafeValidationError::EmptyField { field });
    }

    #[rstest]
    fn blank_price_is_treated_as_absent(mut draft: NewCafeDraft) {
        draft.coffee_price = Some(String::new());
        let cafe = NewCafe::try_from(draft).expect("valid draft");
        assert!(cafe.coffee_price().is_none());
    }
}
