//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod cafe_command;
mod cafe_picker;
mod cafe_query;
mod cafe_repository;

#[cfg(test)]
pub use cafe_command::MockCafeCommand;
pub use cafe_command::{
    AddCafeRequest, CafeCommand, ReportClosedRequest, UpdateCoffeePriceRequest,
};
pub use cafe_picker::{CafePicker, ThreadRngCafePicker};
#[cfg(test)]
pub use cafe_picker::{FixtureCafePicker, MockCafePicker};
#[cfg(test)]
pub use cafe_query::MockCafeQuery;
pub use cafe_query::{CafeQuery, SearchCafeRequest};
#[cfg(test)]
pub use cafe_repository::MockCafeRepository;
pub use cafe_repository::{CafeRepository, CafeRepositoryError};
