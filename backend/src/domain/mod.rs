//! Domain primitives, services and ports.
//!
//! Purpose: define the cafe aggregate, the error taxonomy shared by every
//! adapter, and the services that apply the directory's rules on top of the
//! record store port. Nothing here depends on Actix or Diesel.
//!
//! Public surface:
//! - `Cafe`, `CafeId`, `NewCafe`, `CoffeePrice`: the record and its inputs.
//! - `Error`, `ErrorCode`: canonical error payload and kinds.
//! - `ApiKey`: shared secret guarding deletion.
//! - `CafeQueryService`, `CafeCommandService`: driving port implementations.
//! - `TraceId`: request-scoped correlation identifier.

pub mod api_key;
pub mod cafe;
pub mod cafe_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::api_key::ApiKey;
pub use self::cafe::{
    Amenities, Cafe, CafeDraft, CafeId, CafeValidationError, CoffeePrice, NewCafe, NewCafeDraft,
};
pub use self::cafe_service::{CafeCommandService, CafeQueryService};
pub use self::error::{Error, ErrorCode, ErrorEnvelopeSchema};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
