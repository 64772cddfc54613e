//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the serialised form is the canonical error envelope
//! `{"error": {"<Kind>": "<message>"}}`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use utoipa::ToSchema;

use super::TraceId;

/// Stable machine-readable error kind describing the failure category.
///
/// The variant name doubles as the key inside the error envelope, so
/// renaming a variant is a breaking change for clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A required request parameter was absent or empty.
    MissingParameter,
    /// A request parameter was present but could not be interpreted.
    InvalidParameter,
    /// The requested record does not exist.
    NotFound,
    /// The caller is not allowed to perform this action.
    Forbidden,
    /// The write would break a storage constraint (for example a duplicate
    /// cafe name).
    ConstraintViolation,
    /// The operation needs at least one stored record and there are none.
    EmptyCollection,
    /// An unexpected error occurred inside the service.
    InternalError,
}

impl ErrorCode {
    /// Key used for this kind inside the error envelope.
    ///
    /// # Examples
    /// ```
    /// use cafe_directory::domain::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::NotFound.as_str(), "NotFound");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingParameter => "MissingParameter",
            Self::InvalidParameter => "InvalidParameter",
            Self::NotFound => "NotFound",
            Self::Forbidden => "Forbidden",
            Self::ConstraintViolation => "ConstraintViolation",
            Self::EmptyCollection => "EmptyCollection",
            Self::InternalError => "InternalError",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// Captures the trace identifier in scope at construction time so adapters
/// can correlate the failure with request logs.
///
/// # Examples
/// ```
/// use cafe_directory::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Sorry, we don't have a cafe at that location");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// let body = serde_json::to_value(&err).expect("serialises");
/// assert_eq!(
///     body["error"]["NotFound"],
///     "Sorry, we don't have a cafe at that location"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error kind.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was created.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach an explicit trace identifier.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::MissingParameter`].
    pub fn missing_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingParameter, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidParameter`].
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameter, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::ConstraintViolation`].
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConstraintViolation, message)
    }

    /// Convenience constructor for [`ErrorCode::EmptyCollection`].
    pub fn empty_collection(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptyCollection, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

struct ErrorBody<'a>(&'a Error);

impl Serialize for ErrorBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.code.as_str(), &self.0.message)?;
        map.end()
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("error", &ErrorBody(self))?;
        map.end()
    }
}

/// OpenAPI description of the error envelope.
#[derive(ToSchema)]
#[schema(
    as = ErrorEnvelope,
    example = json!({"error": {"NotFound": "Sorry, we don't have a cafe at that location"}})
)]
pub struct ErrorEnvelopeSchema {
    /// Single-entry map from error kind to message.
    pub error: std::collections::BTreeMap<String, String>,
}
