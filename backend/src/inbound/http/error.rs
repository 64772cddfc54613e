//! Status codes and bodies for cafe directory failures.
//!
//! Absent parameters answer 404 like unknown cafes and empty collections,
//! malformed flags answer 400, a rejected API key 403 and a duplicate cafe
//! name 409. Internal failures keep their trace id but the message is
//! replaced before it reaches the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result type returned by the cafe handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent in place of any internal failure detail.
pub(crate) const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        // Existing clients expect 404 for absent parameters.
        ErrorCode::MissingParameter | ErrorCode::NotFound | ErrorCode::EmptyCollection => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::InvalidParameter => StatusCode::BAD_REQUEST,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::ConstraintViolation => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_facing(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_facing(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error while handling a cafe request");
        Self::internal(REDACTED_MESSAGE)
    }
}
