//! Maps domain errors onto HTTP responses.
//!
//! Status codes follow [`ErrorCode`]. Not-found errors answer with their text
//! as a plain-text body. Other failures use the JSON error envelope, with the
//! message of internal errors replaced by a fixed string after it has been
//! logged.

use actix_web::error::JsonPayloadError;
use actix_web::http::{StatusCode, header::ContentType};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn redacted(error: &Error) -> Error {
    let public = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(trace_id) => public.with_trace_id(trace_id),
        None => public,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(trace_id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, trace_id));
        }

        match self.code() {
            ErrorCode::NotFound => response
                .content_type(ContentType::plaintext())
                .body(self.message().to_owned()),
            ErrorCode::InternalError => {
                error!(message = %self.message(), "request failed with an internal error");
                response.json(redacted(self))
            }
            ErrorCode::InvalidRequest => response.json(self.clone()),
        }
    }
}

/// `JsonConfig` error handler: a body that fails to decode becomes a 400
/// carrying the decoder message.
pub fn json_decode_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "failed to decode request body");
    Error::invalid_request(err.to_string()).into()
}

#[cfg(test)]
mod tests;
