//! HTTP rendering of domain errors.
//!
//! Not-found and duplicate-enrolment failures answer with their message as a
//! plain-text body. Validation and internal failures answer with the JSON
//! error payload; internal failures are also logged.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        match self.code() {
            ErrorCode::NotFound | ErrorCode::Conflict => builder
                .content_type(ContentType::plaintext())
                .body(self.message().to_owned()),
            ErrorCode::InvalidRequest => builder.json(self),
            ErrorCode::InternalError => {
                error!(
                    message = self.message(),
                    trace_id = self.trace_id(),
                    "request failed with internal error"
                );
                builder.json(self)
            }
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(err.to_string())
    }
}
