//! Request validation helpers shared by the HTTP handlers.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidJson,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidJson => "invalid_json",
        }
    }
}

/// Wire name of a request body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Error for a required field absent from the request body.
pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

/// Unwrap a required field or report it missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

fn invalid_json_error(err: &JsonPayloadError) -> Error {
    Error::invalid_request("request body must be a JSON object").with_details(json!({
        "reason": err.to_string(),
        "code": ValidationCode::InvalidJson.as_str(),
    }))
}

/// JSON extractor configuration rendering decode failures as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req: &HttpRequest| invalid_json_error(&err).into())
}
