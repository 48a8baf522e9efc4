//! Shared validation helpers for inbound HTTP adapters.

use serde_json::{Map, Value, json};

use crate::domain::{Error, ProfileField};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    UnknownField,
    ImmutableField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::UnknownField => "unknown_field",
            ErrorCode::ImmutableField => "immutable_field",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn unknown_field_error(name: &str) -> Error {
    ValidationError::new(name, format!("unknown profile field: {name}"))
        .with_code(ErrorCode::UnknownField)
}

pub(crate) fn immutable_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("the {field} field cannot be changed"))
        .with_code(ErrorCode::ImmutableField)
}

/// Resolve a patch path segment naming a profile field.
pub(crate) fn parse_field(name: &str) -> Result<ProfileField, Error> {
    name.parse().map_err(|_| unknown_field_error(name))
}

/// Check that `body` carries every mandatory profile field, in canonical
/// order, reporting the first one missing.
pub(crate) fn require_fields(body: &Map<String, Value>) -> Result<(), Error> {
    for field in ProfileField::REQUIRED {
        if !body.contains_key(field.as_str()) {
            return Err(missing_field_error(FieldName::new(field.as_str())));
        }
    }
    Ok(())
}
