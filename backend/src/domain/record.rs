//! Raw profile records and field-level access.
//!
//! Stored profiles are JSON objects. Single-field reads and patches operate
//! on the raw object, restricted to the closed set of canonical field names,
//! so legacy records survive untouched until a write re-validates them.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

/// Closed set of profile field names addressable over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// Stable profile identifier. Doubles as the storage key.
    Id,
    /// Given name.
    Name,
    /// Family name.
    Lastname,
    /// Residential address.
    Address,
    /// Contact phone numbers.
    Phones,
    /// Party affiliation.
    PoliticalParty,
}

impl ProfileField {
    /// Every addressable field, in canonical record order.
    pub const ALL: [Self; 6] = [
        Self::Id,
        Self::Name,
        Self::Lastname,
        Self::Address,
        Self::Phones,
        Self::PoliticalParty,
    ];

    /// Fields a valid profile must always carry. `politicalParty` is optional.
    pub const REQUIRED: [Self; 5] = [
        Self::Id,
        Self::Name,
        Self::Lastname,
        Self::Address,
        Self::Phones,
    ];

    /// Wire name of the field as it appears in stored records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "name",
            Self::Lastname => "lastname",
            Self::Address => "address",
            Self::Phones => "phones",
            Self::PoliticalParty => "politicalParty",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a path segment names no known profile field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError {
    name: String,
}

impl UnknownFieldError {
    /// The unrecognised field name, as received.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown profile field: {}", self.name)
    }
}

impl std::error::Error for UnknownFieldError {}

impl FromStr for ProfileField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError { name: s.to_owned() })
    }
}

/// Error returned when a patch targets a field that may not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchError {
    /// The identifier doubles as the storage key and cannot be replaced.
    ImmutableId,
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImmutableId => write!(f, "the ID field cannot be changed"),
        }
    }
}

impl std::error::Error for PatchError {}

/// Stored profile as a raw JSON object.
///
/// Preserves whatever shape is on disk; field reads return the stored value
/// verbatim. Writes go back through the typed model, so a patched record is
/// re-validated before it reaches storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    fields: Map<String, Value>,
}

impl ProfileRecord {
    /// Wrap a raw JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Stored value for `field`, if the record carries that key.
    #[must_use]
    pub fn field(&self, field: ProfileField) -> Option<&Value> {
        self.fields.get(field.as_str())
    }

    /// Replace one field, leaving the rest of the record untouched.
    ///
    /// The identifier is the storage key and therefore immutable.
    pub fn with_field(mut self, field: ProfileField, value: Value) -> Result<Self, PatchError> {
        if matches!(field, ProfileField::Id) {
            return Err(PatchError::ImmutableId);
        }
        self.fields.insert(field.as_str().to_owned(), value);
        Ok(self)
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the record, yielding the underlying JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
