//! Voter profile data model.
//!
//! A [`User`] is the typed view of one stored profile. Construction always
//! validates, so any `User` reachable from safe code satisfies the profile
//! invariants; raw on-disk shapes are handled separately by
//! [`crate::domain::ProfileRecord`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the profile constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    PaddedId,
    InvalidIdCharacters,
    EmptyName,
    EmptyLastname,
    EmptyAddressField { field: &'static str },
    EmptyPoliticalParty,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::PaddedId => write!(f, "user id must not be surrounded by whitespace"),
            Self::InvalidIdCharacters => write!(
                f,
                "user id must not contain path separators or NUL and must not start with a dot",
            ),
            Self::EmptyName => write!(f, "name must not be blank"),
            Self::EmptyLastname => write!(f, "lastname must not be blank"),
            Self::EmptyAddressField { field } => {
                write!(f, "address {field} must not be blank")
            }
            Self::EmptyPoliticalParty => {
                write!(f, "political party must not be blank when present")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable profile identifier.
///
/// The identifier doubles as the storage file stem (`<id>.json`), so values
/// that cannot name a file safely are rejected: empty strings, surrounding
/// whitespace, path separators, NUL bytes, and a leading dot (dot prefixes
/// are reserved for the store's temporary files).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::PaddedId);
        }
        if id.contains(['/', '\\', '\0']) || id.starts_with('.') {
            return Err(UserValidationError::InvalidIdCharacters);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Party a profile declares affiliation with.
///
/// Absence of affiliation is modelled as `Option<PoliticalParty>` on the
/// profile; the value itself is always non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PoliticalParty(String);

impl PoliticalParty {
    /// Validate and construct a [`PoliticalParty`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, UserValidationError> {
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyPoliticalParty);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for PoliticalParty {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PoliticalParty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PoliticalParty> for String {
    fn from(value: PoliticalParty) -> Self {
        value.0
    }
}

impl TryFrom<String> for PoliticalParty {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Residential address grouped by administrative division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressDto", into = "AddressDto")]
pub struct Address {
    provincia: String,
    canton: String,
    distrito: String,
}

impl Address {
    /// Fallible constructor enforcing non-blank divisions.
    pub fn try_new(
        provincia: impl Into<String>,
        canton: impl Into<String>,
        distrito: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self {
            provincia: non_blank_division(provincia.into(), "provincia")?,
            canton: non_blank_division(canton.into(), "canton")?,
            distrito: non_blank_division(distrito.into(), "distrito")?,
        })
    }

    /// Province division.
    pub fn provincia(&self) -> &str {
        self.provincia.as_str()
    }

    /// Canton division.
    pub fn canton(&self) -> &str {
        self.canton.as_str()
    }

    /// District division.
    pub fn distrito(&self) -> &str {
        self.distrito.as_str()
    }
}

fn non_blank_division(
    value: String,
    field: &'static str,
) -> Result<String, UserValidationError> {
    if value.trim().is_empty() {
        return Err(UserValidationError::EmptyAddressField { field });
    }
    Ok(value)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct AddressDto {
    provincia: String,
    canton: String,
    distrito: String,
}

impl From<Address> for AddressDto {
    fn from(value: Address) -> Self {
        let Address {
            provincia,
            canton,
            distrito,
        } = value;
        Self {
            provincia,
            canton,
            distrito,
        }
    }
}

impl TryFrom<AddressDto> for Address {
    type Error = UserValidationError;

    fn try_from(value: AddressDto) -> Result<Self, Self::Error> {
        Address::try_new(value.provincia, value.canton, value.distrito)
    }
}

/// Registered voter profile.
///
/// ## Invariants
/// - `id` is usable as a storage file stem (see [`UserId`]).
/// - `name` and `lastname` are non-blank.
/// - `political_party` is either absent or non-blank; the wire encoding
///   collapses absence into an empty `politicalParty` string.
///
/// The wire encoding keys are `ID`, `name`, `lastname`, `address`, `phones`,
/// and `politicalParty`; `politicalParty` is always emitted, defaulting to
/// the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: String,
    lastname: String,
    address: Address,
    phones: Vec<i64>,
    political_party: Option<PoliticalParty>,
}

impl User {
    /// Fallible constructor enforcing the profile invariants.
    pub fn try_new(
        id: UserId,
        name: impl Into<String>,
        lastname: impl Into<String>,
        address: Address,
        phones: Vec<i64>,
        political_party: Option<PoliticalParty>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        let lastname = lastname.into();
        if lastname.trim().is_empty() {
            return Err(UserValidationError::EmptyLastname);
        }

        Ok(Self {
            id,
            name,
            lastname,
            address,
            phones,
            political_party,
        })
    }

    /// Stable profile identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Given name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name.
    pub fn lastname(&self) -> &str {
        self.lastname.as_str()
    }

    /// Residential address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Contact phone numbers. May be empty.
    pub fn phones(&self) -> &[i64] {
        self.phones.as_slice()
    }

    /// Party affiliation, if any.
    pub fn political_party(&self) -> Option<&PoliticalParty> {
        self.political_party.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct UserDto {
    #[serde(rename = "ID")]
    id: String,
    name: String,
    lastname: String,
    address: AddressDto,
    phones: Vec<i64>,
    #[serde(default)]
    political_party: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            lastname,
            address,
            phones,
            political_party,
        } = value;
        Self {
            id: id.into(),
            name,
            lastname,
            address: address.into(),
            phones,
            political_party: political_party.map(String::from).unwrap_or_default(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            name,
            lastname,
            address,
            phones,
            political_party,
        } = value;

        let id = UserId::new(id)?;
        let address = Address::try_from(address)?;
        let political_party = if political_party.is_empty() {
            None
        } else {
            Some(PoliticalParty::new(political_party)?)
        };

        User::try_new(id, name, lastname, address, phones, political_party)
    }
}
