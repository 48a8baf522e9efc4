//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested profile or field does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: lastname")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(rename = "traceId", example = "0f8e2c2a-7c8d-4f0b-9b46-111111111111")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Address`].
///
/// Costa Rican territorial division of a residential address.
#[derive(ToSchema)]
#[schema(as = crate::domain::Address)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AddressSchema {
    /// Province division.
    #[schema(example = "Limón")]
    provincia: String,
    /// Canton division.
    #[schema(example = "Limón")]
    canton: String,
    /// District division.
    #[schema(example = "Limón")]
    distrito: String,
}

/// OpenAPI schema for [`crate::domain::User`].
///
/// Canonical wire encoding of one stored voter profile.
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable profile identifier; doubles as the storage key.
    #[schema(rename = "ID", example = "702390421")]
    id: String,
    /// Given name.
    #[schema(example = "Javier")]
    name: String,
    /// Family name.
    #[schema(example = "Rivas")]
    lastname: String,
    /// Residential address.
    address: AddressSchema,
    /// Contact phone numbers.
    #[schema(example = json!([84139034, 27585124]))]
    phones: Vec<i64>,
    /// Party affiliation; the empty string means unaffiliated.
    #[schema(rename = "politicalParty", example = "Avance")]
    political_party: Option<String>,
}
