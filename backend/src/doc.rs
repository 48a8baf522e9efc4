//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (profiles, XML
//!   reports, health)
//! - **Schemas**: Domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`UserSchema`], [`AddressSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to the utoipa framework, plus the response
//!   envelopes returned by the profile handlers
//!
//! The generated specification is used by Swagger UI in debug builds.

use crate::inbound::http::profiles::{MessageResponse, UploadResponse, UsersResponse};
use crate::inbound::http::schemas::{AddressSchema, ErrorCodeSchema, ErrorSchema, UserSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Padron backend API",
        description = "HTTP interface for user profile storage, XML election reports, and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::profiles::ping,
        crate::inbound::http::profiles::list_users,
        crate::inbound::http::profiles::get_user,
        crate::inbound::http::profiles::get_user_field,
        crate::inbound::http::profiles::create_user,
        crate::inbound::http::profiles::patch_user_field,
        crate::inbound::http::profiles::upload_user,
        crate::inbound::http::profiles::delete_user,
        crate::inbound::http::xml::show_user_xml,
        crate::inbound::http::xml::show_users_xml,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        AddressSchema,
        ErrorSchema,
        ErrorCodeSchema,
        MessageResponse,
        UsersResponse,
        UploadResponse
    )),
    tags(
        (name = "profiles", description = "Operations on stored user profiles"),
        (name = "xml", description = "XML renditions of profiles and election tallies"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure and path registration.

    use super::*;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const USER_SCHEMA_NAME: &str = "crate.domain.User";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn openapi_user_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get(USER_SCHEMA_NAME).expect("User schema");

        assert_object_schema_has_field(user_schema, "ID");
        assert_object_schema_has_field(user_schema, "lastname");
        assert_object_schema_has_field(user_schema, "politicalParty");
    }

    #[test]
    fn openapi_registers_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for route in [
            "/ping",
            "/users",
            "/user",
            "/user/{id}",
            "/user/{id}/{field}",
            "/upload/user",
            "/xml/user/{id}",
            "/xml/users",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(route), "missing path '{route}'");
        }
    }
}
