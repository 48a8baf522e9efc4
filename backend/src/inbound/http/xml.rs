//! XML projection endpoints.
//!
//! ```text
//! GET /xml/user/{id}
//! GET /xml/users
//! ```
//!
//! Both endpoints render through the explicit serializer in
//! [`crate::domain::xml`]; the aggregate view is all-or-nothing, so one
//! unreadable record aborts the whole document.

use actix_web::{HttpResponse, get, web};

use crate::domain::{Error, UserId, xml};
use crate::inbound::http::ApiResult;
use crate::inbound::http::profiles::{map_store_error, parse_user_id};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

const XML_MIME: &str = "application/xml";

/// Render one profile as an XML document.
#[utoipa::path(
    get,
    path = "/xml/user/{id}",
    params(
        ("id" = String, Path, description = "Profile identifier")
    ),
    responses(
        (status = 200, description = "Profile document", content_type = "application/xml"),
        (status = 404, description = "Unknown profile", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["xml"],
    operation_id = "showUserXml"
)]
#[get("/xml/user/{id}")]
pub async fn show_user_xml(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner())?;
    let user = state.profiles.get(&id).await.map_err(map_store_error)?;
    Ok(HttpResponse::Ok()
        .content_type(XML_MIME)
        .body(xml::user_document(&user)))
}

/// Render every profile, plus the party tallies, as one XML document.
#[utoipa::path(
    get,
    path = "/xml/users",
    responses(
        (status = 200, description = "Aggregate document", content_type = "application/xml"),
        (status = 404, description = "A profile vanished mid-render", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["xml"],
    operation_id = "showUsersXml"
)]
#[get("/xml/users")]
pub async fn show_users_xml(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let mut ids = state.profiles.list_ids().await.map_err(map_store_error)?;
    ids.sort();

    let mut users = Vec::with_capacity(ids.len());
    for id in ids {
        let id = UserId::new(&id)
            .map_err(|err| Error::internal(format!("stored id {id} is unusable: {err}")))?;
        users.push(state.profiles.get(&id).await.map_err(map_store_error)?);
    }

    Ok(HttpResponse::Ok()
        .content_type(XML_MIME)
        .body(xml::users_document(&users)))
}
