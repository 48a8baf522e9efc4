//! Profile API handlers.
//!
//! ```text
//! GET /ping
//! GET /users
//! GET /user/{id}
//! GET /user/{id}/{field}
//! POST /user {"ID":"1","name":"Ana",...}
//! POST /user/{id}/{field} {"phones":[123]}
//! POST /upload/user {"ID":"1","name":"Ana",...}
//! DELETE /user/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

use crate::domain::ports::StoreError;
use crate::domain::{Error, ProfileField, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, immutable_field_error, missing_field_error, parse_field, require_fields,
};

/// Single-message acknowledgement body.
///
/// Example JSON: `{"message":"pong"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Listing body for `GET /users`.
///
/// Example JSON: `{"Users":["702390421"]}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct UsersResponse {
    #[serde(rename = "Users")]
    pub users: Vec<String>,
}

/// Upload acknowledgement pointing at the stored profile.
///
/// Example JSON: `{"URI":"/user/702390421"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct UploadResponse {
    #[serde(rename = "URI")]
    pub uri: String,
}

/// Resolve the `{id}` path segment.
///
/// A syntactically invalid identifier cannot name a stored record, so it
/// reports the same not-found error as an unknown one.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| Error::not_found(format!("no stored profile for {raw}")))
}

/// Map storage failures onto the HTTP error taxonomy.
///
/// Corrupt records and I/O failures reach the client as redacted internal
/// errors; the detail lands in the log.
pub(crate) fn map_store_error(err: StoreError) -> Error {
    match err {
        StoreError::NotFound { .. } => Error::not_found(err.to_string()),
        StoreError::Corrupt { .. } | StoreError::Io { .. } => {
            error!(error = %err, "profile store failure");
            Error::internal(err.to_string())
        }
    }
}

fn field_not_found(id: &UserId, name: &str) -> Error {
    Error::not_found(format!("profile {id} has no field {name}"))
}

/// Check field presence, then decode the body through the typed model.
fn decode_user(body: Value) -> Result<User, Error> {
    let Value::Object(fields) = body else {
        return Err(Error::invalid_request("request body must be a JSON object"));
    };
    require_fields(&fields)?;
    serde_json::from_value(Value::Object(fields))
        .map_err(|err| Error::invalid_request(err.to_string()))
}

/// Connectivity probe.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use padron::inbound::http::profiles::ping;
///
/// let app = App::new().service(ping);
/// ```
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service is reachable", body = MessageResponse)
    ),
    tags = ["health"],
    operation_id = "ping"
)]
#[get("/ping")]
pub async fn ping() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new("pong"))
}

/// List the identifiers of every stored profile.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Stored profile identifiers", body = UsersResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let mut users = state.profiles.list_ids().await.map_err(map_store_error)?;
    users.sort();
    Ok(web::Json(UsersResponse { users }))
}

/// Fetch one profile as its canonical JSON document.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(
        ("id" = String, Path, description = "Profile identifier")
    ),
    responses(
        (status = 200, description = "Stored profile", body = UserSchema),
        (status = 404, description = "Unknown profile", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path.into_inner())?;
    let user = state.profiles.get(&id).await.map_err(map_store_error)?;
    Ok(web::Json(user))
}

/// Fetch a single profile field as a one-key JSON object.
#[utoipa::path(
    get,
    path = "/user/{id}/{field}",
    params(
        ("id" = String, Path, description = "Profile identifier"),
        ("field" = String, Path, description = "Canonical profile field name")
    ),
    responses(
        (status = 200, description = "Single-field object"),
        (status = 404, description = "Unknown profile or field", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "getUserField"
)]
#[get("/user/{id}/{field}")]
pub async fn get_user_field(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<Value>> {
    let (raw_id, raw_field) = path.into_inner();
    let id = parse_user_id(&raw_id)?;
    let record = state.profiles.get_raw(&id).await.map_err(map_store_error)?;

    // Unknown field names and absent keys are indistinguishable to clients.
    let field = raw_field
        .parse::<ProfileField>()
        .map_err(|_| field_not_found(&id, &raw_field))?;
    let value = record
        .field(field)
        .cloned()
        .ok_or_else(|| field_not_found(&id, &raw_field))?;

    let mut body = Map::new();
    body.insert(field.as_str().to_owned(), value);
    Ok(web::Json(Value::Object(body)))
}

/// Create or overwrite a profile from its canonical JSON document.
#[utoipa::path(
    post,
    path = "/user",
    request_body = UserSchema,
    responses(
        (status = 201, description = "Profile stored", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let user = decode_user(payload.into_inner())?;
    state.profiles.put(&user).await.map_err(map_store_error)?;
    Ok(HttpResponse::Created().json(MessageResponse::new("user profile created")))
}

/// Replace one field of a stored profile.
///
/// The patched record is re-validated through the typed model before it is
/// written back, so a patch can never corrupt a stored document.
#[utoipa::path(
    post,
    path = "/user/{id}/{field}",
    params(
        ("id" = String, Path, description = "Profile identifier"),
        ("field" = String, Path, description = "Canonical profile field name")
    ),
    responses(
        (status = 200, description = "Profile updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown profile", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "patchUserField"
)]
#[post("/user/{id}/{field}")]
pub async fn patch_user_field(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<MessageResponse>> {
    let (raw_id, raw_field) = path.into_inner();
    let id = parse_user_id(&raw_id)?;
    let record = state.profiles.get_raw(&id).await.map_err(map_store_error)?;
    let field = parse_field(&raw_field)?;

    let Value::Object(body) = payload.into_inner() else {
        return Err(Error::invalid_request("request body must be a JSON object"));
    };
    let Some(value) = body.get(field.as_str()).cloned() else {
        return Err(missing_field_error(FieldName::new(field.as_str())));
    };

    let patched = record
        .with_field(field, value)
        .map_err(|_| immutable_field_error(FieldName::new(ProfileField::Id.as_str())))?;
    let user: User = serde_json::from_value(patched.into_value())
        .map_err(|err| Error::invalid_request(err.to_string()))?;
    state.profiles.put(&user).await.map_err(map_store_error)?;
    Ok(web::Json(MessageResponse::new("user profile updated")))
}

/// Import a profile document and answer with its resource URI.
#[utoipa::path(
    post,
    path = "/upload/user",
    request_body = UserSchema,
    responses(
        (status = 201, description = "Profile stored", body = UploadResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "uploadUser"
)]
#[post("/upload/user")]
pub async fn upload_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let user = decode_user(payload.into_inner())?;
    state.profiles.put(&user).await.map_err(map_store_error)?;
    let uri = format!("/user/{}", user.id());
    Ok(HttpResponse::Created().json(UploadResponse { uri }))
}

/// Delete a stored profile.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(
        ("id" = String, Path, description = "Profile identifier")
    ),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 404, description = "Unknown profile", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["profiles"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner())?;
    state.profiles.delete(&id).await.map_err(map_store_error)?;
    Ok(HttpResponse::NoContent().finish())
}
