//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use padron::Trace;
#[cfg(debug_assertions)]
use padron::doc::ApiDoc;
use padron::inbound::http::health::{HealthState, live, ready};
use padron::inbound::http::profiles::{
    create_user, delete_user, get_user, get_user_field, list_users, patch_user_field, ping,
    upload_user,
};
use padron::inbound::http::state::HttpState;
use padron::inbound::http::xml::{show_user_xml, show_users_xml};
use padron::outbound::persistence::DirProfileStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ping)
        .service(list_users)
        .service(create_user)
        .service(upload_user)
        .service(get_user)
        .service(delete_user)
        .service(get_user_field)
        .service(patch_user_field)
        .service(show_user_xml)
        .service(show_users_xml)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Opens the profile storage directory (creating it when missing), wires the
/// HTTP state around it, and registers every route behind the trace
/// middleware.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing the bind address and storage root.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the storage root cannot be opened or
/// binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        storage_root,
    } = config;

    let store = DirProfileStore::open(&storage_root)
        .map_err(|e| std::io::Error::other(format!("profile storage unavailable: {e}")))?;
    let http_state = web::Data::new(HttpState::new(Arc::new(store)));

    let server_health_state = health_state.clone();
    let server =
        HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
            .bind(bind_addr)?
            .run();

    health_state.mark_ready();
    Ok(server)
}
