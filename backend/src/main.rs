//! Backend entry-point: wires REST endpoints, XML reports, and OpenAPI docs.

mod server;

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use padron::inbound::http::health::HealthState;
use server::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("PADRON_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid PADRON_ADDR: {e}")))?;
    let storage_root =
        PathBuf::from(env::var("PADRON_STORE_DIR").unwrap_or_else(|_| "UserProfiles".into()));

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, storage_root);
    server::create_server(health_state, config)?.await
}
