//! Souk JSON API Server

use std::process;

use salvo::{
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
};
use tracing::{error, info};

use souk_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod cart;
mod categories;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod identity;
mod observability;
mod orders;
mod products;
mod retailer;
mod router;
mod services;
mod shutdown;
mod state;
mod stores;
#[cfg(test)]
mod test_helpers;

/// Souk JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    if let Err(init_error) = observability::init_logging(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, eprintln is all that is left"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::seeded().await {
        Ok(app) => app,
        Err(seed_error) => {
            error!("failed to seed demo data: {seed_error}");

            process::exit(1);
        }
    };

    let router = router::root_router(State::from_app_context(app, config.identity.defaults()));

    let doc = OpenApi::new("Souk API", "0.3.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router).catcher(errors::catcher());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;
}
