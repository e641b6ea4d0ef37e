//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store backend selection and the CRUD service layer
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and the pre-store presence checks
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub async fn build_app(config: &Config) -> Router {
    let services = Arc::new(services::build_services(config).await);
    build_app_with_services(config, services)
}

/// Same router, with the service layer supplied by the caller (tests inject
/// store doubles through here).
pub fn build_app_with_services(config: &Config, services: Arc<services::AppServices>) -> Router {
    // Anything that is not an API route falls through to the static dir;
    // `/` resolves to its `index.html`.
    let static_files = ServeDir::new(&config.static_dir);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/menu", routes::menu::router())
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(services)),
        )
}
