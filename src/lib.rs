//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione.
/// Ogni path è accettato anche con lo slash finale (`/states/`, `/login/`).
pub fn create_router(state: Arc<AppState>) -> Router {
    // il path va normalizzato prima del routing, quindi fuori dal router delle API
    Router::new().fallback_service(NormalizePath::trim_trailing_slash(api_router(state)))
}

fn api_router(state: Arc<AppState>) -> Router {
    use services::*;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/login", post(login_user))
        .nest("/states", configure_state_routes(state.clone()))
        .nest("/districts", configure_district_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Configura le routes per gli stati (sola lettura + statistiche)
fn configure_state_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_states))
        .route("/{state_id}", get(get_state))
        .route("/{state_id}/stats", get(get_state_stats))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes per la gestione dei distretti
fn configure_district_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", post(create_district))
        .route(
            "/{district_id}",
            get(get_district).put(update_district).delete(delete_district),
        )
        .route("/{district_id}/details", get(get_district_details))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
