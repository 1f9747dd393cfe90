//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod district;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::login_user;
pub use district::{
    create_district, delete_district, get_district, get_district_details, update_district,
};
pub use state::{get_state, get_state_stats, list_states};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
