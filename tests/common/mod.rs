#![allow(dead_code)]

use axum_test::TestServer;
use axum_test::http::HeaderName;
use covid_portal::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool SQLite (database isolato creato da `#[sqlx::test]`)
///
/// # Returns
/// Arc<AppState> configurato con il JWT secret di test e token senza scadenza
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, TEST_JWT_SECRET.to_string()))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = covid_portal::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Crea stato e server in un colpo solo
pub fn setup(pool: SqlitePool) -> TestServer {
    create_test_server(create_test_state(pool))
}

/// Genera un JWT token per testing, con il solo username come claim
pub fn create_test_jwt(username: &str, jwt_secret: &str) -> String {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        username: String,
    }

    let claims = Claims {
        username: username.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Nome dell'header di autenticazione
pub fn authorization() -> HeaderName {
    HeaderName::from_static("authorization")
}

/// Valore dell'header Authorization con un token valido per "alice"
pub fn auth_header() -> String {
    format!("Bearer {}", create_test_jwt("alice", TEST_JWT_SECRET))
}

/// Inserisce un utente con password hashata (costo bcrypt minimo per velocità)
pub async fn seed_user(pool: &SqlitePool, username: &str, password: &str) -> sqlx::Result<()> {
    let hash = bcrypt::hash(password, 4).expect("Failed to hash password");
    sqlx::query(r#"INSERT INTO "user" (username, password) VALUES (?, ?)"#)
        .bind(username)
        .bind(hash)
        .execute(pool)
        .await?;
    Ok(())
}
