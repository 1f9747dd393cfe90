//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene i repository costruiti sul pool di connessioni iniettato dall'entry point
//! e le impostazioni JWT. Nessuno stato mutabile condiviso tra le richieste.

use crate::repositories::{DistrictRepository, StateRepository, UserRepository};
use chrono::Duration;
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la lettura delle credenziali utente
    pub user: UserRepository,

    /// Repository per gli stati (sola lettura)
    pub state: StateRepository,

    /// Repository per i distretti e le statistiche aggregate
    pub district: DistrictRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,

    /// Durata dei token emessi, `None` = nessuna scadenza
    pub token_ttl: Option<Duration>,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    /// * `jwt_secret` - Chiave segreta per la firma dei token JWT
    pub fn new(pool: SqlitePool, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            state: StateRepository::new(pool.clone()),
            district: DistrictRepository::new(pool),
            jwt_secret,
            token_ttl: None,
        }
    }

    /// Imposta la durata dei token emessi al login
    pub fn with_token_ttl(mut self, token_ttl: Option<Duration>) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}
