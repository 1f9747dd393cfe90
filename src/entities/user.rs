//! User entity - Credenziali utente con metodi per gestione password

use bcrypt::verify;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    /// Hash bcrypt, mai la password in chiaro
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Verify if target_password matches the stored hashed password.
    /// An unparsable stored hash counts as a mismatch.
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }
}
