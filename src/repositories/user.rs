//! UserRepository - Lettura delle credenziali utente

use crate::entities::User;
use sqlx::{Error, SqlitePool};
use tracing::{debug, instrument};

pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> UserRepository {
        Self { connection_pool }
    }

    /// Find user by exact username match (username is unique)
    #[instrument(skip(self), fields(username = %username))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        debug!("Looking up user credentials");
        let user = sqlx::query_as::<_, User>(
            r#"SELECT username, password FROM "user" WHERE username = ?"#,
        )
        .bind(username)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}
