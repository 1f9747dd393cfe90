//! StateRepository - Repository in sola lettura per gli stati

use super::{Read, ReadAll};
use crate::entities::State;
use sqlx::{Error, SqlitePool};
use tracing::{debug, instrument};

pub struct StateRepository {
    connection_pool: SqlitePool,
}

impl StateRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

impl ReadAll<State> for StateRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<State>, Error> {
        debug!("Reading all states");
        let states = sqlx::query_as::<_, State>(
            r#"
            SELECT state_id, state_name, population
            FROM state
            ORDER BY state_id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} states", states.len());
        Ok(states)
    }
}

impl Read<State, i64> for StateRepository {
    #[instrument(skip(self), fields(state_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<State>, Error> {
        debug!("Reading state by id");
        let state = sqlx::query_as::<_, State>(
            r#"
            SELECT state_id, state_name, population
            FROM state
            WHERE state_id = ?
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(state)
    }
}
