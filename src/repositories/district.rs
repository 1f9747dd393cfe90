//! DistrictRepository - Repository per la gestione dei distretti e delle statistiche per stato

use super::{Create, Delete, Read, Update};
use crate::dtos::{CreateDistrictDTO, UpdateDistrictDTO};
use crate::entities::{District, DistrictTotals};
use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument, warn};

pub struct DistrictRepository {
    connection_pool: SqlitePool,
}

impl DistrictRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Somma cases/cured/active/deaths su tutti i distretti dello stato.
    /// SUM su un insieme vuoto restituisce NULL: COALESCE lo riporta a 0.
    #[instrument(skip(self), fields(state_id = %state_id))]
    pub async fn stats_for_state(&self, state_id: &i64) -> Result<DistrictTotals, Error> {
        debug!("Aggregating district counters for state");
        let totals = sqlx::query_as::<_, DistrictTotals>(
            r#"
            SELECT
                COALESCE(SUM(cases), 0)  AS total_cases,
                COALESCE(SUM(cured), 0)  AS total_cured,
                COALESCE(SUM(active), 0) AS total_active,
                COALESCE(SUM(deaths), 0) AS total_deaths
            FROM district
            WHERE state_id = ?
            "#,
        )
        .bind(*state_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(totals)
    }
}

impl Create<District, CreateDistrictDTO> for DistrictRepository {
    #[instrument(skip(self, data), fields(state_id = %data.state_id))]
    async fn create(&self, data: &CreateDistrictDTO) -> Result<District, Error> {
        debug!("Creating new district");
        let result = sqlx::query(
            r#"
            INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.district_name)
        .bind(data.state_id)
        .bind(data.cases)
        .bind(data.cured)
        .bind(data.active)
        .bind(data.deaths)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid();

        info!("District created with id {}", new_id);

        Ok(District {
            district_id: new_id,
            district_name: data.district_name.clone(),
            state_id: data.state_id,
            cases: data.cases,
            cured: data.cured,
            active: data.active,
            deaths: data.deaths,
        })
    }
}

impl Read<District, i64> for DistrictRepository {
    #[instrument(skip(self), fields(district_id = %id))]
    async fn read(&self, id: &i64) -> Result<Option<District>, Error> {
        debug!("Reading district by id");
        let district = sqlx::query_as::<_, District>(
            r#"
            SELECT district_id, district_name, state_id, cases, cured, active, deaths
            FROM district
            WHERE district_id = ?
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await?;

        if district.is_none() {
            debug!("District not found");
        }

        Ok(district)
    }
}

impl Update<District, UpdateDistrictDTO, i64> for DistrictRepository {
    /// Sostituzione completa dei sei campi in un'unica istruzione
    #[instrument(skip(self, data), fields(district_id = %id))]
    async fn update(&self, id: &i64, data: &UpdateDistrictDTO) -> Result<District, Error> {
        debug!("Updating district");
        let result = sqlx::query(
            r#"
            UPDATE district
            SET district_name = ?,
                state_id = ?,
                cases = ?,
                cured = ?,
                active = ?,
                deaths = ?
            WHERE district_id = ?
            "#,
        )
        .bind(&data.district_name)
        .bind(data.state_id)
        .bind(data.cases)
        .bind(data.cured)
        .bind(data.active)
        .bind(data.deaths)
        .bind(*id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            warn!("No district to update");
            return Err(Error::RowNotFound);
        }

        info!("District updated");

        Ok(District {
            district_id: *id,
            district_name: data.district_name.clone(),
            state_id: data.state_id,
            cases: data.cases,
            cured: data.cured,
            active: data.active,
            deaths: data.deaths,
        })
    }
}

impl Delete<i64> for DistrictRepository {
    #[instrument(skip(self), fields(district_id = %id))]
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        debug!("Deleting district");
        let result = sqlx::query("DELETE FROM district WHERE district_id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        // idempotente: nessun errore se la riga non c'era
        debug!("Deleted {} rows", result.rows_affected());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, state_id: i64, cases: i64) -> CreateDistrictDTO {
        CreateDistrictDTO {
            district_name: name.to_string(),
            state_id,
            cases,
            cured: cases / 2,
            active: cases / 4,
            deaths: 1,
        }
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("states", "districts")))]
    async fn test_create_then_read(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DistrictRepository::new(pool);
        let data = payload("Kamrup", 4, 40);

        let created = repo.create(&data).await?;
        let read = repo.read(&created.district_id).await?.expect("district should exist");

        assert_eq!(read, created);
        assert_eq!(read.district_name, "Kamrup");
        assert_eq!(read.state_id, 4);
        assert_eq!(read.cases, 40);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("states", "districts")))]
    async fn test_update_replaces_all_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DistrictRepository::new(pool);
        let data = payload("Renamed", 2, 77);

        repo.update(&1, &data).await?;
        let read = repo.read(&1).await?.expect("district should exist");

        assert_eq!(read.district_name, "Renamed");
        assert_eq!(read.state_id, 2);
        assert_eq!(read.cases, 77);
        assert_eq!(read.cured, 38);
        assert_eq!(read.active, 19);
        assert_eq!(read.deaths, 1);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("states", "districts")))]
    async fn test_update_missing_is_row_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DistrictRepository::new(pool);

        let result = repo.update(&999, &payload("Ghost", 1, 1)).await;

        assert!(matches!(result, Err(Error::RowNotFound)));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("states", "districts")))]
    async fn test_delete_is_idempotent(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DistrictRepository::new(pool);

        repo.delete(&2).await?;
        assert!(repo.read(&2).await?.is_none());
        repo.delete(&2).await?;
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("states", "districts")))]
    async fn test_stats_sum_districts_of_state(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DistrictRepository::new(pool);

        let totals = repo.stats_for_state(&1).await?;

        assert_eq!(
            totals,
            DistrictTotals {
                total_cases: 15,
                total_cured: 9,
                total_active: 4,
                total_deaths: 2,
            }
        );
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("states", "districts")))]
    async fn test_stats_for_state_without_districts_are_zero(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DistrictRepository::new(pool);

        let totals = repo.stats_for_state(&4).await?;

        assert_eq!(totals, DistrictTotals::default());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("states")))]
    async fn test_name_with_sql_is_stored_verbatim(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = DistrictRepository::new(pool);
        let name = "O'Brien; DROP TABLE district; --\n\t\"";

        let created = repo.create(&payload(name, 1, 3)).await?;
        let read = repo.read(&created.district_id).await?.expect("district should exist");

        assert_eq!(read.district_name, name);
        assert_eq!(repo.stats_for_state(&1).await?.total_cases, 3);
        Ok(())
    }
}
