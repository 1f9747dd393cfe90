//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Tutte le query passano i valori con i placeholder `?` e `.bind(...)`:
   sqlx::query_as::<_, District>("SELECT ... FROM district WHERE district_id = ?")
       .bind(id)
       .fetch_optional(&self.connection_pool)
       .await?;
   Mai costruire SQL con format!() o concatenando input del client, neanche per i
   numeri: i valori legati non possono alterare la struttura della query.

   Si usano le funzioni runtime (query / query_as / query_scalar) invece delle macro
   query! / query_as!, così la compilazione non richiede un database raggiungibile.

   Number of Rows   Method to Call           Returns
   None             .execute(...).await      sqlx::Result<SqliteQueryResult>   INSERT/UPDATE/DELETE
   Zero or One      .fetch_optional(...)     sqlx::Result<Option<T>>
   Exactly One      .fetch_one(...)          sqlx::Result<T>                  aggregati (SUM)
   Multiple         .fetch_all(...)          sqlx::Result<Vec<T>>
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod district;
pub mod state;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use district::DistrictRepository;
pub use state::StateRepository;
pub use user::UserRepository;
