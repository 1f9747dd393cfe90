//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API, camelCase) dalla rappresentazione interna (entities).

pub mod district;
pub mod state;

// Re-exports per facilitare l'import
pub use district::{
    CreateDistrictDTO, DistrictDTO, DistrictDetailsDTO, MAX_COUNTER, UpdateDistrictDTO,
};
pub use state::{StateDTO, StateStatsDTO};
