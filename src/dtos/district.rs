//! District DTOs - Data Transfer Objects per distretti

use crate::entities::District;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDTO {
    pub district_id: i64,
    pub district_name: String,
    pub state_id: i64,
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

impl From<District> for DistrictDTO {
    fn from(value: District) -> Self {
        Self {
            district_id: value.district_id,
            district_name: value.district_name,
            state_id: value.state_id,
            cases: value.cases,
            cured: value.cured,
            active: value.active,
            deaths: value.deaths,
        }
    }
}

/// Valore massimo di ogni contatore. Lo stesso limite è nel CHECK dello schema,
/// così la somma per stato resta dentro un i64.
pub const MAX_COUNTER: i64 = 1_000_000_000_000;

/// DTO per creare un nuovo distretto (senza district_id).
/// I contatori devono essere interi tra 0 e `MAX_COUNTER`: un float, una stringa
/// o un numero fuori intervallo vengono rifiutati dall'estrattore con 400.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDistrictDTO {
    #[validate(length(min = 1, message = "District name must not be empty"))]
    pub district_name: String,

    #[validate(range(min = 1, message = "State id must be a positive integer"))]
    pub state_id: i64,

    #[validate(range(
        min = 0,
        max = MAX_COUNTER,
        message = "Cases must be an integer between 0 and 1000000000000"
    ))]
    pub cases: i64,

    #[validate(range(
        min = 0,
        max = MAX_COUNTER,
        message = "Cured must be an integer between 0 and 1000000000000"
    ))]
    pub cured: i64,

    #[validate(range(
        min = 0,
        max = MAX_COUNTER,
        message = "Active must be an integer between 0 and 1000000000000"
    ))]
    pub active: i64,

    #[validate(range(
        min = 0,
        max = MAX_COUNTER,
        message = "Deaths must be an integer between 0 and 1000000000000"
    ))]
    pub deaths: i64,
}

/// L'aggiornamento sostituisce tutti e sei i campi: stessa forma della creazione
pub type UpdateDistrictDTO = CreateDistrictDTO;

/// Nome dello stato a cui appartiene un distretto
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDetailsDTO {
    pub state_name: String,
}
