//! State DTOs - Data Transfer Objects per stati e statistiche aggregate

use crate::entities::{DistrictTotals, State};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateDTO {
    pub state_id: i64,
    pub state_name: String,
    pub population: i64,
}

impl From<State> for StateDTO {
    fn from(value: State) -> Self {
        Self {
            state_id: value.state_id,
            state_name: value.state_name,
            population: value.population,
        }
    }
}

/// Totali dei contatori di uno stato: `{totalCases, totalCured, totalActive, totalDeaths}`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateStatsDTO {
    pub total_cases: i64,
    pub total_cured: i64,
    pub total_active: i64,
    pub total_deaths: i64,
}

impl From<DistrictTotals> for StateStatsDTO {
    fn from(value: DistrictTotals) -> Self {
        Self {
            total_cases: value.total_cases,
            total_cured: value.total_cured,
            total_active: value.total_active,
            total_deaths: value.total_deaths,
        }
    }
}
