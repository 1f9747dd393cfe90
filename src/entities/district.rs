//! District entity - Distretto con i contatori dei casi, appartiene a un solo stato

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct District {
    pub district_id: i64,
    pub district_name: String,
    pub state_id: i64, // FK -> state.state_id
    pub cases: i64,
    pub cured: i64,
    pub active: i64,
    pub deaths: i64,
}

/// Somme dei contatori su tutti i distretti di uno stato
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct DistrictTotals {
    pub total_cases: i64,
    pub total_cured: i64,
    pub total_active: i64,
    pub total_deaths: i64,
}
