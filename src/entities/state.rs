//! State entity - Stato (primo livello della gerarchia regionale), sola lettura

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct State {
    pub state_id: i64,
    pub state_name: String,
    pub population: i64,
}
