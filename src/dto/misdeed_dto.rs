use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MisdeedQuery {
    pub limit: Option<i64>,
    pub min_score: Option<i64>,
    pub search: Option<String>,
}
