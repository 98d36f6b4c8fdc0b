use serde::{Deserialize, Serialize};

/// A flagged job posting scraped and scored by the external backend.
/// Read-only here: the scoring algorithm is the backend's contract, the web
/// tier only relays and displays it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MisdeedRecord {
    pub id: i64,
    pub job_title: String,
    pub company_name: String,
    pub description: String,
    pub location: String,
    pub original_url: String,
    pub source_platform: String,
    pub scam_score: i32,
    pub scam_reasons: Vec<String>,
    pub date_scraped: String,
}
