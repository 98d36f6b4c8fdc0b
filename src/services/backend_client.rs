use reqwest::Client;
use serde_json::Value;

use crate::error::Result;

/// HTTP client for the external Misdeed backend. Responses are relayed as
/// raw JSON: the backend owns the record shapes, this tier only forwards.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn list_jobs(&self, limit: i64, category: Option<&str>) -> Result<Value> {
        let url = format!("{}/api/jobs", self.base_url);
        let mut request = self.client.get(&url).query(&[("limit", limit)]);
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }
        let response = request.send().await?.error_for_status()?;
        let data = response.json::<Value>().await?;
        Ok(data)
    }

    /// Forwards a creation body verbatim and relays the backend's reply.
    pub async fn create_job(&self, body: &Value) -> Result<Value> {
        let url = format!("{}/api/jobs", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        let data = response.json::<Value>().await?;
        Ok(data)
    }

    /// Plain listing, or the backend's search endpoint when a query is given.
    pub async fn list_misdeeds(
        &self,
        limit: i64,
        min_score: i64,
        search: Option<&str>,
    ) -> Result<Value> {
        let mut request = match search.filter(|q| !q.is_empty()) {
            Some(query) => {
                let url = format!("{}/api/misdeeds/search", self.base_url);
                self.client.get(&url).query(&[("q", query)])
            }
            None => {
                let url = format!("{}/api/misdeeds", self.base_url);
                self.client.get(&url)
            }
        };
        request = request.query(&[("limit", limit), ("min_score", min_score)]);
        let response = request.send().await?.error_for_status()?;
        let data = response.json::<Value>().await?;
        Ok(data)
    }
}
