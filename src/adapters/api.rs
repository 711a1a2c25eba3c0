use crate::domain::model::Facility;
use crate::domain::ports::{ConfigProvider, FacilitySource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Facilities API client. One GET against the configured endpoint returns
/// the full facility list as a JSON array.
pub struct ApiFacilitySource {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl ApiFacilitySource {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.api_endpoint().to_string(),
            api_token: config.api_token().map(str::to_string),
        }
    }
}

#[async_trait]
impl FacilitySource for ApiFacilitySource {
    async fn fetch_facilities(&self) -> Result<Vec<Facility>> {
        tracing::debug!("requesting facilities from {}", self.endpoint);

        let mut request = self.client.get(&self.endpoint);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        tracing::debug!("facilities response status: {}", response.status());

        // A non-success status is "no data yet", not a failure the caller
        // has to deal with.
        if !response.status().is_success() {
            tracing::warn!(
                "facilities endpoint returned {}, treating as empty list",
                response.status()
            );
            return Ok(Vec::new());
        }

        let facilities: Vec<Facility> = response.json().await?;
        tracing::debug!("fetched {} facilities", facilities.len());
        Ok(facilities)
    }
}

/// Handle to an in-flight facilities fetch. Cancelling guarantees the result
/// is discarded: after `cancel`, `join` yields `None` and the fetched list
/// can never reach the view that asked for it.
pub struct FetchHandle {
    task: JoinHandle<Vec<Facility>>,
}

impl FetchHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub async fn join(self) -> Option<Vec<Facility>> {
        self.task.await.ok()
    }
}

/// Starts a fetch in the background. Transport errors degrade to an empty
/// list here so the view never sees a fetch failure.
pub fn spawn_fetch(source: Arc<dyn FacilitySource>) -> FetchHandle {
    let task = tokio::spawn(async move {
        match source.fetch_facilities().await {
            Ok(facilities) => facilities,
            Err(e) => {
                tracing::warn!("facilities fetch failed: {}, treating as empty list", e);
                Vec::new()
            }
        }
    });
    FetchHandle { task }
}
