use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use thiserror::Error;

use crate::models::Animal;

/// Errors that can occur when reading the open-data feed
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Feed returned error: {0}")]
    ApiError(String),

    #[error("Invalid feed payload: {0}")]
    InvalidResponse(String),
}

const FEED_CACHE_KEY: &str = "animal-feed";

/// Client for the government shelter-animal open-data feed
///
/// Fetches the full record set and keeps the decoded result in a
/// short-lived in-memory cache, so a burst of requests hits the feed once
/// per TTL window. Freshness policy lives entirely here; callers just see
/// the current pool.
pub struct DirectoryClient {
    feed_url: String,
    client: Client,
    cache: Cache<&'static str, Arc<Vec<Animal>>>,
}

impl DirectoryClient {
    pub fn new(feed_url: String, timeout_secs: u64, cache_ttl_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(cache_ttl_secs))
            .build();

        Self {
            feed_url,
            client,
            cache,
        }
    }

    /// Fetch the current animal pool, serving from cache within the TTL
    pub async fn fetch_animals(&self) -> Result<Arc<Vec<Animal>>, DirectoryError> {
        if let Some(animals) = self.cache.get(FEED_CACHE_KEY).await {
            tracing::trace!("Feed cache hit ({} records)", animals.len());
            return Ok(animals);
        }

        tracing::debug!("Fetching animal feed from {}", self.feed_url);

        let response = self.client.get(&self.feed_url).send().await?;

        if !response.status().is_success() {
            return Err(DirectoryError::ApiError(format!(
                "Feed request failed: {}",
                response.status()
            )));
        }

        let animals: Vec<Animal> = response.json().await.map_err(|e| {
            DirectoryError::InvalidResponse(format!("Failed to decode feed: {}", e))
        })?;

        let animals = Arc::new(animals);
        self.cache
            .insert(FEED_CACHE_KEY, Arc::clone(&animals))
            .await;

        tracing::debug!("Feed refreshed ({} records)", animals.len());

        Ok(animals)
    }
}
