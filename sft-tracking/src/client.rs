//! HTTP client for the tracking API.

use log::{error, info, warn};
use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::{Result, TrackingError};
use crate::history::{HistoryResponse, HistorySnapshot};
use crate::tracking::Tracking;

/// Request timeout for native builds. A hung history request surfaces as a
/// failure instead of leaving the selection loading forever.
#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Thin wrapper over `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub struct TrackingClient {
    client: Client,
    config: ApiConfig,
}

impl TrackingClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the current tracking list.
    pub async fn fetch_trackings(&self) -> Result<Vec<Tracking>> {
        let url = self.config.tracking_url();
        info!("Fetching trackings from {}", url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TrackingError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch recent history for one vessel.
    ///
    /// A non-2xx status is [`TrackingError::Status`] whatever the body says;
    /// a 2xx envelope with `ok: false` is [`TrackingError::NotOk`].
    pub async fn fetch_history(&self, imo: &str) -> Result<Vec<HistorySnapshot>> {
        let url = self.config.history_url(imo);
        info!("Fetching history for IMO {} from {}", imo, url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(TrackingError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        let envelope: HistoryResponse = serde_json::from_str(&body)?;
        envelope.into_snapshots().ok_or(TrackingError::NotOk)
    }

    /// [`fetch_trackings`](Self::fetch_trackings), with any failure logged and
    /// replaced by an empty list.
    pub async fn trackings_or_empty(&self) -> Vec<Tracking> {
        match self.fetch_trackings().await {
            Ok(items) => {
                info!("Loaded {} trackings", items.len());
                items
            }
            Err(e) => {
                error!(
                    "Failed to load {}: {}; showing empty dataset",
                    self.config.tracking_url(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// [`fetch_history`](Self::fetch_history), with any failure logged and
    /// replaced by an empty list.
    pub async fn history_or_empty(&self, imo: &str) -> Vec<HistorySnapshot> {
        match self.fetch_history(imo).await {
            Ok(snapshots) => snapshots,
            Err(e) => {
                warn!("No history for IMO {}: {}", imo, e);
                Vec::new()
            }
        }
    }
}
