use serde::{Deserialize, Serialize};

use crate::tracking::Tracking;

/// A past observation of one vessel. Same shape as a current record.
pub type HistorySnapshot = Tracking;

/// Envelope returned by `GET /tracking/history/{imo}`.
///
/// Snapshots are kept in the order the API returns them (most recent first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub ok: bool,
    #[serde(default)]
    pub data: Vec<HistorySnapshot>,
}

impl HistoryResponse {
    /// Snapshots when `ok`, otherwise `None`.
    pub fn into_snapshots(self) -> Option<Vec<HistorySnapshot>> {
        self.ok.then_some(self.data)
    }
}
