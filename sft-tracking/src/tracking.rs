use serde::{Deserialize, Serialize};

use crate::status::VesselStatus;

/// One vessel observation as served by `GET /tracking`.
///
/// Every field except `id` is optional; the scraper fills what VesselFinder
/// exposes. Free-text fields may contain underscore-separated tokens
/// (`"US_GULF_PORT"`) and are normalized only at display/compare time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracking {
    /// Document id, unique per observation.
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub vessel_name: Option<String>,
    /// IMO number, the history lookup key.
    #[serde(default)]
    pub imo: Option<String>,
    #[serde(default)]
    pub mmsi: Option<String>,
    #[serde(rename = "type", default)]
    pub vessel_type: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Estimated time of arrival, ISO-8601.
    #[serde(default)]
    pub eta: Option<String>,
    /// Destination.
    #[serde(default)]
    pub location: Option<String>,
    /// Speed over ground in knots.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Timestamp of the most recent AIS report, ISO-8601.
    #[serde(rename = "lastAIS", default)]
    pub last_ais: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Tracking {
    /// Both coordinates present. A record with only one of them is not
    /// placed on the map.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn is_geolocated(&self) -> bool {
        self.position().is_some()
    }

    /// IMO number if present and non-empty.
    pub fn history_key(&self) -> Option<&str> {
        self.imo.as_deref().filter(|imo| !imo.trim().is_empty())
    }

    pub fn status_bucket(&self) -> VesselStatus {
        VesselStatus::classify(self.status.as_deref())
    }
}
