//! Display rows for the tracking table and the history list.

use serde::Serialize;
use sft_tracking::{HistorySnapshot, Tracking, VesselStatus};
use sft_utils::dates::display_timestamp;
use sft_utils::numbers::display_speed;
use sft_utils::text::{normalize_label, spaced, NOT_AVAILABLE};

use crate::map::UNNAMED_VESSEL;

/// A tracking record with every column pre-formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingRow {
    pub id: String,
    pub name: String,
    pub imo: String,
    pub mmsi: String,
    pub vessel_type: String,
    /// Normalized and upper-cased.
    pub flag: String,
    pub status: String,
    pub bucket: VesselStatus,
    pub destination: String,
    pub eta: String,
    pub speed: String,
    pub last_ais: String,
}

impl From<&Tracking> for TrackingRow {
    fn from(item: &Tracking) -> Self {
        Self {
            id: item.id.clone(),
            name: item
                .vessel_name
                .clone()
                .unwrap_or_else(|| UNNAMED_VESSEL.to_string()),
            imo: or_na(item.imo.as_deref()),
            mmsi: or_na(item.mmsi.as_deref()),
            vessel_type: normalize_label(item.vessel_type.as_deref()),
            flag: normalize_label(item.flag.as_deref()).to_uppercase(),
            status: VesselStatus::display_text(item.status.as_deref()),
            bucket: item.status_bucket(),
            destination: normalize_label(item.location.as_deref()),
            eta: display_timestamp(item.eta.as_deref()),
            speed: display_speed(item.speed),
            last_ais: display_timestamp(item.last_ais.as_deref()),
        }
    }
}

/// One line of a vessel's recent history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub id: String,
    pub last_ais: String,
    pub destination: String,
    pub speed: String,
}

impl From<&HistorySnapshot> for HistoryRow {
    fn from(snapshot: &HistorySnapshot) -> Self {
        Self {
            id: snapshot.id.clone(),
            last_ais: display_timestamp(snapshot.last_ais.as_deref()),
            destination: snapshot
                .location
                .as_deref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), spaced),
            speed: display_speed(snapshot.speed),
        }
    }
}

pub fn tracking_rows(items: &[Tracking]) -> Vec<TrackingRow> {
    items.iter().map(TrackingRow::from).collect()
}

pub fn history_rows(snapshots: &[HistorySnapshot]) -> Vec<HistoryRow> {
    snapshots.iter().map(HistoryRow::from).collect()
}

fn or_na(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_row_formatting() {
        let item = Tracking {
            id: "1".to_string(),
            vessel_name: Some("EVER GIVEN".to_string()),
            imo: Some("9811000".to_string()),
            vessel_type: Some("Container_Ship".to_string()),
            flag: Some("marshall_islands".to_string()),
            status: Some("under_way".to_string()),
            location: Some("US_HOUSTON".to_string()),
            eta: Some("2024-06-04T14:00:00.000Z".to_string()),
            speed: Some(14.25),
            ..Default::default()
        };
        let row = TrackingRow::from(&item);
        assert_eq!(row.name, "EVER GIVEN");
        assert_eq!(row.mmsi, "N/A");
        assert_eq!(row.vessel_type, "Container Ship");
        assert_eq!(row.flag, "MARSHALL ISLANDS");
        assert_eq!(row.status, "under way");
        assert_eq!(row.bucket, VesselStatus::UnderWay);
        assert_eq!(row.destination, "US HOUSTON");
        assert_eq!(row.eta, "2024-06-04 14:00 UTC");
        assert_eq!(row.last_ais, "N/A");
    }

    #[test]
    fn test_empty_record_placeholders() {
        let row = TrackingRow::from(&Tracking::default());
        assert_eq!(row.name, UNNAMED_VESSEL);
        assert_eq!(row.imo, "N/A");
        assert_eq!(row.flag, "N/A");
        assert_eq!(row.status, "unknown");
        assert_eq!(row.bucket, VesselStatus::Unknown);
        assert_eq!(row.speed, "N/A");
    }

    #[test]
    fn test_history_rows_keep_order() {
        let snapshots = vec![
            Tracking {
                id: "h2".to_string(),
                location: Some("SUEZ_CANAL".to_string()),
                speed: Some(8.0),
                ..Default::default()
            },
            Tracking {
                id: "h1".to_string(),
                ..Default::default()
            },
        ];
        let rows = history_rows(&snapshots);
        assert_eq!(rows[0].id, "h2");
        assert_eq!(rows[0].destination, "SUEZ CANAL");
        assert_eq!(rows[0].speed, "8.0");
        assert_eq!(rows[1].destination, "N/A");
    }
}
