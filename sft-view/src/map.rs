//! Geolocated subset and display centroid for the vessel map.

use serde::Serialize;
use sft_tracking::{Tracking, VesselStatus};
use sft_utils::dates::display_timestamp;
use sft_utils::text::{spaced, NOT_AVAILABLE};

/// Initial zoom for the map view.
pub const DEFAULT_ZOOM: u8 = 3;

/// Label for vessels without a name.
pub const UNNAMED_VESSEL: &str = "Unnamed";

/// A (lat, lon) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// One map marker with its popup text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub position: LatLon,
    pub name: String,
    pub imo: String,
    pub status: String,
    pub bucket: VesselStatus,
    pub destination: String,
    pub last_ais: String,
}

impl MapMarker {
    fn from_tracking(item: &Tracking, position: LatLon) -> Self {
        Self {
            id: item.id.clone(),
            position,
            name: item
                .vessel_name
                .clone()
                .unwrap_or_else(|| UNNAMED_VESSEL.to_string()),
            imo: item.imo.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            status: item
                .status
                .as_deref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), spaced),
            bucket: item.status_bucket(),
            destination: item
                .location
                .as_deref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), spaced),
            last_ais: display_timestamp(item.last_ais.as_deref()),
        }
    }
}

/// Center point plus one marker per geolocated record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapProjection {
    pub center: LatLon,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// Map view state. `NoData` is a display state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapView {
    NoData,
    Ready(MapProjection),
}

impl MapView {
    pub fn marker_count(&self) -> usize {
        match self {
            MapView::NoData => 0,
            MapView::Ready(projection) => projection.markers.len(),
        }
    }
}

/// Keep records with both coordinates and average them.
///
/// The centroid is a flat mean in degree space, good enough for an initial
/// viewport.
pub fn project(items: &[Tracking]) -> MapView {
    let markers: Vec<MapMarker> = items
        .iter()
        .filter_map(|item| {
            item.position()
                .map(|(lat, lon)| MapMarker::from_tracking(item, LatLon { lat, lon }))
        })
        .collect();

    if markers.is_empty() {
        return MapView::NoData;
    }

    let n = markers.len() as f64;
    let (sum_lat, sum_lon) = markers.iter().fold((0.0, 0.0), |(lat, lon), m| {
        (lat + m.position.lat, lon + m.position.lon)
    });

    MapView::Ready(MapProjection {
        center: LatLon {
            lat: sum_lat / n,
            lon: sum_lon / n,
        },
        zoom: DEFAULT_ZOOM,
        markers,
    })
}
