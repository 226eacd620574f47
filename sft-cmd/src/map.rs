//! `map`: centroid and markers of every positioned vessel.

use std::io::Write;

use sft_tracking::client::TrackingClient;
use sft_tracking::config::ApiConfig;
use sft_view::{DashboardController, MapView};

pub async fn run_map(config: ApiConfig) -> anyhow::Result<()> {
    let client = TrackingClient::new(config)?;
    let controller = DashboardController::new(client.trackings_or_empty().await);
    write_map(std::io::stdout().lock(), &controller.map())
}

pub fn write_map<W: Write>(mut out: W, view: &MapView) -> anyhow::Result<()> {
    let projection = match view {
        MapView::NoData => {
            writeln!(out, "No vessels with coordinates to show on the map.")?;
            return Ok(());
        }
        MapView::Ready(projection) => projection,
    };

    writeln!(out, "Vessels with position: {}", projection.markers.len())?;
    writeln!(
        out,
        "Center: {:.4}, {:.4} (zoom {})",
        projection.center.lat, projection.center.lon, projection.zoom
    )?;
    for marker in &projection.markers {
        writeln!(
            out,
            "{:>9.4} {:>10.4}  {} (IMO {}) {} -> {}, last AIS {}",
            marker.position.lat,
            marker.position.lon,
            marker.name,
            marker.imo,
            marker.status,
            marker.destination,
            marker.last_ais
        )?;
    }
    Ok(())
}
