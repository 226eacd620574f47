//! `list`: the filtered tracking table.

use std::io::Write;

use log::info;
use sft_tracking::client::TrackingClient;
use sft_tracking::config::ApiConfig;
use sft_view::rows::TrackingRow;
use sft_view::DashboardController;

use crate::FilterArgs;

const CSV_HEADERS: [&str; 12] = [
    "id",
    "vessel",
    "imo",
    "mmsi",
    "type",
    "flag",
    "status",
    "destination",
    "eta",
    "speed_kn",
    "last_ais",
    "bucket",
];

pub async fn run_list(config: ApiConfig, filters: &FilterArgs, csv: bool) -> anyhow::Result<()> {
    let client = TrackingClient::new(config)?;
    let mut controller = DashboardController::new(client.trackings_or_empty().await);
    for action in filters.actions() {
        controller.dispatch(action);
    }

    let view = controller.view();
    info!(
        "{} of {} trackings match the filters",
        view.rows.len(),
        controller.dataset().len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if csv {
        write_csv(&mut out, &view.rows)?;
    } else {
        write_table(&mut out, &view.rows)?;
    }
    Ok(())
}

/// Write rows as CSV with a header line.
pub fn write_csv<W: Write>(out: W, rows: &[TrackingRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.id.as_str(),
            &row.name,
            &row.imo,
            &row.mmsi,
            &row.vessel_type,
            &row.flag,
            &row.status,
            &row.destination,
            &row.eta,
            &row.speed,
            &row.last_ais,
            row.bucket.key(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows as a fixed-width text table.
pub fn write_table<W: Write>(mut out: W, rows: &[TrackingRow]) -> anyhow::Result<()> {
    if rows.is_empty() {
        writeln!(out, "No vessels match the selected filters.")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<24} {:<10} {:<18} {:<12} {:<20} {:<20} {:>6} {:<20}",
        "VESSEL", "IMO", "FLAG", "STATUS", "DESTINATION", "ETA", "KN", "LAST AIS"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<24} {:<10} {:<18} {:<12} {:<20} {:<20} {:>6} {:<20}",
            truncate(&row.name, 24),
            truncate(&row.imo, 10),
            truncate(&row.flag, 18),
            truncate(&row.status, 12),
            truncate(&row.destination, 20),
            row.eta,
            row.speed,
            row.last_ais
        )?;
    }
    Ok(())
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
