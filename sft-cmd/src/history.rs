//! `history`: recent snapshots for one IMO, driven through the same
//! select/fetch/receive cycle as the dashboard modal.

use std::io::Write;

use log::warn;
use sft_tracking::client::TrackingClient;
use sft_tracking::config::ApiConfig;
use sft_tracking::Tracking;
use sft_view::rows::HistoryRow;
use sft_view::{Action, DashboardController, Effect, HistoryResult};

pub async fn run_history(config: ApiConfig, imo: &str) -> anyhow::Result<()> {
    let client = TrackingClient::new(config)?;
    let trackings = client.trackings_or_empty().await;
    let row = trackings
        .iter()
        .find(|item| item.history_key() == Some(imo.trim()))
        .cloned()
        .unwrap_or_else(|| {
            warn!("IMO {} is not in the current tracking list", imo);
            Tracking {
                imo: Some(imo.to_string()),
                ..Default::default()
            }
        });

    let mut controller = DashboardController::new(trackings);
    if let Some(Effect::FetchHistory(request)) = controller.dispatch(Action::SelectRow(row)) {
        let result = HistoryResult::from_fetch(client.fetch_history(&request.imo).await);
        controller.dispatch(Action::HistoryResponse {
            token: request.token,
            result,
        });
    }

    let rows = controller.history_rows().unwrap_or_default();
    write_history(std::io::stdout().lock(), &rows)
}

pub fn write_history<W: Write>(mut out: W, rows: &[HistoryRow]) -> anyhow::Result<()> {
    if rows.is_empty() {
        writeln!(out, "No history available for this IMO.")?;
        return Ok(());
    }
    writeln!(out, "{:<20} {:<24} {:>6}", "LAST AIS", "DESTINATION", "KN")?;
    for row in rows {
        writeln!(out, "{:<20} {:<24} {:>6}", row.last_ais, row.destination, row.speed)?;
    }
    Ok(())
}
