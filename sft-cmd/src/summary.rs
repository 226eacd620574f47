//! `summary`: vessel counts per status bucket with text bars.

use std::io::Write;

use sft_tracking::client::TrackingClient;
use sft_tracking::config::ApiConfig;
use sft_view::{DashboardController, StatusSummary};

use crate::FilterArgs;

const BAR_COLUMNS: f64 = 40.0;

pub async fn run_summary(config: ApiConfig, filters: &FilterArgs) -> anyhow::Result<()> {
    let client = TrackingClient::new(config)?;
    let mut controller = DashboardController::new(client.trackings_or_empty().await);
    for action in filters.actions() {
        controller.dispatch(action);
    }
    write_summary(std::io::stdout().lock(), &controller.view().summary)
}

pub fn write_summary<W: Write>(mut out: W, summary: &StatusSummary) -> anyhow::Result<()> {
    if summary.total == 0 {
        writeln!(out, "No vessels to summarize.")?;
        return Ok(());
    }
    writeln!(out, "Quick summary · {} vessels", summary.total)?;
    for bar in summary.bars() {
        let cells = (bar.width_percent / 100.0 * BAR_COLUMNS).round() as usize;
        writeln!(
            out,
            "{:<10} {:>5}  {}",
            bar.status.label(),
            bar.count,
            "█".repeat(cells)
        )?;
    }
    Ok(())
}
