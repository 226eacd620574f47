//! Super Freight Tracker dashboard
//!
//! Read-only view over vessel tracking records scraped from VesselFinder by
//! an external ETL pipeline. Shows a map of positioned vessels, a filterable
//! table with a per-status summary, and a history drill-down per vessel.
//!
//! Data flow:
//! 1. The API base URL is fixed at build time from `SFT_API_URL`.
//! 2. On mount, `GET {base}/tracking` loads the dataset (empty on failure).
//! 3. Filter changes recompute the table and summary synchronously.
//! 4. Clicking a row fetches `GET {base}/tracking/history/{imo}?limit=15`;
//!    only the response for the latest selection is shown.

use dioxus::prelude::*;
use sft_dashboard_ui::components::{
    FilterBar, HistoryModal, LoadingSpinner, SectionHeader, StatusSummary, TrackingTable,
    VesselMap,
};
use sft_dashboard_ui::state::AppState;
use sft_tracking::config::ApiConfig;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sft-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| {
        let config = ApiConfig::resolve(option_env!("SFT_API_URL"));
        log::info!("Dashboard requesting data from {}", config.tracking_url());
        AppState::new(config)
    });

    // Load the dataset once on mount
    use_hook(move || state.load_dataset());

    rsx! {
        main {
            style: "min-height: 100vh; background: #020617; color: #F8FAFC; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            div {
                style: "max-width: 1152px; margin: 0 auto; padding: 40px 16px; display: flex; flex-direction: column; gap: 32px;",
                header {
                    h1 { style: "margin: 0; font-size: 30px; font-weight: 700;", "Super Freight Tracker" }
                    p {
                        style: "margin: 8px 0 0 0; font-size: 14px; color: #94A3B8;",
                        "Vessels scraped from VesselFinder by the tracking ETL pipeline."
                    }
                }

                if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    VesselMap {}

                    div {
                        style: "border: 1px solid #1E293B; border-radius: 8px; background: rgba(15,23,42,0.9);",
                        SectionHeader {
                            title: "Monitored vessels".to_string(),
                            subtitle: "Latest tracking per vessel.".to_string(),
                        }
                        div {
                            style: "padding: 12px 16px; display: flex; flex-direction: column; gap: 12px; border-bottom: 1px solid #1E293B;",
                            FilterBar {}
                            StatusSummary {}
                        }
                        TrackingTable {}
                    }

                    HistoryModal {}
                }
            }
        }
    }
}
