//! Filtered tracking table. Clicking a row opens its history.

use crate::state::AppState;
use crate::tone::badge_style;
use dioxus::prelude::*;
use sft_tracking::Tracking;
use sft_view::rows::TrackingRow;
use sft_view::Action;

const HEADERS: [&str; 9] = [
    "Vessel",
    "IMO / MMSI",
    "Type",
    "Flag",
    "Status",
    "Destination",
    "ETA",
    "Speed (kn)",
    "Last AIS",
];

const CELL_STYLE: &str = "padding: 8px; font-size: 12px;";

#[component]
pub fn TrackingTable() -> Element {
    let state = use_context::<AppState>();
    let view = state.controller.read().view();

    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "min-width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        style: "background: rgba(15,23,42,0.4); border-bottom: 1px solid #1E293B;",
                        for header in HEADERS {
                            th { style: "{CELL_STYLE} text-align: left; font-weight: 500;", "{header}" }
                        }
                    }
                }
                tbody {
                    for (item, row) in view.filtered.iter().zip(view.rows.iter()) {
                        TrackingTableRow {
                            key: "{row.id}",
                            item: item.clone(),
                            row: row.clone(),
                        }
                    }
                    if view.rows.is_empty() {
                        tr {
                            td {
                                colspan: "9",
                                style: "text-align: center; padding: 40px 0; color: #64748B;",
                                "No vessels match the selected filters."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TrackingTableRow(item: Tracking, row: TrackingRow) -> Element {
    let mut state = use_context::<AppState>();
    let badge = format!(
        "padding: 2px 8px; border-radius: 6px; {}",
        badge_style(row.bucket)
    );
    let on_click = move |_: Event<MouseData>| state.dispatch(Action::SelectRow(item.clone()));

    rsx! {
        tr {
            style: "border-bottom: 1px solid #1E293B; cursor: pointer;",
            onclick: on_click,
            td {
                style: CELL_STYLE,
                div {
                    style: "display: flex; flex-direction: column; font-weight: 500; font-size: 14px;",
                    span { "{row.name}" }
                    span { style: "font-size: 12px; color: #64748B;", "{row.destination}" }
                }
            }
            td {
                style: CELL_STYLE,
                div {
                    style: "display: flex; flex-direction: column;",
                    span { style: "color: #CBD5E1;", "IMO: {row.imo}" }
                    span { style: "color: #64748B;", "MMSI: {row.mmsi}" }
                }
            }
            td { style: CELL_STYLE, "{row.vessel_type}" }
            td { style: CELL_STYLE, "{row.flag}" }
            td {
                style: CELL_STYLE,
                span {
                    style: "{badge}",
                    "{row.status}"
                }
            }
            td {
                style: "{CELL_STYLE} max-width: 180px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{row.destination}"
            }
            td { style: CELL_STYLE, "{row.eta}" }
            td { style: CELL_STYLE, "{row.speed}" }
            td { style: CELL_STYLE, "{row.last_ais}" }
        }
    }
}
