//! Details and recent AIS history for the selected vessel.

use crate::components::LoadingSpinner;
use crate::state::AppState;
use crate::tone::badge_style;
use dioxus::prelude::*;
use sft_view::rows::TrackingRow;
use sft_view::Action;

#[component]
pub fn HistoryModal() -> Element {
    let mut state = use_context::<AppState>();
    let controller = state.controller.read();
    let selection = controller.selection();
    let Some(selected) = selection.selected() else {
        return rsx! {};
    };
    let details = TrackingRow::from(selected);
    let badge = format!(
        "padding: 2px 8px; border-radius: 6px; {}",
        badge_style(details.bucket)
    );
    let loading = selection.is_loading();
    let history = controller.history_rows();
    drop(controller);

    let on_close = move |_: Event<MouseData>| state.dispatch(Action::Dismiss);
    let on_close_button = move |_: Event<MouseData>| state.dispatch(Action::Dismiss);

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.6);",
            div {
                style: "width: 100%; max-width: 512px; border-radius: 12px; background: #020617; border: 1px solid #1E293B; padding: 20px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 16px; margin-bottom: 12px;",
                    div {
                        h3 { style: "margin: 0; font-size: 18px; font-weight: 600;", "{details.name}" }
                        p {
                            style: "margin: 0; font-size: 12px; color: #94A3B8;",
                            "IMO: {details.imo} · MMSI: {details.mmsi}"
                        }
                    }
                    button {
                        style: "background: none; border: none; color: #94A3B8; cursor: pointer;",
                        onclick: on_close,
                        "✕"
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; font-size: 12px; color: #E2E8F0;",
                    Detail { label: "Status".to_string(),
                        span {
                            style: "{badge}",
                            "{details.status}"
                        }
                    }
                    Detail { label: "Flag".to_string(), "{details.flag}" }
                    Detail { label: "Destination".to_string(), "{details.destination}" }
                    Detail { label: "ETA".to_string(), "{details.eta}" }
                    Detail { label: "Speed (kn)".to_string(), "{details.speed}" }
                    Detail { label: "Last AIS".to_string(), "{details.last_ais}" }
                }

                div {
                    style: "margin-top: 16px;",
                    p { style: "margin: 0 0 4px 0; font-size: 11px; color: #94A3B8;", "Recent AIS history" }
                    if loading {
                        LoadingSpinner { message: "Loading history...".to_string() }
                    } else if let Some(rows) = history {
                        if rows.is_empty() {
                            p {
                                style: "font-size: 12px; color: #64748B;",
                                "No history available for this IMO."
                            }
                        } else {
                            div {
                                style: "max-height: 160px; overflow-y: auto; border: 1px solid #1E293B; border-radius: 6px;",
                                table {
                                    style: "width: 100%; font-size: 11px; border-collapse: collapse;",
                                    thead {
                                        tr {
                                            th { style: "padding: 4px 8px; text-align: left; font-weight: 400;", "Date" }
                                            th { style: "padding: 4px 8px; text-align: left; font-weight: 400;", "Destination" }
                                            th { style: "padding: 4px 8px; text-align: left; font-weight: 400;", "Speed (kn)" }
                                        }
                                    }
                                    tbody {
                                        for h in rows.iter() {
                                            tr {
                                                key: "{h.id}",
                                                style: "border-top: 1px solid #1E293B;",
                                                td { style: "padding: 4px 8px;", "{h.last_ais}" }
                                                td { style: "padding: 4px 8px;", "{h.destination}" }
                                                td { style: "padding: 4px 8px;", "{h.speed}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    style: "margin-top: 16px; display: flex; justify-content: flex-end;",
                    button {
                        style: "padding: 6px 12px; font-size: 12px; border-radius: 6px; background: #1E293B; color: #F1F5F9; border: none; cursor: pointer;",
                        onclick: on_close_button,
                        "Close"
                    }
                }
            }
        }
    }
}

#[component]
fn Detail(label: String, children: Element) -> Element {
    rsx! {
        div {
            p { style: "margin: 0 0 4px 0; font-size: 11px; color: #94A3B8;", "{label}" }
            div { {children} }
        }
    }
}
