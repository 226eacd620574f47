//! Per-status bar strip above the table.

use crate::state::AppState;
use crate::tone::bar_color;
use dioxus::prelude::*;

/// Quick summary of the filtered set. Renders nothing when it is empty.
#[component]
pub fn StatusSummary() -> Element {
    let state = use_context::<AppState>();
    let summary = state.controller.read().view().summary;
    let bars: Vec<(String, &'static str, usize, String)> = summary
        .bars()
        .into_iter()
        .map(|bar| {
            let fill = format!(
                "height: 100%; width: {}%; background: {};",
                bar.width_percent,
                bar_color(bar.status)
            );
            (bar.status.key().to_string(), bar.status.label(), bar.count, fill)
        })
        .collect();

    if bars.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; font-size: 12px; color: #CBD5E1;",
            p {
                style: "margin: 0; font-size: 11px; color: #94A3B8;",
                "Quick summary · {summary.total} vessels"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(5, 1fr); gap: 8px;",
                for (key, label, count, fill) in bars.into_iter() {
                    div {
                        key: "{key}",
                        p { style: "margin: 0 0 4px 0;", "{label}" }
                        div {
                            style: "height: 6px; width: 100%; border-radius: 9999px; background: #1E293B; overflow: hidden;",
                            div { style: "{fill}" }
                        }
                        p {
                            style: "margin: 4px 0 0 0; font-size: 11px; color: #94A3B8;",
                            "{count} vessels"
                        }
                    }
                }
            }
        }
    }
}
