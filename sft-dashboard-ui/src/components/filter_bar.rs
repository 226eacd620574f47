//! Status, flag and destination dropdowns plus the free-text search box.

use crate::state::AppState;
use dioxus::prelude::*;
use sft_tracking::VesselStatus;
use sft_view::options::status_options;
use sft_view::{Action, Selection};

const SELECT_STYLE: &str = "height: 36px; border-radius: 6px; border: 1px solid #334155; background: #0F172A; color: #F1F5F9; padding: 0 8px; font-size: 12px;";

/// Filter controls. Options for flag and destination come from the dataset.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.controller.read().options();
    let filters = state.controller.read().filters().clone();
    let statuses = status_options();

    let status_value = filters.status.select_value().to_string();
    let flag_value = filters.flag.select_value().to_string();
    let destination_value = filters.destination.select_value().to_string();
    let search = filters.search_text.clone();

    let on_status_change = move |evt: Event<FormData>| {
        let status = Selection::<VesselStatus>::from_select_value(&evt.value());
        state.dispatch(Action::SetStatusFilter(status));
    };

    let on_flag_change = move |evt: Event<FormData>| {
        let flag = Selection::<String>::from_select_value(&evt.value());
        state.dispatch(Action::SetFlagFilter(flag));
    };

    let on_destination_change = move |evt: Event<FormData>| {
        let destination = Selection::<String>::from_select_value(&evt.value());
        state.dispatch(Action::SetDestinationFilter(destination));
    };

    let on_search = move |evt: Event<FormData>| {
        state.dispatch(Action::SetSearchText(evt.value()));
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
            select {
                style: SELECT_STYLE,
                onchange: on_status_change,
                for opt in statuses.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == status_value,
                        "{opt.label}"
                    }
                }
            }
            select {
                style: SELECT_STYLE,
                onchange: on_flag_change,
                for opt in options.flags.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == flag_value,
                        "{opt.label}"
                    }
                }
            }
            select {
                style: SELECT_STYLE,
                onchange: on_destination_change,
                for opt in options.destinations.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == destination_value,
                        "{opt.label}"
                    }
                }
            }
            input {
                r#type: "search",
                value: "{search}",
                placeholder: "Search by name, IMO, flag...",
                style: "{SELECT_STYLE} width: 256px; padding: 0 12px;",
                oninput: on_search,
            }
        }
    }
}
