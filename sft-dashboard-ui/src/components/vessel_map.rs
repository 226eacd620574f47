//! Vessel positions on a Leaflet map.

use crate::components::{EmptyState, SectionHeader};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use sft_view::MapView;

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "vessel-map";

/// Map of every vessel with both coordinates, centered on their mean position.
#[component]
pub fn VesselMap() -> Element {
    let state = use_context::<AppState>();
    let view = (*state.controller.read()).map();

    // Redraw whenever the dataset (and so the projection) changes
    use_effect(move || {
        let map = (*state.controller.read()).map();
        match &*map {
            MapView::Ready(projection) => {
                js_bridge::init_map();
                js_bridge::render_vessel_map(MAP_ID, projection);
            }
            MapView::NoData => js_bridge::destroy_vessel_map(MAP_ID),
        }
    });

    match &*view {
        MapView::NoData => rsx! {
            EmptyState { message: "No vessels with coordinates to show on the map.".to_string() }
        },
        MapView::Ready(projection) => {
            let note = format!("Vessels with position: {}", projection.markers.len());
            rsx! {
                div {
                    style: "border: 1px solid #1E293B; border-radius: 8px; overflow: hidden;",
                    SectionHeader {
                        title: "Vessel positions".to_string(),
                        subtitle: "Markers from the lat/lon of the latest tracking.".to_string(),
                        note: note,
                    }
                    div {
                        id: MAP_ID,
                        style: "height: 380px; width: 100%;",
                    }
                }
            }
        }
    }
}
