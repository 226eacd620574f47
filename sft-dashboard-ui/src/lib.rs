//! Shared Dioxus components and Leaflet bridge for the tracking dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map script via `js_sys::eval()`
//! - `state`: `AppState` signals around the dashboard controller
//! - `components`: filter bar, status summary, table, history modal, map

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod tone;
