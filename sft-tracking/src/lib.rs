//! Core types and HTTP client for the vessel tracking API.
//!
//! The tracking records are produced by an external scraping/ETL pipeline and
//! are read-only here. With the `api` feature enabled, [`client::TrackingClient`]
//! fetches the current snapshot list and per-vessel history.

#[cfg(feature = "api")]
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod status;
pub mod tracking;

pub use history::{HistoryResponse, HistorySnapshot};
pub use status::VesselStatus;
pub use tracking::Tracking;
