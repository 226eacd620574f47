//! Reusable Dioxus RSX components for the tracking dashboard.

mod empty_state;
mod filter_bar;
mod history_modal;
mod loading_spinner;
mod section_header;
mod status_summary;
mod tracking_table;
mod vessel_map;

pub use empty_state::EmptyState;
pub use filter_bar::FilterBar;
pub use history_modal::HistoryModal;
pub use loading_spinner::LoadingSpinner;
pub use section_header::SectionHeader;
pub use status_summary::StatusSummary;
pub use tracking_table::TrackingTable;
pub use vessel_map::VesselMap;
