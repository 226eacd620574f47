//! Client-side derivation and selection engine for the tracking dashboard.
//!
//! Everything here is synchronous and side-effect free except for the
//! [`controller::DashboardController`], which owns the filter/selection state
//! and a memo cache of derived views. Network I/O is left to the caller: the
//! controller emits [`controller::Effect`]s and is fed the responses back as
//! actions.
//!
//! Data flows one way:
//!
//! ```text
//! dataset ──► options / filter ──► summary, table rows
//!        └──► map projection
//! row selection ──► HistorySelector ──► Effect::FetchHistory ──► response action
//! ```

pub mod controller;
pub mod dataset;
pub mod filter;
pub mod history;
pub mod map;
pub mod memo;
pub mod options;
pub mod rows;
pub mod summary;

pub use controller::{reduce, Action, DashboardController, DashboardState, DerivedView, Effect};
pub use dataset::Dataset;
pub use filter::{filter_trackings, FilterSpec, Selection};
pub use history::{FetchRequest, HistoryPhase, HistoryResult, HistorySelector, RequestToken};
pub use map::{project, MapProjection, MapView};
pub use options::{derive_options, FilterOptions, SelectOption};
pub use summary::{summarize, StatusSummary, MIN_VISUAL_WIDTH_PERCENT};
