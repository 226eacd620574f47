//! Per-selection history fetch state machine.
//!
//! ```text
//! Idle ──select(row with imo)──► Loading ──response(token)──► Loaded | Failed
//!   └──select(row without imo)──► NoHistory
//! any ──dismiss──► Idle
//! ```
//!
//! Every selection that needs a fetch gets a fresh [`RequestToken`]. A response
//! is applied only if its token is the one currently loading, so a slow reply
//! for an earlier row can never overwrite a later selection.

use std::fmt::Display;

use log::{debug, warn};
use sft_tracking::{HistorySnapshot, Tracking};

/// Monotonically increasing id of one history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A history fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub imo: String,
}

/// Outcome of a history fetch as seen by the selector.
///
/// Transport errors, non-2xx statuses and `ok: false` all collapse to `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryResult {
    Loaded(Vec<HistorySnapshot>),
    Failed,
}

impl HistoryResult {
    pub fn from_fetch<E: Display>(result: Result<Vec<HistorySnapshot>, E>) -> Self {
        match result {
            Ok(snapshots) => HistoryResult::Loaded(snapshots),
            Err(e) => {
                warn!("History fetch failed: {}", e);
                HistoryResult::Failed
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum HistoryPhase {
    #[default]
    Idle,
    /// Selected row has no IMO; nothing was fetched.
    NoHistory,
    Loading {
        token: RequestToken,
        imo: String,
    },
    /// May be empty, which is still a successful load.
    Loaded(Vec<HistorySnapshot>),
    Failed,
}

/// Selected row plus the state of its history fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySelector {
    selected: Option<Tracking>,
    phase: HistoryPhase,
    last_token: u64,
}

impl HistorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a row. Returns the fetch to issue, if any.
    ///
    /// Selecting while a fetch is in flight supersedes it; the old token
    /// stops matching and its response will be dropped.
    pub fn select(&mut self, row: Tracking) -> Option<FetchRequest> {
        let request = row.history_key().map(|imo| {
            self.last_token += 1;
            FetchRequest {
                token: RequestToken(self.last_token),
                imo: imo.trim().to_string(),
            }
        });

        self.phase = match &request {
            Some(req) => HistoryPhase::Loading {
                token: req.token,
                imo: req.imo.clone(),
            },
            None => HistoryPhase::NoHistory,
        };
        self.selected = Some(row);
        request
    }

    /// Apply a fetch outcome. Returns `false` if the response was stale and
    /// discarded.
    pub fn receive(&mut self, token: RequestToken, result: HistoryResult) -> bool {
        match &self.phase {
            HistoryPhase::Loading { token: current, .. } if *current == token => {
                self.phase = match result {
                    HistoryResult::Loaded(snapshots) => HistoryPhase::Loaded(snapshots),
                    HistoryResult::Failed => HistoryPhase::Failed,
                };
                true
            }
            _ => {
                debug!("Discarding stale history response {:?}", token);
                false
            }
        }
    }

    /// Close the drill-down and drop the history buffer.
    pub fn dismiss(&mut self) {
        self.selected = None;
        self.phase = HistoryPhase::Idle;
    }

    pub fn selected(&self) -> Option<&Tracking> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> &HistoryPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, HistoryPhase::Loading { .. })
    }

    /// History to show. `None` while idle or loading; failures and rows
    /// without an IMO show an empty list.
    pub fn history(&self) -> Option<&[HistorySnapshot]> {
        match &self.phase {
            HistoryPhase::Idle | HistoryPhase::Loading { .. } => None,
            HistoryPhase::NoHistory | HistoryPhase::Failed => Some(&[]),
            HistoryPhase::Loaded(snapshots) => Some(snapshots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, imo: Option<&str>) -> Tracking {
        Tracking {
            id: id.to_string(),
            imo: imo.map(String::from),
            ..Default::default()
        }
    }

    fn snapshot(id: &str) -> HistorySnapshot {
        Tracking {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_with_imo_issues_one_fetch() {
        let mut selector = HistorySelector::new();
        let request = selector.select(row("a", Some("9811000"))).unwrap();
        assert_eq!(request.imo, "9811000");
        assert!(selector.is_loading());
        assert!(selector.is_open());
        assert_eq!(selector.history(), None);

        assert!(selector.receive(request.token, HistoryResult::Loaded(vec![snapshot("h1")])));
        assert_eq!(selector.history().map(|h| h.len()), Some(1));
        assert!(!selector.is_loading());
    }

    #[test]
    fn test_select_without_imo_never_fetches() {
        let mut selector = HistorySelector::new();
        assert!(selector.select(row("a", None)).is_none());
        assert_eq!(*selector.phase(), HistoryPhase::NoHistory);
        assert_eq!(selector.history(), Some(&[][..]));
        assert!(!selector.is_loading());
    }

    #[test]
    fn test_empty_load_is_not_failure() {
        let mut selector = HistorySelector::new();
        let request = selector.select(row("a", Some("1"))).unwrap();
        selector.receive(request.token, HistoryResult::Loaded(vec![]));
        assert_eq!(*selector.phase(), HistoryPhase::Loaded(vec![]));
        assert_eq!(selector.history(), Some(&[][..]));
    }

    #[test]
    fn test_failure_shows_empty_history() {
        let mut selector = HistorySelector::new();
        let request = selector.select(row("a", Some("1"))).unwrap();
        selector.receive(request.token, HistoryResult::Failed);
        assert_eq!(*selector.phase(), HistoryPhase::Failed);
        assert_eq!(selector.history(), Some(&[][..]));
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut selector = HistorySelector::new();
        let first = selector.select(row("a", Some("111"))).unwrap();
        let second = selector.select(row("b", Some("222"))).unwrap();
        assert!(second.token > first.token);

        // Late reply for the first row arrives after the second selection.
        assert!(!selector.receive(first.token, HistoryResult::Loaded(vec![snapshot("old")])));
        assert!(selector.is_loading());
        assert_eq!(selector.selected().map(|t| t.id.as_str()), Some("b"));

        assert!(selector.receive(second.token, HistoryResult::Loaded(vec![snapshot("new")])));
        assert_eq!(selector.history().unwrap()[0].id, "new");
    }

    #[test]
    fn test_response_after_dismiss_is_dropped() {
        let mut selector = HistorySelector::new();
        let request = selector.select(row("a", Some("111"))).unwrap();
        selector.dismiss();
        assert!(!selector.receive(request.token, HistoryResult::Failed));
        assert_eq!(*selector.phase(), HistoryPhase::Idle);
        assert!(selector.selected().is_none());
    }

    #[test]
    fn test_tokens_stay_monotonic_across_dismiss() {
        let mut selector = HistorySelector::new();
        let first = selector.select(row("a", Some("111"))).unwrap();
        selector.dismiss();
        let second = selector.select(row("a", Some("111"))).unwrap();
        assert!(second.token > first.token);
        assert!(!selector.receive(first.token, HistoryResult::Failed));
    }

    #[test]
    fn test_from_fetch() {
        let ok: Result<Vec<HistorySnapshot>, String> = Ok(vec![snapshot("h")]);
        assert_eq!(
            HistoryResult::from_fetch(ok),
            HistoryResult::Loaded(vec![snapshot("h")])
        );
        let err: Result<Vec<HistorySnapshot>, String> = Err("timeout".to_string());
        assert_eq!(HistoryResult::from_fetch(err), HistoryResult::Failed);
    }
}
