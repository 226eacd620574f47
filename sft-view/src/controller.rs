//! Dashboard state, its reducer, and the memoized derived views.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use sft_tracking::{Tracking, VesselStatus};

use crate::dataset::Dataset;
use crate::filter::{filter_trackings, FilterSpec, Selection};
use crate::history::{FetchRequest, HistoryResult, HistorySelector, RequestToken};
use crate::map::{project, MapView};
use crate::memo::Memo;
use crate::options::{derive_options, FilterOptions};
use crate::rows::{history_rows, tracking_rows, HistoryRow, TrackingRow};
use crate::summary::{summarize, StatusSummary};

/// Everything the user can do to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetStatusFilter(Selection<VesselStatus>),
    SetFlagFilter(Selection<String>),
    SetDestinationFilter(Selection<String>),
    SetSearchText(String),
    ResetFilters,
    SelectRow(Tracking),
    HistoryResponse {
        token: RequestToken,
        result: HistoryResult,
    },
    Dismiss,
}

/// Work the reducer asks the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchHistory(FetchRequest),
}

/// Filter criteria and the current drill-down selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub filters: FilterSpec,
    pub selection: HistorySelector,
}

/// Pure transition function: the previous state is left untouched.
pub fn reduce(state: &DashboardState, action: Action) -> (DashboardState, Option<Effect>) {
    let mut next = state.clone();
    let effect = match action {
        Action::SetStatusFilter(status) => {
            next.filters.status = status;
            None
        }
        Action::SetFlagFilter(flag) => {
            next.filters.flag = flag;
            None
        }
        Action::SetDestinationFilter(destination) => {
            next.filters.destination = destination;
            None
        }
        Action::SetSearchText(text) => {
            next.filters.search_text = text;
            None
        }
        Action::ResetFilters => {
            next.filters = FilterSpec::default();
            None
        }
        Action::SelectRow(row) => next.selection.select(row).map(Effect::FetchHistory),
        Action::HistoryResponse { token, result } => {
            next.selection.receive(token, result);
            None
        }
        Action::Dismiss => {
            next.selection.dismiss();
            None
        }
    };
    (next, effect)
}

/// Filtered records with their summary and table rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub filtered: Vec<Tracking>,
    pub summary: StatusSummary,
    pub rows: Vec<TrackingRow>,
}

impl DerivedView {
    fn compute(items: &[Tracking], spec: &FilterSpec) -> Self {
        let filtered = filter_trackings(items, spec);
        let summary = summarize(&filtered);
        let rows = tracking_rows(&filtered);
        Self {
            filtered,
            summary,
            rows,
        }
    }
}

/// Owns the dataset and dashboard state; the only place state changes.
///
/// Derived views are cached: options and map on dataset identity, the
/// filtered view on dataset identity plus filter value. Reads take `&self`.
#[derive(Debug, Default)]
pub struct DashboardController {
    dataset: Dataset,
    state: DashboardState,
    view_cache: RefCell<Memo<(Dataset, FilterSpec), DerivedView>>,
    options_cache: RefCell<Memo<Dataset, FilterOptions>>,
    map_cache: RefCell<Memo<Dataset, MapView>>,
}

impl DashboardController {
    pub fn new(dataset: impl Into<Dataset>) -> Self {
        Self {
            dataset: dataset.into(),
            ..Default::default()
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Swap in a new dataset. Filters and selection are kept.
    pub fn set_dataset(&mut self, dataset: impl Into<Dataset>) {
        self.dataset = dataset.into();
        info!("Dataset replaced: {} trackings", self.dataset.len());
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.state.filters
    }

    pub fn selection(&self) -> &HistorySelector {
        &self.state.selection
    }

    /// Apply an action and return the effect the caller must run.
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        let (next, effect) = reduce(&self.state, action);
        self.state = next;
        if let Some(Effect::FetchHistory(request)) = &effect {
            info!(
                "Requesting history for IMO {} (token {})",
                request.imo,
                request.token.value()
            );
        }
        effect
    }

    pub fn view(&self) -> Rc<DerivedView> {
        let key = (self.dataset.clone(), self.state.filters.clone());
        self.view_cache
            .borrow_mut()
            .get_or_compute(key, |(dataset, spec)| {
                debug!("Recomputing filtered view for {:?}", spec);
                DerivedView::compute(dataset, spec)
            })
    }

    pub fn options(&self) -> Rc<FilterOptions> {
        self.options_cache
            .borrow_mut()
            .get_or_compute(self.dataset.clone(), |dataset| {
                debug!("Recomputing filter options over {} trackings", dataset.len());
                derive_options(dataset)
            })
    }

    /// Map over the full dataset, independent of the table filters.
    pub fn map(&self) -> Rc<MapView> {
        self.map_cache
            .borrow_mut()
            .get_or_compute(self.dataset.clone(), |dataset| {
                debug!("Recomputing map projection over {} trackings", dataset.len());
                project(dataset)
            })
    }

    /// Formatted history of the selected vessel, once there is something to show.
    pub fn history_rows(&self) -> Option<Vec<HistoryRow>> {
        self.state.selection.history().map(history_rows)
    }

    /// Number of filtered-view recomputations so far.
    pub fn view_computations(&self) -> usize {
        self.view_cache.borrow().computations()
    }

    /// Number of filter-option recomputations so far.
    pub fn options_computations(&self) -> usize {
        self.options_cache.borrow().computations()
    }

    /// Number of map-projection recomputations so far.
    pub fn map_computations(&self) -> usize {
        self.map_cache.borrow().computations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryPhase;

    fn vessel(id: &str, imo: Option<&str>, status: &str, flag: &str) -> Tracking {
        Tracking {
            id: id.to_string(),
            imo: imo.map(String::from),
            status: Some(status.to_string()),
            flag: Some(flag.to_string()),
            ..Default::default()
        }
    }

    fn controller() -> DashboardController {
        DashboardController::new(vec![
            vessel("1", Some("111"), "under_way", "Panama"),
            vessel("2", Some("222"), "moored", "Liberia"),
            vessel("3", None, "moored", "Panama"),
        ])
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = DashboardState::default();
        let (next, effect) = reduce(&state, Action::SetSearchText("ever".to_string()));
        assert!(effect.is_none());
        assert_eq!(state.filters.search_text, "");
        assert_eq!(next.filters.search_text, "ever");
    }

    #[test]
    fn test_filter_actions_recompute_view() {
        let mut c = controller();
        assert_eq!(c.view().filtered.len(), 3);
        c.dispatch(Action::SetStatusFilter(Selection::Only(VesselStatus::Moored)));
        assert_eq!(c.view().summary.moored, 2);
        c.dispatch(Action::SetFlagFilter(Selection::Only("panama".to_string())));
        let view = c.view();
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, "3");
        c.dispatch(Action::ResetFilters);
        assert_eq!(c.view().summary.total, 3);
    }

    #[test]
    fn test_view_is_memoized_on_unchanged_inputs() {
        let mut c = controller();
        let a = c.view();
        let b = c.view();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(c.view_computations(), 1);

        // Selection changes do not touch the filtered view.
        c.dispatch(Action::SelectRow(vessel("1", Some("111"), "under_way", "Panama")));
        c.view();
        assert_eq!(c.view_computations(), 1);

        // Setting the same value again is a cache hit.
        c.dispatch(Action::SetSearchText(String::new()));
        c.view();
        assert_eq!(c.view_computations(), 1);

        c.dispatch(Action::SetSearchText("222".to_string()));
        assert_eq!(c.view().filtered.len(), 1);
        assert_eq!(c.view_computations(), 2);
    }

    #[test]
    fn test_options_and_map_cached_per_dataset() {
        let mut c = controller();
        let options = c.options();
        let map = c.map();
        assert!(Rc::ptr_eq(&options, &c.options()));
        assert!(Rc::ptr_eq(&map, &c.map()));

        c.dispatch(Action::SetStatusFilter(Selection::Only(VesselStatus::Moored)));
        c.dispatch(Action::SetSearchText("panama".to_string()));
        c.dispatch(Action::SelectRow(vessel("1", Some("111"), "under_way", "Panama")));
        c.dispatch(Action::Dismiss);
        c.dispatch(Action::ResetFilters);
        c.options();
        c.map();
        assert_eq!(c.options_computations(), 1);
        assert_eq!(c.map_computations(), 1);

        // An equal but distinct dataset is a new reference.
        let copy = c.dataset().to_vec();
        c.set_dataset(copy);
        c.options();
        c.map();
        assert_eq!(c.options_computations(), 2);
        assert_eq!(c.map_computations(), 2);
    }

    #[test]
    fn test_new_dataset_invalidates_caches() {
        let mut c = controller();
        assert_eq!(c.options().flags.len(), 3);
        c.set_dataset(vec![vessel("9", None, "stopped", "Malta")]);
        assert_eq!(c.options().flags.len(), 2);
        assert_eq!(c.view().summary.stopped, 1);
        assert_eq!(*c.map(), MapView::NoData);
    }

    #[test]
    fn test_select_row_emits_single_fetch() {
        let mut c = controller();
        let effect = c.dispatch(Action::SelectRow(vessel("2", Some("222"), "moored", "Liberia")));
        let Some(Effect::FetchHistory(request)) = effect else {
            panic!("expected a history fetch");
        };
        assert_eq!(request.imo, "222");
        assert!(c.selection().is_loading());

        c.dispatch(Action::HistoryResponse {
            token: request.token,
            result: HistoryResult::Loaded(vec![vessel("h", Some("222"), "moored", "Liberia")]),
        });
        assert_eq!(c.history_rows().map(|rows| rows.len()), Some(1));

        c.dispatch(Action::Dismiss);
        assert_eq!(*c.selection().phase(), HistoryPhase::Idle);
        assert!(c.history_rows().is_none());
    }

    #[test]
    fn test_select_row_without_imo_emits_nothing() {
        let mut c = controller();
        let effect = c.dispatch(Action::SelectRow(vessel("3", None, "moored", "Panama")));
        assert!(effect.is_none());
        assert_eq!(c.history_rows(), Some(vec![]));
    }
}
