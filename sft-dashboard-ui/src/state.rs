//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and change state only through
//! [`AppState::dispatch`].

use dioxus::prelude::*;
use sft_tracking::client::TrackingClient;
use sft_tracking::config::ApiConfig;
use sft_view::{Action, DashboardController, Effect, HistoryResult};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset, filters, selection and derived-view caches
    pub controller: Signal<DashboardController>,
    /// Whether the initial `/tracking` fetch is still running
    pub loading: Signal<bool>,
    /// API client (None if it could not be built)
    pub client: Signal<Option<TrackingClient>>,
}

impl AppState {
    /// Create a new AppState with an empty dataset.
    pub fn new(config: ApiConfig) -> Self {
        let client = match TrackingClient::new(config) {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("Failed to build tracking client: {}", e);
                None
            }
        };
        Self {
            controller: Signal::new(DashboardController::default()),
            loading: Signal::new(true),
            client: Signal::new(client),
        }
    }

    /// Apply an action and run the effect it produces.
    ///
    /// History fetches run as spawned tasks whose result is fed back as
    /// `Action::HistoryResponse`; the controller drops it if the selection
    /// has moved on in the meantime.
    pub fn dispatch(&mut self, action: Action) {
        let effect = self.controller.write().dispatch(action);
        let Some(Effect::FetchHistory(request)) = effect else {
            return;
        };

        let client = (*self.client.peek()).clone();
        let mut controller = self.controller;
        spawn(async move {
            let result = match client {
                Some(client) => HistoryResult::from_fetch(client.fetch_history(&request.imo).await),
                None => HistoryResult::Failed,
            };
            controller.write().dispatch(Action::HistoryResponse {
                token: request.token,
                result,
            });
        });
    }

    /// Fetch the dataset once; failures leave an empty dataset.
    pub fn load_dataset(&self) {
        let client = (*self.client.peek()).clone();
        let mut controller = self.controller;
        let mut loading = self.loading;
        spawn(async move {
            let items = match client {
                Some(client) => client.trackings_or_empty().await,
                None => Vec::new(),
            };
            controller.write().set_dataset(items);
            loading.set(false);
        });
    }
}
