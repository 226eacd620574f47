//! Command implementations for the freight tracker CLI.
//!
//! Each subcommand loads the dataset from the tracking API and renders one
//! of the dashboard views as text, using the same derivation engine as the
//! web dashboard.

use clap::{Args, Subcommand};
use sft_tracking::config::ApiConfig;
use sft_tracking::VesselStatus;
use sft_view::{Action, Selection};

pub mod history;
pub mod list;
pub mod map;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print the filtered tracking table
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Write CSV to stdout instead of an aligned table
        #[arg(long)]
        csv: bool,
    },

    /// Print vessel counts per navigational status
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the map centroid and every positioned vessel
    Map,

    /// Print recent AIS history for one vessel
    History {
        /// IMO number of the vessel
        imo: String,

        /// Number of snapshots to request
        #[arg(short, long, default_value_t = sft_tracking::config::HISTORY_LIMIT)]
        limit: usize,
    },
}

/// Table filters, mirroring the dashboard dropdowns and search box.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Status bucket (under_way, moored, at_anchor, stopped, unknown)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<VesselStatus>,

    /// Exact flag, compared after normalization (e.g. "Marshall Islands")
    #[arg(long)]
    pub flag: Option<String>,

    /// Exact destination, compared after normalization
    #[arg(long)]
    pub destination: Option<String>,

    /// Free text matched against name, IMO, flag and destination
    #[arg(short, long)]
    pub search: Option<String>,
}

impl FilterArgs {
    /// The dashboard actions that set these filters.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(status) = self.status {
            actions.push(Action::SetStatusFilter(Selection::Only(status)));
        }
        if let Some(flag) = &self.flag {
            actions.push(Action::SetFlagFilter(Selection::Only(flag.clone())));
        }
        if let Some(destination) = &self.destination {
            actions.push(Action::SetDestinationFilter(Selection::Only(destination.clone())));
        }
        if let Some(search) = &self.search {
            actions.push(Action::SetSearchText(search.clone()));
        }
        actions
    }
}

fn parse_status(s: &str) -> Result<VesselStatus, String> {
    VesselStatus::from_key(&s.to_lowercase()).ok_or_else(|| {
        let keys: Vec<&str> = VesselStatus::ALL.iter().map(|v| v.key()).collect();
        format!("unknown status '{}', expected one of: {}", s, keys.join(", "))
    })
}

pub async fn run(config: ApiConfig, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { filters, csv } => list::run_list(config, &filters, csv).await,
        Command::Summary { filters } => summary::run_summary(config, &filters).await,
        Command::Map => map::run_map(config).await,
        Command::History { imo, limit } => {
            history::run_history(config.with_history_limit(limit), &imo).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("MOORED"), Ok(VesselStatus::Moored));
        assert!(parse_status("sailing").unwrap_err().contains("under_way"));
    }

    #[test]
    fn test_filter_args_to_actions() {
        let args = FilterArgs {
            status: Some(VesselStatus::AtAnchor),
            search: Some("ever".to_string()),
            ..Default::default()
        };
        assert_eq!(
            args.actions(),
            vec![
                Action::SetStatusFilter(Selection::Only(VesselStatus::AtAnchor)),
                Action::SetSearchText("ever".to_string()),
            ]
        );
        assert!(FilterArgs::default().actions().is_empty());
    }
}
