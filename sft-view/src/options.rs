//! Distinct flag/destination options discovered from the dataset.

use std::collections::HashSet;

use serde::Serialize;
use sft_tracking::{Tracking, VesselStatus};
use sft_utils::text::normalize_label;

/// Select value of the catch-all option.
pub const ALL_VALUE: &str = "all";

pub const ALL_STATUSES_LABEL: &str = "All statuses";
pub const ALL_FLAGS_LABEL: &str = "All flags";
pub const ALL_DESTINATIONS_LABEL: &str = "All destinations";

/// One entry of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn all(label: &str) -> Self {
        Self {
            value: ALL_VALUE.to_string(),
            label: label.to_string(),
        }
    }

    fn value(value: String) -> Self {
        Self {
            label: value.clone(),
            value,
        }
    }

    pub fn is_all(&self) -> bool {
        self.value == ALL_VALUE
    }
}

/// Flag and destination dropdown contents.
///
/// Each list starts with its catch-all option, followed by the distinct
/// normalized values in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub flags: Vec<SelectOption>,
    pub destinations: Vec<SelectOption>,
}

/// Scan the dataset once and collect the distinct normalized flags and
/// destinations. Missing or empty fields contribute nothing.
pub fn derive_options(items: &[Tracking]) -> FilterOptions {
    let mut flags = Distinct::new(ALL_FLAGS_LABEL);
    let mut destinations = Distinct::new(ALL_DESTINATIONS_LABEL);

    for item in items {
        if let Some(flag) = item.flag.as_deref().filter(|s| !s.is_empty()) {
            flags.push(normalize_label(Some(flag)));
        }
        if let Some(location) = item.location.as_deref().filter(|s| !s.is_empty()) {
            destinations.push(normalize_label(Some(location)));
        }
    }

    FilterOptions {
        flags: flags.options,
        destinations: destinations.options,
    }
}

/// The fixed status dropdown.
pub fn status_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::all(ALL_STATUSES_LABEL))
        .chain(VesselStatus::ALL.iter().map(|s| SelectOption {
            value: s.key().to_string(),
            label: s.label().to_string(),
        }))
        .collect()
}

/// Insertion-ordered set of options.
struct Distinct {
    seen: HashSet<String>,
    options: Vec<SelectOption>,
}

impl Distinct {
    fn new(all_label: &str) -> Self {
        Self {
            seen: HashSet::new(),
            options: vec![SelectOption::all(all_label)],
        }
    }

    fn push(&mut self, value: String) {
        if self.seen.insert(value.clone()) {
            self.options.push(SelectOption::value(value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(flag: Option<&str>, location: Option<&str>) -> Tracking {
        Tracking {
            flag: flag.map(String::from),
            location: location.map(String::from),
            ..Default::default()
        }
    }

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_first_occurrence_order_not_sorted() {
        let items = vec![
            record(Some("Panama"), Some("ROTTERDAM")),
            record(Some("Liberia"), Some("US_HOU")),
            record(Some("Panama"), Some("ANTWERP")),
        ];
        let options = derive_options(&items);
        assert_eq!(values(&options.flags), ["all", "Panama", "Liberia"]);
        assert_eq!(
            values(&options.destinations),
            ["all", "ROTTERDAM", "US HOU", "ANTWERP"]
        );
        assert_eq!(options.flags[0].label, ALL_FLAGS_LABEL);
        assert_eq!(options.destinations[0].label, ALL_DESTINATIONS_LABEL);
    }

    #[test]
    fn test_dedup_after_normalization_is_case_sensitive() {
        let items = vec![
            record(Some("Marshall_Islands"), None),
            record(Some(" Marshall Islands "), None),
            record(Some("MARSHALL ISLANDS"), None),
        ];
        let options = derive_options(&items);
        assert_eq!(
            values(&options.flags),
            ["all", "Marshall Islands", "MARSHALL ISLANDS"]
        );
    }

    #[test]
    fn test_missing_and_empty_fields_skipped() {
        let items = vec![record(None, Some("")), record(Some(""), None)];
        let options = derive_options(&items);
        assert_eq!(options.flags.len(), 1);
        assert_eq!(options.destinations.len(), 1);
        assert!(options.flags[0].is_all());
    }

    #[test]
    fn test_status_options() {
        let options = status_options();
        assert_eq!(
            values(&options),
            ["all", "under_way", "moored", "at_anchor", "stopped", "unknown"]
        );
        assert_eq!(options[2].label, "Moored");
    }
}
