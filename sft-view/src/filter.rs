//! Multi-criteria filter over the tracking list.

use sft_tracking::{Tracking, VesselStatus};
use sft_utils::text::comparable_label;

use crate::options::ALL_VALUE;

/// Either the catch-all or one concrete choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl Selection<String> {
    /// Map a dropdown value back to a selection; `"all"` is the catch-all.
    pub fn from_select_value(value: &str) -> Self {
        if value == ALL_VALUE {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            Selection::All => ALL_VALUE,
            Selection::Only(value) => value,
        }
    }
}

impl Selection<VesselStatus> {
    /// Unknown keys fall back to the catch-all.
    pub fn from_select_value(value: &str) -> Self {
        VesselStatus::from_key(value).map_or(Selection::All, Selection::Only)
    }

    pub fn select_value(&self) -> &str {
        match self {
            Selection::All => ALL_VALUE,
            Selection::Only(status) => status.key(),
        }
    }
}

/// Active filter criteria. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    pub status: Selection<VesselStatus>,
    pub flag: Selection<String>,
    pub destination: Selection<String>,
    pub search_text: String,
}

impl FilterSpec {
    /// True when no criterion is active.
    pub fn is_identity(&self) -> bool {
        self.status.is_all()
            && self.flag.is_all()
            && self.destination.is_all()
            && self.search_text.trim().is_empty()
    }

    /// All four criteria, ANDed.
    pub fn matches(&self, item: &Tracking) -> bool {
        self.matches_status(item)
            && self.matches_flag(item)
            && self.matches_destination(item)
            && self.matches_search(item)
    }

    /// Substring match: `moored` accepts any status text containing "moored".
    fn matches_status(&self, item: &Tracking) -> bool {
        match &self.status {
            Selection::All => true,
            Selection::Only(status) => item
                .status
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(status.key()),
        }
    }

    fn matches_flag(&self, item: &Tracking) -> bool {
        exact_label(&self.flag, item.flag.as_deref())
    }

    fn matches_destination(&self, item: &Tracking) -> bool {
        exact_label(&self.destination, item.location.as_deref())
    }

    /// Case-insensitive substring over name, IMO, flag and destination.
    /// Missing fields are skipped; one hit is enough.
    fn matches_search(&self, item: &Tracking) -> bool {
        if self.search_text.trim().is_empty() {
            return true;
        }
        let term = self.search_text.to_lowercase();
        [
            item.vessel_name.as_deref(),
            item.imo.as_deref(),
            item.flag.as_deref(),
            item.location.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Normalized, case-insensitive equality against a selected option.
fn exact_label(selection: &Selection<String>, field: Option<&str>) -> bool {
    match selection {
        Selection::All => true,
        Selection::Only(wanted) => comparable_label(field) == wanted.to_lowercase(),
    }
}

/// Stable filter: keeps the matching records in their original order.
pub fn filter_trackings(items: &[Tracking], spec: &FilterSpec) -> Vec<Tracking> {
    if spec.is_identity() {
        return items.to_vec();
    }
    items.iter().filter(|item| spec.matches(item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vessel(id: &str, name: &str, imo: &str, flag: &str, location: &str, status: &str) -> Tracking {
        Tracking {
            id: id.to_string(),
            vessel_name: Some(name.to_string()),
            imo: Some(imo.to_string()),
            flag: Some(flag.to_string()),
            location: Some(location.to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    fn fleet() -> Vec<Tracking> {
        vec![
            vessel("1", "Ever Given", "IMO9811000", "Panama", "ROTTERDAM", "under_way"),
            vessel("2", "Maersk Alabama", "9164263", "United_States", "MOMBASA", "moored"),
            vessel("3", "Nordic Star", "9300001", "Panama_Flag", "US_HOUSTON", "Moored_at_berth"),
            vessel("4", "Ocean Queen", "9400002", "Liberia", "ROTTERDAM", "at_anchor"),
        ]
    }

    fn ids(items: &[Tracking]) -> Vec<&str> {
        items.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_default_spec_is_identity() {
        let items = fleet();
        let spec = FilterSpec::default();
        assert!(spec.is_identity());
        assert_eq!(filter_trackings(&items, &spec), items);
    }

    #[test]
    fn test_status_is_substring_match() {
        let spec = FilterSpec {
            status: Selection::Only(VesselStatus::Moored),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trackings(&fleet(), &spec)), ["2", "3"]);
    }

    #[test]
    fn test_flag_exact_normalized_match() {
        let spec = FilterSpec {
            flag: Selection::Only("panama".to_string()),
            ..Default::default()
        };
        // "Panama_Flag" normalizes to "panama flag", which is not "panama".
        assert_eq!(ids(&filter_trackings(&fleet(), &spec)), ["1"]);

        let spec = FilterSpec {
            flag: Selection::Only("United States".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trackings(&fleet(), &spec)), ["2"]);
    }

    #[test]
    fn test_panama_does_not_match_panama_flag_filter() {
        let spec = FilterSpec {
            flag: Selection::Only("panama flag".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trackings(&fleet(), &spec)), ["3"]);
    }

    #[test]
    fn test_destination_filter() {
        let spec = FilterSpec {
            destination: Selection::Only("US HOUSTON".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trackings(&fleet(), &spec)), ["3"]);
    }

    #[test]
    fn test_search_case_insensitive_any_field() {
        let spec = FilterSpec {
            search_text: "imo981".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trackings(&fleet(), &spec)), ["1"]);

        let spec = FilterSpec {
            search_text: "rotter".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trackings(&fleet(), &spec)), ["1", "4"]);
    }

    #[test]
    fn test_search_skips_missing_fields() {
        let items = vec![Tracking {
            id: "x".to_string(),
            imo: Some("IMO123".to_string()),
            ..Default::default()
        }];
        let spec = FilterSpec {
            search_text: "imo123".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trackings(&items, &spec)), ["x"]);
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let spec = FilterSpec {
            search_text: "   ".to_string(),
            ..Default::default()
        };
        assert!(spec.is_identity());
        assert_eq!(filter_trackings(&fleet(), &spec).len(), 4);
    }

    #[test]
    fn test_criteria_are_anded() {
        let spec = FilterSpec {
            destination: Selection::Only("rotterdam".to_string()),
            status: Selection::Only(VesselStatus::AtAnchor),
            ..Default::default()
        };
        assert_eq!(ids(&filter_trackings(&fleet(), &spec)), ["4"]);
    }

    #[test]
    fn test_missing_status_never_matches_a_status_filter() {
        let items = vec![Tracking::default()];
        let spec = FilterSpec {
            status: Selection::Only(VesselStatus::Unknown),
            ..Default::default()
        };
        assert!(filter_trackings(&items, &spec).is_empty());
    }

    #[test]
    fn test_select_value_round_trip() {
        assert_eq!(Selection::<String>::from_select_value("all"), Selection::All);
        assert_eq!(
            Selection::<VesselStatus>::from_select_value("stopped"),
            Selection::Only(VesselStatus::Stopped)
        );
        assert_eq!(Selection::<VesselStatus>::from_select_value("bogus"), Selection::All);
        assert_eq!(Selection::Only(VesselStatus::Moored).select_value(), "moored");
    }
}
