use serde::{Deserialize, Serialize};

/// Navigational status bucket.
///
/// The scraper emits free text; a record belongs to the first bucket whose key
/// its lowercased status contains, checked in declaration order. Anything else,
/// including a missing status, is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VesselStatus {
    UnderWay,
    Moored,
    AtAnchor,
    Stopped,
    Unknown,
}

impl VesselStatus {
    /// All buckets in display and matching priority order.
    pub const ALL: [VesselStatus; 5] = [
        VesselStatus::UnderWay,
        VesselStatus::Moored,
        VesselStatus::AtAnchor,
        VesselStatus::Stopped,
        VesselStatus::Unknown,
    ];

    /// Substring key as it appears in the scraped status text.
    pub fn key(self) -> &'static str {
        match self {
            VesselStatus::UnderWay => "under_way",
            VesselStatus::Moored => "moored",
            VesselStatus::AtAnchor => "at_anchor",
            VesselStatus::Stopped => "stopped",
            VesselStatus::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VesselStatus::UnderWay => "Under way",
            VesselStatus::Moored => "Moored",
            VesselStatus::AtAnchor => "At anchor",
            VesselStatus::Stopped => "Stopped",
            VesselStatus::Unknown => "Unknown",
        }
    }

    pub fn from_key(key: &str) -> Option<VesselStatus> {
        VesselStatus::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Bucket a raw status, first match wins.
    pub fn classify(status: Option<&str>) -> VesselStatus {
        let s = status.unwrap_or_default().to_lowercase();
        VesselStatus::ALL[..4]
            .iter()
            .copied()
            .find(|bucket| s.contains(bucket.key()))
            .unwrap_or(VesselStatus::Unknown)
    }

    /// Status text for badges: underscores spaced out, "unknown" if absent.
    pub fn display_text(status: Option<&str>) -> String {
        match status {
            Some(s) if !s.is_empty() => sft_utils::text::spaced(s),
            _ => "unknown".to_string(),
        }
    }
}

impl std::fmt::Display for VesselStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
