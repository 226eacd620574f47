//! Per-status counts and bar widths for the summary strip.

use serde::Serialize;
use sft_tracking::{Tracking, VesselStatus};

/// Smallest bar width, in percent, drawn for any bucket while the summary is
/// visible. Applies to empty buckets too.
pub const MIN_VISUAL_WIDTH_PERCENT: f64 = 5.0;

/// Count of records per status bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub under_way: usize,
    pub moored: usize,
    pub at_anchor: usize,
    pub stopped: usize,
    pub unknown: usize,
    pub total: usize,
}

/// One bar of the summary strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketBar {
    pub status: VesselStatus,
    pub count: usize,
    pub width_percent: f64,
}

impl StatusSummary {
    pub fn count(&self, status: VesselStatus) -> usize {
        match status {
            VesselStatus::UnderWay => self.under_way,
            VesselStatus::Moored => self.moored,
            VesselStatus::AtAnchor => self.at_anchor,
            VesselStatus::Stopped => self.stopped,
            VesselStatus::Unknown => self.unknown,
        }
    }

    fn slot(&mut self, status: VesselStatus) -> &mut usize {
        match status {
            VesselStatus::UnderWay => &mut self.under_way,
            VesselStatus::Moored => &mut self.moored,
            VesselStatus::AtAnchor => &mut self.at_anchor,
            VesselStatus::Stopped => &mut self.stopped,
            VesselStatus::Unknown => &mut self.unknown,
        }
    }

    /// Relative bar width: `max(count / total * 100, 5)`, or `None` when
    /// there is nothing to show.
    pub fn bar_width(&self, status: VesselStatus) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let share = self.count(status) as f64 / self.total as f64 * 100.0;
        Some(share.max(MIN_VISUAL_WIDTH_PERCENT))
    }

    /// Bars in display order; empty when `total == 0`.
    pub fn bars(&self) -> Vec<BucketBar> {
        VesselStatus::ALL
            .iter()
            .filter_map(|&status| {
                self.bar_width(status).map(|width_percent| BucketBar {
                    status,
                    count: self.count(status),
                    width_percent,
                })
            })
            .collect()
    }
}

/// Bucket each record by status, first matching key wins.
pub fn summarize(items: &[Tracking]) -> StatusSummary {
    let mut summary = StatusSummary::default();
    for item in items {
        *summary.slot(item.status_bucket()) += 1;
    }
    summary.total = items.len();
    summary
}
