//! Colours per status bucket, shared by badges, bars and map markers.

use sft_tracking::VesselStatus;

/// Badge style (background + text colour).
pub fn badge_style(status: VesselStatus) -> &'static str {
    match status {
        VesselStatus::UnderWay => "background: rgba(16,185,129,0.15); color: #6EE7B7;",
        VesselStatus::Moored => "background: rgba(14,165,233,0.15); color: #7DD3FC;",
        VesselStatus::AtAnchor => "background: rgba(245,158,11,0.15); color: #FCD34D;",
        VesselStatus::Stopped => "background: rgba(239,68,68,0.15); color: #FCA5A5;",
        VesselStatus::Unknown => "background: rgba(100,116,139,0.15); color: #CBD5E1;",
    }
}

/// Solid colour for summary bars and map markers.
pub fn bar_color(status: VesselStatus) -> &'static str {
    match status {
        VesselStatus::UnderWay => "#10B981",
        VesselStatus::Moored => "#0EA5E9",
        VesselStatus::AtAnchor => "#FBBF24",
        VesselStatus::Stopped => "#EF4444",
        VesselStatus::Unknown => "#64748B",
    }
}
