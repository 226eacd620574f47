//! Placeholder card for "nothing to show" states.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

/// Muted message box. Failures render through this too: the dashboard
/// degrades to an empty view rather than showing errors.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "padding: 16px; margin: 8px 0; border: 1px solid #1E293B; border-radius: 8px; color: #94A3B8; font-size: 14px;",
            "{props.message}"
        }
    }
}
