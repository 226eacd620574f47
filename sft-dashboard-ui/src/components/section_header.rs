//! Section header with title, subtitle and an optional right-aligned note.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    /// Section title
    pub title: String,
    /// Short description under the title
    #[props(default = String::new())]
    pub subtitle: String,
    /// Right-aligned note (e.g. a count)
    #[props(default = String::new())]
    pub note: String,
}

/// Header for dashboard cards.
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; border-bottom: 1px solid #1E293B;",
            div {
                h2 {
                    style: "margin: 0; font-size: 18px; font-weight: 600;",
                    "{props.title}"
                }
                if !props.subtitle.is_empty() {
                    p {
                        style: "margin: 2px 0 0 0; font-size: 12px; color: #94A3B8;",
                        "{props.subtitle}"
                    }
                }
            }
            if !props.note.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #94A3B8;",
                    "{props.note}"
                }
            }
        }
    }
}
