//! Loading indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading data...".to_string())]
    pub message: String,
}

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #94A3B8;",
            "{props.message}"
        }
    }
}
