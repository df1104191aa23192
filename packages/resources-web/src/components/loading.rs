//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex items-center justify-center",
            div {
                role: "status",
                aria_label: "Loading",
                class: "animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-blue-500"
            }
        }
    }
}

/// Inline loading indicator
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-1",
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce" }
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
