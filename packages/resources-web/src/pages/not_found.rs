//! Fallback page for unknown routes

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex items-center justify-center",
            div {
                class: "bg-white p-6 rounded-lg shadow-md text-center",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Page not found" }
                p { class: "text-gray-600 mb-4", "Nothing lives at /{path}." }
                Link {
                    to: Route::ResourceList {},
                    class: "text-blue-600 hover:text-blue-800",
                    "\u{2190} Back to Resources"
                }
            }
        }
    }
}
