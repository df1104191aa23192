//! Newsletter signup

use dioxus::prelude::*;

/// "Stay Updated" block under the resource grid.
///
/// Visual only: no subscription endpoint exists, so the form is not wired.
#[component]
pub fn NewsletterSignup() -> Element {
    rsx! {
        div {
            class: "mt-12 text-center",
            h2 { class: "text-2xl font-bold text-gray-900 mb-4", "Stay Updated" }
            p {
                class: "text-gray-600 mb-6",
                "Subscribe to our newsletter for the latest heart health tips and resources."
            }
            div {
                class: "max-w-md mx-auto",
                form {
                    class: "flex gap-2",
                    input {
                        r#type: "email",
                        placeholder: "Enter your email",
                        class: "flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                    }
                    button {
                        r#type: "submit",
                        class: "px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500",
                        "Subscribe"
                    }
                }
            }
        }
    }
}
