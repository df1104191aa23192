//! Resource list page

use dioxus::prelude::*;

use crate::api::resource_client;
use crate::components::{LoadingSpinner, NewsletterSignup, ResourceCard, ResourceCardModel};
use crate::state::{use_liveness, LoadPhase, ResourceListState};
use crate::util::browser::reload_page;

/// What the list page shows for a given state. Exactly one of the three.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Spinner,
    ErrorPanel { message: String },
    Grid { cards: Vec<ResourceCardModel> },
}

impl ListView {
    pub fn from_state(state: &ResourceListState) -> Self {
        match state.phase() {
            LoadPhase::Loading => ListView::Spinner,
            LoadPhase::Error => ListView::ErrorPanel {
                message: state.error_message.clone().unwrap_or_default(),
            },
            LoadPhase::Ready => ListView::Grid {
                cards: state.resources.iter().map(ResourceCardModel::from).collect(),
            },
        }
    }
}

/// Resource list page - fetches the collection once per mount
#[component]
pub fn ResourceList() -> Element {
    let mut state = use_signal(ResourceListState::default);
    let liveness = use_liveness();

    // Load once on mount (client-side only)
    use_effect(move || {
        let liveness = liveness.clone();
        spawn(async move {
            let result = resource_client().fetch_resources().await;

            if !liveness.is_alive() {
                tracing::debug!("Resource list unmounted before load finished; dropping result");
                return;
            }
            state.write().apply(result);
        });
    });

    let view = ListView::from_state(&state.read());

    match view {
        ListView::Spinner => rsx! { LoadingSpinner {} },
        ListView::ErrorPanel { message } => rsx! {
            div {
                class: "min-h-screen bg-gray-50 flex items-center justify-center",
                div {
                    class: "bg-white p-6 rounded-lg shadow-md",
                    p { class: "text-red-500", "{message}" }
                    button {
                        class: "mt-4 px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600",
                        onclick: move |_| reload_page(),
                        "Retry"
                    }
                }
            }
        },
        ListView::Grid { cards } => rsx! {
            div {
                class: "min-h-screen bg-gray-50 py-12 px-4 sm:px-6 lg:px-8",
                div {
                    class: "max-w-7xl mx-auto",
                    div {
                        class: "text-center mb-12",
                        h1 {
                            class: "text-3xl font-bold text-gray-900 sm:text-4xl",
                            "Additional Resources"
                        }
                        p {
                            class: "mt-4 text-lg text-gray-600",
                            "Explore our collection of articles, videos, and tools to help you maintain a healthy heart."
                        }
                    }

                    div {
                        class: "grid grid-cols-1 gap-8 sm:grid-cols-2 lg:grid-cols-3",
                        for card in cards {
                            ResourceCard { key: "{card.id}", card: card.clone() }
                        }
                    }

                    NewsletterSignup {}
                }
            }
        },
    }
}
