//! Resource detail page

use dioxus::prelude::*;

use crate::api::resource_client;
use crate::components::{CategoryBadge, LoadingSpinner};
use crate::routes::Route;
use crate::state::{use_liveness, ResourceDetailState};
use crate::types::Resource;
use crate::util::long_date;

/// Resource detail page - fetches a single resource once per mount
#[component]
pub fn ResourceDetail(id: String) -> Element {
    let mut state = use_signal(ResourceDetailState::default);
    let mut requested = use_signal(String::new);
    let liveness = use_liveness();

    // The router reuses this component across ids, so reload when `id` changes
    use_effect(use_reactive!(|id| {
        let liveness = liveness.clone();
        requested.set(id.clone());
        state.set(ResourceDetailState::Loading);

        spawn(async move {
            let result = resource_client().fetch_resource(&id).await;

            if !liveness.is_alive() {
                tracing::debug!(%id, "Resource detail unmounted before load finished; dropping result");
                return;
            }
            if *requested.peek() != id {
                tracing::debug!(%id, "Dropping result for a superseded resource id");
                return;
            }
            state.write().apply(result);
        });
    }));

    let current = state.read().clone();

    match current {
        ResourceDetailState::Loading => rsx! { LoadingSpinner {} },
        ResourceDetailState::Failed(message) => rsx! {
            div {
                class: "min-h-screen bg-gray-50 flex items-center justify-center",
                div {
                    class: "bg-white p-6 rounded-lg shadow-md text-center",
                    p { class: "text-red-500 text-lg mb-4", "{message}" }
                    Link {
                        to: Route::ResourceList {},
                        class: "mt-4 inline-block px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600",
                        "Back to Resources"
                    }
                }
            }
        },
        ResourceDetailState::Loaded(resource) => rsx! { ResourceArticle { resource: resource } },
    }
}

#[component]
fn ResourceArticle(resource: Resource) -> Element {
    let published = resource.date.as_deref().map(long_date);

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 py-12 px-4 sm:px-6 lg:px-8",
            div {
                class: "max-w-4xl mx-auto",
                Link {
                    to: Route::ResourceList {},
                    class: "mb-8 flex items-center text-blue-600 hover:text-blue-800 transition-colors duration-150",
                    "\u{2190} Back to Resources"
                }

                article {
                    class: "bg-white rounded-lg shadow-xl overflow-hidden",

                    if let Some(image_url) = &resource.image_url {
                        div {
                            class: "h-72 sm:h-80 md:h-96 overflow-hidden",
                            img {
                                src: "{image_url}",
                                alt: "{resource.title}",
                                class: "w-full h-full object-cover"
                            }
                        }
                    }

                    div {
                        class: "p-6 sm:p-8",
                        div {
                            class: "flex flex-wrap items-center mb-4 text-sm",
                            CategoryBadge { category: resource.category.clone() }
                            if let Some(date) = published {
                                span { class: "text-gray-500", "Published: {date}" }
                            } else {
                                span { class: "text-gray-500", "Date not available" }
                            }
                        }

                        h1 {
                            class: "text-2xl sm:text-3xl font-bold text-gray-900 mb-4 leading-tight",
                            "{resource.title}"
                        }

                        p {
                            class: "text-md sm:text-lg text-gray-700 mb-6 leading-relaxed",
                            "{resource.description}"
                        }

                        if let Some(content) = &resource.content {
                            div {
                                class: "prose max-w-none text-gray-800 leading-loose",
                                p { "{content}" }
                            }
                        }

                        if let Some(url) = &resource.url {
                            div {
                                class: "mt-8",
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "inline-flex items-center px-6 py-3 border border-transparent text-base font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors duration-150",
                                    "View Original Source"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
