//! Resource card component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::types::{Category, Resource};
use crate::util::short_date;

/// Everything a card shows, derived from a [`Resource`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceCardModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub badge_class: &'static str,
    pub badge_label: String,
    pub date_label: Option<String>,
    pub detail_route: Route,
}

impl From<&Resource> for ResourceCardModel {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id.clone(),
            title: resource.title.clone(),
            description: resource.description.clone(),
            image_url: resource.image_url.clone(),
            badge_class: resource.category.badge_class(),
            badge_label: resource.category.label(),
            date_label: resource.date.as_deref().map(short_date),
            detail_route: Route::ResourceDetail {
                id: resource.id.clone(),
            },
        }
    }
}

/// Props for ResourceCard
#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub card: ResourceCardModel,
}

/// Card for one resource in the list grid
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let card = &props.card;

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow duration-300",

            if let Some(image_url) = &card.image_url {
                div {
                    class: "h-48 overflow-hidden",
                    img {
                        src: "{image_url}",
                        alt: "{card.title}",
                        class: "w-full h-full object-cover"
                    }
                }
            }

            div {
                class: "p-6",
                div {
                    class: "flex items-center mb-2",
                    span {
                        class: "px-2 py-1 text-xs font-semibold rounded-full {card.badge_class}",
                        "{card.badge_label}"
                    }
                    if let Some(date) = &card.date_label {
                        span { class: "ml-2 text-sm text-gray-500", "{date}" }
                    }
                }
                h3 {
                    class: "text-xl font-semibold text-gray-900 mb-2",
                    "{card.title}"
                }
                p {
                    class: "text-gray-600 mb-4",
                    "{card.description}"
                }
                Link {
                    to: card.detail_route.clone(),
                    class: "inline-flex items-center text-blue-600 hover:text-blue-800",
                    "Learn More"
                    ChevronRight {}
                }
            }
        }
    }
}

/// Category badge, used by the detail page
#[component]
pub fn CategoryBadge(category: Category) -> Element {
    rsx! {
        span {
            class: "px-3 py-1 font-semibold rounded-full mr-3 mb-2 sm:mb-0 {category.badge_class()}",
            "{category.label()}"
        }
    }
}

#[component]
fn ChevronRight() -> Element {
    rsx! {
        svg {
            class: "ml-2 w-4 h-4",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M9 5l7 7-7 7"
            }
        }
    }
}
