//! Health Resources - Dioxus Fullstack Web Application
//!
//! Lists the articles, videos and tools served by the backend's
//! `/api/resources` endpoint, with a detail page per resource.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
#[cfg_attr(not(feature = "server"), allow(dead_code))]
mod config;
mod pages;
mod routes;
mod state;
mod types;
mod util;

#[allow(unreachable_code)]
fn main() -> anyhow::Result<()> {
    #[cfg(feature = "server")]
    {
        use anyhow::Context;
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        // Initialize logging
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,resources_web=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        let config = config::Config::from_env().context("Failed to load configuration")?;
        tracing::info!(api_url = %config.api_url, "Starting health resources web");
        api::init_api_url(config.api_url);
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    {
        // Build-time override; otherwise the page origin is used
        if let Some(url) = option_env!("RESOURCES_API_URL") {
            api::init_api_url(url.to_string());
        }
    }

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);

    Ok(())
}
