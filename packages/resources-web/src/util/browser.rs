//! Thin wrappers over browser APIs
//!
//! Each helper degrades to a no-op (or `None`) outside the web build so
//! server-rendered components can call them unconditionally.

use std::time::Duration;

/// `window.location.origin`, when running in a browser.
pub fn page_origin() -> Option<String> {
    #[cfg(feature = "web")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }

    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Full page reload. This is the only recovery path after a failed load.
pub fn reload_page() {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                tracing::error!("Page reload failed: {:?}", e);
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        tracing::warn!("Page reload requested outside the browser; ignoring");
    }
}

/// Monotonic time since page load, from `performance.now()`.
pub fn now() -> Duration {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| Duration::from_secs_f64(p.now() / 1000.0))
            .unwrap_or_default()
    }

    #[cfg(not(feature = "web"))]
    {
        Duration::ZERO
    }
}

/// `(scroll_top, client_height, scroll_height)` of the element with `id`.
pub fn scroll_metrics(id: &str) -> Option<(f64, f64, f64)> {
    #[cfg(feature = "web")]
    {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        Some((
            element.scroll_top() as f64,
            element.client_height() as f64,
            element.scroll_height() as f64,
        ))
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = id;
        None
    }
}

/// Resolves after `duration` on the platform timer.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "web")]
    {
        gloo_timers::future::sleep(duration).await;
    }

    #[cfg(all(feature = "server", not(feature = "web")))]
    {
        tokio::time::sleep(duration).await;
    }

    #[cfg(not(any(feature = "web", feature = "server")))]
    {
        let _ = duration;
    }
}
