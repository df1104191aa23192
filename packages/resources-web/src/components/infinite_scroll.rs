//! Scroll-triggered "load more" container

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::LoadingDots;
use crate::util::browser;
use crate::util::{DebounceOptions, Debouncer};

const SCROLL_THROTTLE: Duration = Duration::from_millis(150);

/// Props for InfiniteScroll
#[derive(Props, Clone, PartialEq)]
pub struct InfiniteScrollProps {
    /// Number of items currently rendered. `next` fires at most once per value.
    pub data_length: usize,
    pub next: EventHandler<()>,
    pub has_more: bool,
    /// Shown while a `next` call is outstanding. Defaults to [`LoadingDots`].
    pub loader: Option<Element>,
    /// Shown once `has_more` is false.
    pub end_message: Option<Element>,
    /// Fraction of the content that must be scrolled past, `0.0..=1.0`.
    #[props(default = 0.8)]
    pub scroll_threshold: f64,
    /// CSS height of the scroll container, e.g. `"600px"`.
    pub height: Option<String>,
    #[props(default = "infinite-scroll".to_string())]
    pub scrollable_id: String,
    pub children: Element,
}

/// Whether the scroll position has crossed `threshold` of the content.
pub fn should_load_more(
    scroll_top: f64,
    client_height: f64,
    scroll_height: f64,
    threshold: f64,
) -> bool {
    if scroll_height <= 0.0 {
        return false;
    }
    (scroll_top + client_height) / scroll_height >= threshold.clamp(0.0, 1.0)
}

/// Whether `next` should fire for the current item count.
///
/// `requested_for` is the item count the last `next` call was made at;
/// `metrics` is `(scroll_top, client_height, scroll_height)` when the
/// container is measurable.
pub fn should_request_more(
    has_more: bool,
    requested_for: Option<usize>,
    data_length: usize,
    metrics: Option<(f64, f64, f64)>,
    threshold: f64,
) -> bool {
    if !has_more || requested_for == Some(data_length) {
        return false;
    }

    metrics.is_some_and(|(top, client, height)| should_load_more(top, client, height, threshold))
}

/// Throttle applied to scroll events before the trigger is checked.
pub fn scroll_throttle() -> Debouncer<()> {
    Debouncer::new(DebounceOptions::throttle(SCROLL_THROTTLE))
}

/// Container that asks for more items as the user nears its end
#[component]
pub fn InfiniteScroll(props: InfiniteScrollProps) -> Element {
    let requested_for = use_signal(|| None::<usize>);
    let throttle = use_signal(scroll_throttle);
    let mut timer_running = use_signal(|| false);

    let trigger = LoadMoreTrigger {
        scrollable_id: props.scrollable_id.clone(),
        threshold: props.scroll_threshold,
        has_more: props.has_more,
        data_length: props.data_length,
        next: props.next,
        requested_for,
    };

    // The timer task outlives this render, so it reads the latest trigger.
    let mut latest = use_hook(|| CopyValue::new(trigger.clone()));
    latest.set(trigger);

    let waiting = props.has_more && requested_for() == Some(props.data_length);
    let style = match &props.height {
        Some(height) => format!("height: {height}; overflow: auto;"),
        None => "overflow: auto;".to_string(),
    };

    rsx! {
        div {
            id: "{props.scrollable_id}",
            style: "{style}",
            onscroll: move |_| {
                if cfg!(not(feature = "web")) {
                    return;
                }

                let mut throttle = throttle;
                let fired = throttle.write().call(browser::now(), ()).is_some();
                if fired {
                    latest.cloned().check();
                }

                // One timer task drives trailing edges until the burst ends.
                if timer_running() {
                    return;
                }
                timer_running.set(true);
                spawn(async move {
                    loop {
                        let Some(deadline) = throttle.peek().deadline() else {
                            break;
                        };
                        browser::sleep(deadline.saturating_sub(browser::now())).await;

                        let fired = throttle.write().poll(browser::now()).is_some();
                        if fired {
                            latest.cloned().check();
                        }
                    }
                    timer_running.set(false);
                });
            },

            {props.children}

            {scroll_footer(waiting, props.has_more, props.loader.clone(), props.end_message.clone())}
        }
    }
}

/// Loader while a request is outstanding, end message once exhausted.
fn scroll_footer(
    waiting: bool,
    has_more: bool,
    loader: Option<Element>,
    end_message: Option<Element>,
) -> Element {
    if !has_more {
        return end_message.unwrap_or_else(|| rsx! {});
    }

    if !waiting {
        return rsx! {};
    }

    loader.unwrap_or_else(|| {
        rsx! {
            div { class: "flex justify-center py-4", LoadingDots {} }
        }
    })
}

#[derive(Clone)]
struct LoadMoreTrigger {
    scrollable_id: String,
    threshold: f64,
    has_more: bool,
    data_length: usize,
    next: EventHandler<()>,
    requested_for: Signal<Option<usize>>,
}

impl LoadMoreTrigger {
    fn check(&self) {
        let requested_for = *self.requested_for.peek();
        let metrics = browser::scroll_metrics(&self.scrollable_id);

        if should_request_more(
            self.has_more,
            requested_for,
            self.data_length,
            metrics,
            self.threshold,
        ) {
            tracing::debug!(data_length = self.data_length, "Requesting more items");
            let mut requested_for = self.requested_for;
            requested_for.set(Some(self.data_length));
            self.next.call(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const NEAR_END: Option<(f64, f64, f64)> = Some((750.0, 100.0, 1000.0));
    const NEAR_TOP: Option<(f64, f64, f64)> = Some((0.0, 100.0, 1000.0));

    #[test]
    fn test_not_yet_at_threshold() {
        assert!(!should_load_more(0.0, 100.0, 1000.0, 0.8));
        assert!(!should_load_more(690.0, 100.0, 1000.0, 0.8));
    }

    #[test]
    fn test_at_threshold() {
        assert!(should_load_more(700.0, 100.0, 1000.0, 0.8));
        assert!(should_load_more(900.0, 100.0, 1000.0, 0.8));
    }

    #[test]
    fn test_short_content_triggers_immediately() {
        assert!(should_load_more(0.0, 500.0, 400.0, 0.8));
    }

    #[test]
    fn test_empty_container_never_triggers() {
        assert!(!should_load_more(0.0, 0.0, 0.0, 0.8));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert!(should_load_more(900.0, 100.0, 1000.0, 1.5));
        assert!(should_load_more(0.0, 1.0, 1000.0, -1.0));
    }

    #[test]
    fn test_request_fires_once_per_data_length() {
        assert!(should_request_more(true, None, 10, NEAR_END, 0.8));
        // Already asked at this length; wait for new items.
        assert!(!should_request_more(true, Some(10), 10, NEAR_END, 0.8));
        // New items arrived, so the next crossing asks again.
        assert!(should_request_more(true, Some(10), 20, NEAR_END, 0.8));
    }

    #[test]
    fn test_request_needs_has_more_and_threshold() {
        assert!(!should_request_more(false, None, 10, NEAR_END, 0.8));
        assert!(!should_request_more(true, None, 10, NEAR_TOP, 0.8));
        assert!(!should_request_more(true, None, 10, None, 0.8));
    }

    #[test]
    fn test_scroll_burst_is_throttled() {
        let ms = Duration::from_millis;
        let mut throttle = scroll_throttle();
        let mut checks = Vec::new();

        // Scroll events every 10ms until 200ms, with the timer polling at
        // each deadline, the way the component drives it.
        for t in (0..=400).step_by(10) {
            let now = ms(t);
            if throttle.deadline().is_some_and(|deadline| deadline <= now) && throttle.poll(now).is_some() {
                checks.push(t);
            }
            if t <= 200 && throttle.call(now, ()).is_some() {
                checks.push(t);
            }
        }

        assert_eq!(checks, vec![0, 150, 300]);
        assert_eq!(throttle.deadline(), None);
    }

    thread_local! {
        static RENDERED: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    }

    fn rendered() -> Vec<&'static str> {
        let mut names = RENDERED.with(|r| r.borrow().clone());
        names.sort_unstable();
        names
    }

    #[component]
    fn Marker(name: &'static str) -> Element {
        RENDERED.with(|r| r.borrow_mut().push(name));
        rsx! { span { "{name}" } }
    }

    fn render(app: fn() -> Element) -> Vec<&'static str> {
        RENDERED.with(|r| r.borrow_mut().clear());
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        rendered()
    }

    #[test]
    fn test_end_message_once_exhausted() {
        fn Exhausted() -> Element {
            rsx! {
                InfiniteScroll {
                    data_length: 3,
                    next: move |_| {},
                    has_more: false,
                    loader: rsx! { Marker { name: "loader" } },
                    end_message: rsx! { Marker { name: "end" } },
                    Marker { name: "item" }
                }
            }
        }

        assert_eq!(render(Exhausted), vec!["end", "item"]);
    }

    #[test]
    fn test_no_footer_before_first_request() {
        fn MoreToCome() -> Element {
            rsx! {
                InfiniteScroll {
                    data_length: 3,
                    next: move |_| {},
                    has_more: true,
                    loader: rsx! { Marker { name: "loader" } },
                    end_message: rsx! { Marker { name: "end" } },
                    Marker { name: "item" }
                }
            }
        }

        assert_eq!(render(MoreToCome), vec!["item"]);
    }

    #[test]
    fn test_loader_while_waiting() {
        fn Waiting() -> Element {
            scroll_footer(
                true,
                true,
                Some(rsx! { Marker { name: "loader" } }),
                Some(rsx! { Marker { name: "end" } }),
            )
        }

        assert_eq!(render(Waiting), vec!["loader"]);
    }

    #[test]
    fn test_footer_prefers_end_message_over_loader() {
        fn Finished() -> Element {
            scroll_footer(
                true,
                false,
                Some(rsx! { Marker { name: "loader" } }),
                Some(rsx! { Marker { name: "end" } }),
            )
        }

        assert_eq!(render(Finished), vec!["end"]);
    }
}
