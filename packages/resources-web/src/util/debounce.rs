//! Debounced invocation control
//!
//! [`Debouncer`] holds no timer of its own. Callers pass the current time
//! into every method and, whenever [`Debouncer::deadline`] is `Some`, arrange
//! to call [`Debouncer::poll`] once that instant has passed. Methods that
//! decide an invocation should happen return the arguments to invoke with.
//!
//! Times are offsets from any fixed origin (`performance.now()` in the
//! browser), never wall-clock.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceOptions {
    /// Quiet period that ends a burst of calls.
    pub wait: Duration,
    /// Invoke on the first call of a burst.
    pub leading: bool,
    /// Invoke with the latest arguments once the burst ends.
    pub trailing: bool,
    /// Upper bound on how long a burst can postpone invocation.
    pub max_wait: Option<Duration>,
}

impl Default for DebounceOptions {
    fn default() -> Self {
        Self {
            wait: Duration::from_millis(300),
            leading: false,
            trailing: true,
            max_wait: None,
        }
    }
}

impl DebounceOptions {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            ..Self::default()
        }
    }

    /// Leading and trailing edges with `max_wait == wait`: at most one
    /// invocation per `wait` while calls keep arriving.
    pub fn throttle(wait: Duration) -> Self {
        Self {
            wait,
            leading: true,
            trailing: true,
            max_wait: Some(wait),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer<A> {
    options: DebounceOptions,
    pending: Option<A>,
    last_call: Option<Duration>,
    last_invoke: Duration,
    deadline: Option<Duration>,
}

impl<A> Debouncer<A> {
    pub fn new(mut options: DebounceOptions) -> Self {
        // A max wait shorter than the wait itself would never be reached.
        options.max_wait = options.max_wait.map(|max| max.max(options.wait));

        Self {
            options,
            pending: None,
            last_call: None,
            last_invoke: Duration::ZERO,
            deadline: None,
        }
    }

    pub fn options(&self) -> &DebounceOptions {
        &self.options
    }

    /// When the caller should next [`poll`](Self::poll), if at all.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Whether arguments are waiting for a trailing invocation.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a call. Returns the arguments to invoke with right now, if the
    /// leading edge or `max_wait` says so.
    pub fn call(&mut self, now: Duration, args: A) -> Option<A> {
        let invoking = self.should_invoke(now);
        self.pending = Some(args);
        self.last_call = Some(now);

        if invoking {
            if self.deadline.is_none() {
                return self.leading_edge(now);
            }
            if self.options.max_wait.is_some() {
                self.deadline = Some(now + self.options.wait);
                return self.invoke(now);
            }
        }

        if self.deadline.is_none() {
            self.deadline = Some(now + self.options.wait);
        }
        None
    }

    /// Timer callback. A poll before the deadline does nothing; a poll while
    /// calls are still arriving pushes the deadline out.
    pub fn poll(&mut self, now: Duration) -> Option<A> {
        match self.deadline {
            Some(deadline) if now >= deadline => {}
            _ => return None,
        }

        if self.should_invoke(now) {
            return self.trailing_edge(now);
        }

        self.deadline = Some(now + self.remaining_wait(now));
        None
    }

    /// Drop pending arguments and any scheduled deadline.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_call = None;
        self.last_invoke = Duration::ZERO;
        self.deadline = None;
    }

    /// Run the trailing edge immediately, if one is scheduled.
    pub fn flush(&mut self, now: Duration) -> Option<A> {
        if self.deadline.is_none() {
            return None;
        }
        self.trailing_edge(now)
    }

    fn should_invoke(&self, now: Duration) -> bool {
        let Some(last_call) = self.last_call else {
            return true;
        };
        // Time running backwards (a reset clock) starts a fresh burst.
        let Some(since_call) = now.checked_sub(last_call) else {
            return true;
        };

        since_call >= self.options.wait
            || self
                .options
                .max_wait
                .is_some_and(|max| now.saturating_sub(self.last_invoke) >= max)
    }

    fn remaining_wait(&self, now: Duration) -> Duration {
        let since_call = self
            .last_call
            .map(|last| now.saturating_sub(last))
            .unwrap_or_default();
        let waiting = self.options.wait.saturating_sub(since_call);

        match self.options.max_wait {
            Some(max) => waiting.min(max.saturating_sub(now.saturating_sub(self.last_invoke))),
            None => waiting,
        }
    }

    fn leading_edge(&mut self, now: Duration) -> Option<A> {
        self.last_invoke = now;
        self.deadline = Some(now + self.options.wait);

        if self.options.leading {
            self.invoke(now)
        } else {
            None
        }
    }

    fn trailing_edge(&mut self, now: Duration) -> Option<A> {
        self.deadline = None;

        if self.options.trailing && self.pending.is_some() {
            return self.invoke(now);
        }
        self.pending = None;
        None
    }

    fn invoke(&mut self, now: Duration) -> Option<A> {
        self.last_invoke = now;
        self.pending.take()
    }
}

impl<A> Default for Debouncer<A> {
    fn default() -> Self {
        Self::new(DebounceOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_trailing_edge_gets_latest_args() {
        let mut d = Debouncer::new(DebounceOptions::new(ms(100)));

        assert_eq!(d.call(ms(0), "a"), None);
        assert_eq!(d.call(ms(50), "b"), None);
        assert_eq!(d.deadline(), Some(ms(100)));

        // Still inside the quiet period measured from the last call.
        assert_eq!(d.poll(ms(100)), None);
        assert_eq!(d.deadline(), Some(ms(150)));

        assert_eq!(d.poll(ms(150)), Some("b"));
        assert_eq!(d.deadline(), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_poll_before_deadline_is_noop() {
        let mut d = Debouncer::new(DebounceOptions::new(ms(100)));
        d.call(ms(0), 1);

        assert_eq!(d.poll(ms(10)), None);
        assert!(d.is_pending());
    }

    #[test]
    fn test_leading_edge_fires_once_per_burst() {
        let mut d = Debouncer::new(DebounceOptions {
            wait: ms(100),
            leading: true,
            trailing: false,
            max_wait: None,
        });

        assert_eq!(d.call(ms(0), 1), Some(1));
        assert_eq!(d.call(ms(20), 2), None);
        assert_eq!(d.poll(ms(120)), None);
        assert_eq!(d.deadline(), None);

        // New burst after the quiet period.
        assert_eq!(d.call(ms(500), 3), Some(3));
    }

    #[test]
    fn test_leading_and_trailing() {
        let mut d = Debouncer::new(DebounceOptions {
            wait: ms(100),
            leading: true,
            trailing: true,
            max_wait: None,
        });

        assert_eq!(d.call(ms(0), 1), Some(1));
        assert_eq!(d.call(ms(30), 2), None);
        assert_eq!(d.poll(ms(130)), Some(2));
    }

    #[test]
    fn test_single_call_with_leading_does_not_repeat_on_trailing() {
        let mut d = Debouncer::new(DebounceOptions {
            wait: ms(100),
            leading: true,
            trailing: true,
            max_wait: None,
        });

        assert_eq!(d.call(ms(0), 1), Some(1));
        assert_eq!(d.poll(ms(100)), None);
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn test_max_wait_bounds_a_continuous_burst() {
        let mut d = Debouncer::new(DebounceOptions {
            wait: ms(100),
            leading: false,
            trailing: true,
            max_wait: Some(ms(250)),
        });

        let mut fired = Vec::new();
        for t in (0..=300).step_by(50) {
            if let Some(deadline) = d.deadline() {
                if deadline <= ms(t) {
                    fired.extend(d.poll(ms(t)));
                }
            }
            fired.extend(d.call(ms(t), t));
        }

        // The max-wait deadline at 250 fires with the latest args seen (200).
        assert_eq!(fired, vec![200]);
    }

    #[test]
    fn test_throttle_invokes_at_most_once_per_wait() {
        let mut d = Debouncer::new(DebounceOptions::throttle(ms(100)));

        let fired: Vec<u64> = (0..=250)
            .step_by(10)
            .filter_map(|t| d.call(ms(t), t))
            .collect();

        assert_eq!(fired, vec![0, 100, 200]);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut d = Debouncer::new(DebounceOptions::new(ms(100)));
        d.call(ms(0), "a");
        d.cancel();

        assert!(!d.is_pending());
        assert_eq!(d.deadline(), None);
        assert_eq!(d.poll(ms(200)), None);
        assert_eq!(d.flush(ms(200)), None);
    }

    #[test]
    fn test_flush_invokes_immediately() {
        let mut d = Debouncer::new(DebounceOptions::new(ms(100)));
        d.call(ms(0), "a");

        assert_eq!(d.flush(ms(10)), Some("a"));
        assert_eq!(d.deadline(), None);
        assert_eq!(d.flush(ms(20)), None);
    }

    #[test]
    fn test_max_wait_never_below_wait() {
        let d: Debouncer<()> = Debouncer::new(DebounceOptions {
            wait: ms(100),
            leading: false,
            trailing: true,
            max_wait: Some(ms(10)),
        });

        assert_eq!(d.options().max_wait, Some(ms(100)));
    }
}
