//! The "is searching" indicator.
//!
//! The indicator is cosmetic: results are filtered on every keystroke, and
//! this only decides whether a spinner is shown. Each query change pushes the
//! settle deadline out by the debounce window, so at most one deadline is
//! ever pending and the last change wins.
//!
//! Time is passed in explicitly, which keeps the state machine free of timers
//! and lets the event loop drive it from its own tick.

use std::time::{Duration, Instant};
use tracing::trace;

/// Default quiet period before the indicator clears
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct SearchIndicator {
    window: Duration,
    deadline: Option<Instant>,
}

impl Default for SearchIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchIndicator {
    pub fn new(window: Duration) -> Self {
        SearchIndicator {
            window,
            deadline: None,
        }
    }

    /// Record a query change at `now`.
    ///
    /// A non-blank query (re)starts the window, replacing any pending
    /// deadline. A blank query clears the indicator immediately.
    pub fn on_query_change(&mut self, now: Instant, query: &str) {
        if query.trim().is_empty() {
            self.deadline = None;
        } else {
            let deadline = now + self.window;
            trace!(window_ms = self.window.as_millis() as u64, "Search indicator restarted");
            self.deadline = Some(deadline);
        }
    }

    /// Whether the spinner should be visible at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.map_or(false, |deadline| now < deadline)
    }

    /// Settle the indicator if its deadline has passed.
    ///
    /// Returns `true` exactly once per settled window, which is the moment to
    /// redraw without the spinner.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline, e.g. when the view closes.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
