//! Per-client sliding-window rate limiter
//!
//! Keeps an ordered list of admitted-call timestamps per client identifier
//! and lazily prunes entries older than the window on every check. The
//! decision and the recording of the new call happen under the same map
//! entry guard, so two concurrent requests from one client cannot both
//! claim the last slot.
//!
//! The map grows with the number of distinct client identifiers and is
//! never compacted across clients; callers should treat that as a known
//! resource-growth caveat of the design.

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Length of the rolling admission window
pub const RATE_WINDOW: Duration = Duration::from_secs(60);

/// Calls admitted per client within one window
pub const MAX_CALLS: usize = 10;

/// Sliding-window call counter keyed by client identifier
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_calls: usize,
    windows: DashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    /// Create a limiter with the default window and budget
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(RATE_WINDOW, MAX_CALLS)
    }

    /// Create a limiter with explicit limits
    #[inline]
    #[must_use]
    pub fn with_limits(window: Duration, max_calls: usize) -> Self {
        Self {
            window,
            max_calls,
            windows: DashMap::new(),
        }
    }

    /// Decide whether a call from `client_id` is admitted right now
    ///
    /// Admission records the call; denial does not.
    #[must_use]
    pub fn admit(&self, client_id: &str) -> bool {
        self.admit_at(client_id, Instant::now())
    }

    /// Admission check against an explicit clock reading
    ///
    /// The prune-check-append sequence runs under the entry guard for
    /// `client_id`, which serializes concurrent checks for the same key
    /// without blocking unrelated clients.
    #[must_use]
    pub fn admit_at(&self, client_id: &str, now: Instant) -> bool {
        let mut entry = self.windows.entry(client_id.to_owned()).or_default();
        let calls = entry.value_mut();

        calls.retain(|t| now.duration_since(*t) < self.window);

        if calls.len() >= self.max_calls {
            tracing::debug!(client = client_id, "rate limit denial");
            return false;
        }

        calls.push(now);
        true
    }

    /// Number of distinct client identifiers currently tracked
    #[inline]
    #[must_use]
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }

    /// Calls currently counted against `client_id`
    ///
    /// Reads the raw list without pruning; intended for diagnostics.
    #[must_use]
    pub fn recorded_calls(&self, client_id: &str) -> usize {
        self.windows.get(client_id).map_or(0, |e| e.value().len())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
