// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-window call limiter for the remote completion backend.
//!
//! Up to `max_calls` attempts are admitted from the start of a window; after
//! that every attempt is refused until `window` has elapsed since the window
//! began. The next attempt then opens a fresh window and counts as its first
//! call.

use std::time::Duration;

use folio_config::model::LimiterConfig;
use tokio::time::Instant;
use tracing::debug;

/// Window length and admission cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimiterPolicy {
    /// Length of one window, measured from its first admitted call.
    pub window: Duration,
    /// Calls admitted per window.
    pub max_calls: u32,
}

impl LimiterPolicy {
    /// Window length used when none is configured.
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);
    /// Admission cap used when none is configured.
    pub const DEFAULT_MAX_CALLS: u32 = 15;
}

impl Default for LimiterPolicy {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
            max_calls: Self::DEFAULT_MAX_CALLS,
        }
    }
}

impl From<&LimiterConfig> for LimiterPolicy {
    fn from(config: &LimiterConfig) -> Self {
        Self {
            window: Duration::from_secs(config.window_secs),
            max_calls: config.max_calls,
        }
    }
}

/// Counter state for the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateState {
    /// Calls admitted since `window_start`.
    pub call_count: u32,
    /// When the current window opened.
    pub window_start: Instant,
}

/// Gate in front of the remote completion call.
#[derive(Debug, Clone)]
pub struct CallLimiter {
    policy: LimiterPolicy,
    state: RateState,
}

impl CallLimiter {
    /// Creates a limiter whose first window opens at `now` with no calls made.
    pub fn new(policy: LimiterPolicy, now: Instant) -> Self {
        Self {
            policy,
            state: RateState {
                call_count: 0,
                window_start: now,
            },
        }
    }

    /// Tries to admit one call at `now`.
    ///
    /// A refused attempt leaves the state untouched.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.state.window_start);

        if elapsed >= self.policy.window {
            self.state = RateState {
                call_count: 1,
                window_start: now,
            };
            debug!("call limiter window rolled over");
            return true;
        }

        if self.state.call_count < self.policy.max_calls {
            self.state.call_count += 1;
            return true;
        }

        debug!(
            call_count = self.state.call_count,
            max_calls = self.policy.max_calls,
            "call limiter refused remote call"
        );
        false
    }

    /// Current window and admitted-call count.
    pub fn state(&self) -> RateState {
        self.state
    }

    /// The policy this limiter enforces.
    pub fn policy(&self) -> LimiterPolicy {
        self.policy
    }
}
