//! Sliding-window request limiter.

use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Caps calls to `calls` per `period`, waiting instead of failing.
///
/// A throttled caller sleeps until the oldest call in the window expires;
/// it never observes an error. This matters mid-pass: one delayed indicator
/// lookup must not abort a pass that has already spent money.
pub struct RateLimiter {
    calls: u32,
    period: Duration,
    history: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(calls: u32, period: Duration) -> Self {
        Self {
            calls,
            period,
            history: Mutex::new(VecDeque::with_capacity(calls as usize)),
        }
    }

    /// Wait until a call slot is available, then claim it.
    pub async fn acquire(&self) {
        loop {
            let now = Instant::now();
            let mut history = self.history.lock().await;

            while let Some(&oldest) = history.front() {
                if now.duration_since(oldest) >= self.period {
                    history.pop_front();
                } else {
                    break;
                }
            }

            if (history.len() as u32) < self.calls {
                history.push_back(now);
                return;
            }

            // Window is full; wait for the oldest entry to age out.
            let oldest = *history.front().unwrap();
            let wait = self.period - now.duration_since(oldest);
            drop(history);
            debug!("Rate limit reached, waiting {:?}", wait);
            sleep(wait).await;
        }
    }
}
