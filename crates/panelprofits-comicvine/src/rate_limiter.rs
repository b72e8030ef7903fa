// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;
use tokio::sync::{Mutex, Semaphore, SemaphorePermit};
use tokio::time::{sleep, Duration, Instant};

/// Rate limiter for Comic Vine API calls.
///
/// Comic Vine asks clients to stay under one request per second. This
/// implementation uses a semaphore and enforces a minimum delay between the
/// completion of one request and the start of the next.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    min_interval: Duration,
    last_completed: Arc<Mutex<Option<Instant>>>,
}

/// Permit covering a single request, held for the duration of the transport
/// call so concurrent callers stay serialized.
///
/// Call [`complete`](RateLimitGuard::complete) once the round-trip succeeds;
/// the next request is then spaced from this one's completion. A failed
/// request drops the guard without stamping, leaving the previous timestamp
/// in place.
#[derive(Debug)]
pub struct RateLimitGuard<'a> {
    _permit: SemaphorePermit<'a>,
    last_completed: &'a Mutex<Option<Instant>>,
}

impl RateLimitGuard<'_> {
    /// Record the completion time of the request this permit covered.
    pub async fn complete(self) {
        *self.last_completed.lock().await = Some(Instant::now());
    }
}

impl RateLimiter {
    /// Create a new rate limiter with the specified minimum interval between
    /// requests.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(1)),
            min_interval,
            last_completed: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a rate limiter with Comic Vine defaults (1 request per second).
    pub fn comicvine_default() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Wait until a request can be made according to the rate limit.
    pub async fn acquire(&self) -> RateLimitGuard<'_> {
        let permit = self.semaphore.acquire().await.expect("semaphore closed");

        {
            let last = self.last_completed.lock().await;
            if let Some(last_instant) = *last {
                let elapsed = last_instant.elapsed();
                if elapsed < self.min_interval {
                    let wait_time = self.min_interval - elapsed;
                    tracing::trace!(
                        target: "comicvine",
                        "rate limiting: waiting {:?}",
                        wait_time
                    );
                    sleep(wait_time).await;
                }
            }
        }

        RateLimitGuard {
            _permit: permit,
            last_completed: &self.last_completed,
        }
    }
}
