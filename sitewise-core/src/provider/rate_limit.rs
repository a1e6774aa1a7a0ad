//! Token-bucket rate limiting for upstream analytics requests.

use std::time::{Duration, Instant};

/// Requests admitted per window by [`TokenBucket::default`].
pub const DEFAULT_CAPACITY: u32 = 30;
/// Window over which a full bucket refills.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Admission control injected into
/// [`CachedProvider`](super::CachedProvider).
pub trait RateLimiter {
    /// Take one permit at `now`.
    ///
    /// # Errors
    ///
    /// Returns the time to wait before a permit becomes available.
    fn try_acquire(&mut self, now: Instant) -> Result<(), Duration>;
}

/// Token bucket that refills continuously at `capacity / window`.
///
/// # Examples
/// ```
/// use std::time::{Duration, Instant};
/// use sitewise_core::{RateLimiter, TokenBucket};
///
/// let start = Instant::now();
/// let mut bucket = TokenBucket::new(1, Duration::from_secs(10), start);
/// assert!(bucket.try_acquire(start).is_ok());
/// assert!(bucket.try_acquire(start).is_err());
/// assert!(bucket.try_acquire(start + Duration::from_secs(10)).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TokenBucket {
    capacity: f64,
    tokens: f64,
    refill_per_sec: f64,
    last_refill: Instant,
}

impl TokenBucket {
    /// Create a full bucket admitting `capacity` requests per `window`.
    ///
    /// A zero capacity is treated as one and a zero window as one second.
    #[must_use]
    pub fn new(capacity: u32, window: Duration, now: Instant) -> Self {
        let permits = f64::from(capacity.max(1));
        let window_secs = if window.is_zero() {
            1.0
        } else {
            window.as_secs_f64()
        };
        Self {
            capacity: permits,
            tokens: permits,
            refill_per_sec: permits / window_secs,
            last_refill: now,
        }
    }

    /// Create a bucket with [`DEFAULT_CAPACITY`] per [`DEFAULT_WINDOW`].
    #[must_use]
    pub fn with_defaults(now: Instant) -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_WINDOW, now)
    }

    /// Permits currently available, after refilling to `now`.
    #[must_use]
    pub fn available(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.last_refill).as_secs_f64();
        (self.tokens + elapsed * self.refill_per_sec).min(self.capacity)
    }

    fn refill(&mut self, now: Instant) {
        if now > self.last_refill {
            self.tokens = self.available(now);
            self.last_refill = now;
        }
    }
}

impl RateLimiter for TokenBucket {
    fn try_acquire(&mut self, now: Instant) -> Result<(), Duration> {
        self.refill(now);
        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            return Ok(());
        }
        let missing = 1.0 - self.tokens;
        Err(Duration::from_secs_f64(missing / self.refill_per_sec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn full_bucket_admits_capacity_then_refuses() {
        let start = Instant::now();
        let mut bucket = TokenBucket::with_defaults(start);
        for _ in 0..DEFAULT_CAPACITY {
            assert!(bucket.try_acquire(start).is_ok());
        }
        let wait = bucket.try_acquire(start).expect_err("bucket should be empty");
        assert_eq!(wait, Duration::from_secs(2));
    }

    #[rstest]
    fn partial_refill_admits_one_request() {
        let start = Instant::now();
        let mut bucket = TokenBucket::new(2, Duration::from_secs(10), start);
        assert!(bucket.try_acquire(start).is_ok());
        assert!(bucket.try_acquire(start).is_ok());
        assert!(bucket.try_acquire(start + Duration::from_secs(4)).is_err());
        assert!(bucket.try_acquire(start + Duration::from_secs(6)).is_ok());
    }

    #[rstest]
    fn idle_time_never_overfills() {
        let start = Instant::now();
        let bucket = TokenBucket::new(3, Duration::from_secs(1), start);
        let later = start + Duration::from_secs(3600);
        assert!((bucket.available(later) - 3.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn zero_capacity_and_window_fall_back_to_one_per_second() {
        let start = Instant::now();
        let mut bucket = TokenBucket::new(0, Duration::ZERO, start);
        assert!((bucket.available(start) - 1.0).abs() < f64::EPSILON);
        assert!(bucket.try_acquire(start).is_ok());
        let wait = bucket.try_acquire(start).expect_err("single permit spent");
        assert_eq!(wait, Duration::from_secs(1));
        assert!(bucket.try_acquire(start + Duration::from_secs(1)).is_ok());
    }
}
