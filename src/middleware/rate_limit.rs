//! Rate limiting middleware
//!
//! Sliding-window limiter for SIGNUP and LOGIN attempts per client IP.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

/// Tracked clients before idle entries are swept on the next check
const PRUNE_THRESHOLD: usize = 1024;

/// Simple rate limiter
pub struct RateLimiter {
    requests: HashMap<IpAddr, Vec<Instant>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            requests: HashMap::new(),
            max_requests,
            window,
        }
    }

    /// Records an attempt if allowed.
    ///
    /// Returns `Err(retry_after)` when the window is full.
    pub fn check(&mut self, client: IpAddr) -> Result<(), Duration> {
        self.check_at(client, Instant::now())
    }

    fn check_at(&mut self, client: IpAddr, now: Instant) -> Result<(), Duration> {
        if self.requests.len() >= PRUNE_THRESHOLD {
            self.prune_at(now);
        }

        let window = self.window;
        let entry = self.requests.entry(client).or_default();

        // Remove old requests
        entry.retain(|&time| now.duration_since(time) < window);

        if entry.len() < self.max_requests {
            entry.push(now);
            Ok(())
        } else {
            let oldest = entry.first().copied().unwrap_or(now);
            Err(window.saturating_sub(now.duration_since(oldest)))
        }
    }

    /// Drops clients with no attempts inside the window.
    fn prune_at(&mut self, now: Instant) {
        let window = self.window;
        self.requests
            .retain(|_, times| times.iter().any(|&t| now.duration_since(t) < window));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([10, 0, 0, last])
    }

    #[test]
    fn test_limit_per_client() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(60));
        assert!(limiter.check(ip(1)).is_ok());
        assert!(limiter.check(ip(1)).is_ok());
        assert!(limiter.check(ip(1)).is_err());
        assert!(limiter.check(ip(2)).is_ok());
    }

    #[test]
    fn test_window_expiry() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(10));
        let start = Instant::now();
        assert!(limiter.check_at(ip(1), start).is_ok());

        let retry = limiter.check_at(ip(1), start + Duration::from_secs(4)).unwrap_err();
        assert_eq!(retry, Duration::from_secs(6));

        assert!(limiter.check_at(ip(1), start + Duration::from_secs(11)).is_ok());
    }

    #[test]
    fn test_idle_clients_swept_past_threshold() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(10));
        let start = Instant::now();
        for n in 0..PRUNE_THRESHOLD {
            let client = IpAddr::from([10, 1, (n / 256) as u8, (n % 256) as u8]);
            limiter.check_at(client, start).unwrap();
        }
        assert_eq!(limiter.requests.len(), PRUNE_THRESHOLD);

        limiter.check_at(ip(1), start + Duration::from_secs(11)).unwrap();
        assert_eq!(limiter.requests.len(), 1);
    }
}
