use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

const WINDOW: Duration = Duration::from_secs(3600);

/// Prune once the map tracks more addresses than this.
const PRUNE_THRESHOLD: usize = 1000;

/// Sliding one-hour window of attempts per client address.
#[derive(Debug)]
pub struct RateLimiter {
    max_per_hour: usize,
    entries: Mutex<HashMap<IpAddr, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_per_hour: usize) -> Self {
        Self {
            max_per_hour,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn max_per_hour(&self) -> usize {
        self.max_per_hour
    }

    /// Record an attempt from `ip`. Returns false when the address is over
    /// its hourly budget; rejected attempts are not recorded.
    pub async fn allow(&self, ip: IpAddr) -> bool {
        let mut limiter = self.entries.lock().await;
        if limiter.len() > PRUNE_THRESHOLD {
            prune_empty_entries(&mut limiter);
        }
        let entries = limiter.entry(ip).or_default();
        check_rate_limit(entries, Instant::now(), self.max_per_hour)
    }

    /// True when `ip` has spent its hourly budget. Records nothing.
    pub async fn is_exhausted(&self, ip: IpAddr) -> bool {
        let mut limiter = self.entries.lock().await;
        let Some(entries) = limiter.get_mut(&ip) else {
            return false;
        };
        let now = Instant::now();
        let cutoff = now.checked_sub(WINDOW).unwrap_or(now);
        entries.retain(|t| *t > cutoff);
        entries.len() >= self.max_per_hour
    }

    /// Count one attempt against `ip` unconditionally.
    pub async fn record(&self, ip: IpAddr) {
        let mut limiter = self.entries.lock().await;
        if limiter.len() > PRUNE_THRESHOLD {
            prune_empty_entries(&mut limiter);
        }
        limiter.entry(ip).or_default().push(Instant::now());
    }
}

/// Check rate limit for an IP. Returns true if the request is allowed, false if rate-limited.
/// Prunes expired entries and records the new request if allowed.
pub fn check_rate_limit(entries: &mut Vec<Instant>, now: Instant, max_per_hour: usize) -> bool {
    let cutoff = now.checked_sub(WINDOW).unwrap_or(now);
    entries.retain(|t| *t > cutoff);
    if entries.len() >= max_per_hour {
        return false;
    }
    entries.push(now);
    true
}

/// Drop addresses whose attempts have all aged out.
pub fn prune_empty_entries(limiter: &mut HashMap<IpAddr, Vec<Instant>>) {
    let now = Instant::now();
    let cutoff = now.checked_sub(WINDOW).unwrap_or(now);
    limiter.retain(|_, entries| {
        entries.retain(|t| *t > cutoff);
        !entries.is_empty()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn allows_exactly_at_limit() {
        let mut entries = Vec::new();
        let now = Instant::now();
        for _ in 0..10 {
            assert!(check_rate_limit(&mut entries, now, 10));
        }
        assert_eq!(entries.len(), 10);
    }

    #[test]
    fn rejects_over_limit_without_recording() {
        let mut entries = Vec::new();
        let now = Instant::now();
        for _ in 0..3 {
            assert!(check_rate_limit(&mut entries, now, 3));
        }
        assert!(!check_rate_limit(&mut entries, now, 3));
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn expires_old_entries() {
        let Some(old) = Instant::now().checked_sub(Duration::from_secs(3601)) else {
            return;
        };
        let mut entries = vec![old; 10];
        assert!(check_rate_limit(&mut entries, Instant::now(), 10));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn prune_drops_stale_addresses() {
        let Some(old) = Instant::now().checked_sub(Duration::from_secs(7200)) else {
            return;
        };
        let mut limiter = HashMap::new();
        limiter.insert(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), vec![old]);
        limiter.insert(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), vec![Instant::now()]);

        prune_empty_entries(&mut limiter);
        assert_eq!(limiter.len(), 1);
        assert!(limiter.contains_key(&IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))));
    }

    #[tokio::test]
    async fn limiter_tracks_addresses_separately() {
        let limiter = RateLimiter::new(1);
        let a = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
        let b = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 2));

        assert!(limiter.allow(a).await);
        assert!(!limiter.allow(a).await);
        assert!(limiter.allow(b).await);
    }

    #[tokio::test]
    async fn recorded_attempts_exhaust_budget() {
        let limiter = RateLimiter::new(2);
        let ip = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 9));

        assert!(!limiter.is_exhausted(ip).await);
        limiter.record(ip).await;
        assert!(!limiter.is_exhausted(ip).await);
        limiter.record(ip).await;
        assert!(limiter.is_exhausted(ip).await);
        assert!(!limiter.is_exhausted(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10))).await);
    }
}
