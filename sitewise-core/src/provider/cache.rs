//! Bounded time-to-live cache for fetched location profiles.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use geo::Coord;

use crate::location::LocationProfile;

/// Entries kept before the oldest is evicted.
pub const DEFAULT_MAX_ENTRIES: usize = 100;
/// Age after which an entry stops counting as fresh.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Cache key derived from a query centre and radius.
///
/// Coordinates are quantised to micro-degrees and the radius to metres so the
/// key is hashable and nearly identical floats share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    lat_micro: i64,
    lng_micro: i64,
    radius_m: u64,
}

impl CacheKey {
    /// Build a key for a query.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "validated coordinates and radii fit comfortably; casts saturate otherwise"
    )]
    #[must_use]
    pub fn new(centre: Coord<f64>, radius_km: f64) -> Self {
        Self {
            lat_micro: (centre.y * 1e6).round() as i64,
            lng_micro: (centre.x * 1e6).round() as i64,
            radius_m: (radius_km * 1000.0).round() as u64,
        }
    }
}

/// Storage for fetched profiles, injected into
/// [`CachedProvider`](super::CachedProvider).
///
/// Time is always supplied by the caller so implementations stay
/// deterministic under test.
pub trait AnalyticsCache {
    /// Entry for `key` if it is younger than the cache's maximum age.
    fn get(&self, key: &CacheKey, now: Instant) -> Option<LocationProfile>;

    /// Entry for `key` regardless of age.
    fn get_stale(&self, key: &CacheKey) -> Option<LocationProfile>;

    /// Store `profile` under `key`, stamped with `now`.
    fn set(&mut self, key: CacheKey, profile: LocationProfile, now: Instant);

    /// Remove and return the entry for `key`.
    fn evict(&mut self, key: &CacheKey) -> Option<LocationProfile>;

    /// Remove every entry.
    fn clear(&mut self);
}

#[derive(Debug, Clone)]
struct Entry {
    profile: LocationProfile,
    stored_at: Instant,
}

/// In-memory [`AnalyticsCache`] with an entry cap and a freshness window.
///
/// When full, inserting a new key evicts the entry stored longest ago.
///
/// # Examples
/// ```
/// use std::time::{Duration, Instant};
/// use geo::Coord;
/// use sitewise_core::{AnalyticsCache, CacheKey, LocationProfile, TtlCache};
///
/// let mut cache = TtlCache::new(2, Duration::from_secs(60));
/// let key = CacheKey::new(Coord { x: 77.59, y: 12.97 }, 1.0);
/// let now = Instant::now();
/// cache.set(key, LocationProfile::new(12.97, 77.59), now);
/// assert!(cache.get(&key, now).is_some());
/// assert!(cache.get(&key, now + Duration::from_secs(61)).is_none());
/// assert!(cache.get_stale(&key).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct TtlCache {
    entries: HashMap<CacheKey, Entry>,
    max_entries: usize,
    max_age: Duration,
}

impl TtlCache {
    /// Create a cache holding at most `max_entries` entries.
    ///
    /// A zero `max_entries` is treated as one.
    #[must_use]
    pub fn new(max_entries: usize, max_age: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
            max_age,
        }
    }

    /// Number of stored entries, fresh or stale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.stored_at)
            .map(|(key, _)| *key);
        if let Some(key) = oldest {
            self.entries.remove(&key);
            log::debug!("evicted oldest analytics cache entry");
        }
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_MAX_AGE)
    }
}

impl AnalyticsCache for TtlCache {
    fn get(&self, key: &CacheKey, now: Instant) -> Option<LocationProfile> {
        self.entries
            .get(key)
            .filter(|entry| now.saturating_duration_since(entry.stored_at) <= self.max_age)
            .map(|entry| entry.profile.clone())
    }

    fn get_stale(&self, key: &CacheKey) -> Option<LocationProfile> {
        self.entries.get(key).map(|entry| entry.profile.clone())
    }

    fn set(&mut self, key: CacheKey, profile: LocationProfile, now: Instant) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            Entry {
                profile,
                stored_at: now,
            },
        );
    }

    fn evict(&mut self, key: &CacheKey) -> Option<LocationProfile> {
        self.entries.remove(key).map(|entry| entry.profile)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn key(lat: f64) -> CacheKey {
        CacheKey::new(Coord { x: 77.0, y: lat }, 1.0)
    }

    #[fixture]
    fn start() -> Instant {
        Instant::now()
    }

    #[rstest]
    fn nearly_equal_coordinates_share_a_key() {
        let a = CacheKey::new(Coord { x: 77.5946, y: 12.9716 }, 1.0);
        let b = CacheKey::new(Coord { x: 77.594_600_000_1, y: 12.9716 }, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, CacheKey::new(Coord { x: 77.5946, y: 12.9716 }, 2.0));
    }

    #[rstest]
    fn full_cache_evicts_oldest(start: Instant) {
        let mut cache = TtlCache::new(2, DEFAULT_MAX_AGE);
        cache.set(key(1.0), LocationProfile::new(1.0, 77.0), start);
        cache.set(key(2.0), LocationProfile::new(2.0, 77.0), start + Duration::from_secs(1));
        cache.set(key(3.0), LocationProfile::new(3.0, 77.0), start + Duration::from_secs(2));
        assert_eq!(cache.len(), 2);
        assert!(cache.get_stale(&key(1.0)).is_none());
        assert!(cache.get_stale(&key(2.0)).is_some());
        assert!(cache.get_stale(&key(3.0)).is_some());
    }

    #[rstest]
    fn overwriting_a_key_does_not_evict(start: Instant) {
        let mut cache = TtlCache::new(2, DEFAULT_MAX_AGE);
        cache.set(key(1.0), LocationProfile::new(1.0, 77.0), start);
        cache.set(key(2.0), LocationProfile::new(2.0, 77.0), start);
        cache.set(key(2.0), LocationProfile::new(2.0, 77.0).with_population(5), start);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&key(2.0), start).map(|p| p.population), Some(5));
    }

    #[rstest]
    fn entries_expire_but_remain_stale(start: Instant) {
        let mut cache = TtlCache::default();
        cache.set(key(1.0), LocationProfile::new(1.0, 77.0), start);
        let later = start + DEFAULT_MAX_AGE + Duration::from_secs(1);
        assert!(cache.get(&key(1.0), start + DEFAULT_MAX_AGE).is_some());
        assert!(cache.get(&key(1.0), later).is_none());
        assert!(cache.get_stale(&key(1.0)).is_some());
    }

    #[rstest]
    fn evict_and_clear_remove_entries(start: Instant) {
        let mut cache = TtlCache::default();
        cache.set(key(1.0), LocationProfile::new(1.0, 77.0), start);
        cache.set(key(2.0), LocationProfile::new(2.0, 77.0), start);
        assert!(cache.evict(&key(1.0)).is_some());
        assert!(cache.evict(&key(1.0)).is_none());
        cache.clear();
        assert!(cache.is_empty());
    }
}
