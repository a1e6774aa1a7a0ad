//! Seams for the external location analytics data source.
//!
//! The scorer never fetches data itself. A [`LocationAnalyticsProvider`]
//! supplies [`LocationProfile`] values, and [`CachedProvider`] wraps one with
//! an injected [`AnalyticsCache`] and [`RateLimiter`] so no process-wide state
//! is involved. Time is passed in explicitly on every call.

mod cache;
mod error;
mod rate_limit;

use std::time::Instant;

use geo::Coord;

use crate::location::LocationProfile;

pub use cache::{AnalyticsCache, CacheKey, DEFAULT_MAX_AGE, DEFAULT_MAX_ENTRIES, TtlCache};
pub use error::ProviderError;
pub use rate_limit::{DEFAULT_CAPACITY, DEFAULT_WINDOW, RateLimiter, TokenBucket};

/// Source of location profiles, typically backed by a geospatial query.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use sitewise_core::{LocationAnalyticsProvider, LocationProfile, ProviderError};
///
/// struct FlatProvider;
///
/// impl LocationAnalyticsProvider for FlatProvider {
///     fn fetch(
///         &self,
///         centre: Coord<f64>,
///         radius_km: f64,
///     ) -> Result<LocationProfile, ProviderError> {
///         Ok(LocationProfile::new(centre.y, centre.x)
///             .with_population(10_000)
///             .with_radius(radius_km))
///     }
/// }
///
/// let profile = FlatProvider.fetch(Coord { x: 77.59, y: 12.97 }, 2.0)?;
/// assert_eq!(profile.radius_km(), 2.0);
/// # Ok::<(), ProviderError>(())
/// ```
pub trait LocationAnalyticsProvider {
    /// Fetch the profile of the circle around `centre`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the upstream source fails.
    fn fetch(&self, centre: Coord<f64>, radius_km: f64) -> Result<LocationProfile, ProviderError>;
}

/// Provider decorator adding caching and rate limiting.
///
/// Lookup order:
/// 1. a fresh cache entry is returned without touching the limiter;
/// 2. a refused permit falls back to a stale entry, or fails with
///    [`ProviderError::RateLimited`];
/// 3. fetched profiles are validated before they are cached;
/// 4. a failed fetch falls back to a stale entry when one exists.
#[derive(Debug)]
pub struct CachedProvider<P, C, L> {
    provider: P,
    cache: C,
    limiter: L,
}

impl<P, C, L> CachedProvider<P, C, L>
where
    P: LocationAnalyticsProvider,
    C: AnalyticsCache,
    L: RateLimiter,
{
    /// Wrap `provider` with `cache` and `limiter`.
    pub const fn new(provider: P, cache: C, limiter: L) -> Self {
        Self {
            provider,
            cache,
            limiter,
        }
    }

    /// Fetch a profile at `now`, consulting the cache and limiter first.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidQuery`] for malformed queries,
    /// [`ProviderError::RateLimited`] when the limiter refuses and nothing is
    /// cached, and the upstream or validation error when the fetch fails with
    /// nothing cached.
    pub fn fetch(
        &mut self,
        centre: Coord<f64>,
        radius_km: f64,
        now: Instant,
    ) -> Result<LocationProfile, ProviderError> {
        validate_query(centre, radius_km)?;
        let key = CacheKey::new(centre, radius_km);
        if let Some(fresh) = self.cache.get(&key, now) {
            return Ok(fresh);
        }

        if let Err(retry_after) = self.limiter.try_acquire(now) {
            return self.cache.get_stale(&key).map_or_else(
                || Err(ProviderError::RateLimited { retry_after }),
                |stale| {
                    log::debug!("rate limited; serving stale analytics entry");
                    Ok(stale)
                },
            );
        }

        let fetched = self.provider.fetch(centre, radius_km).and_then(|profile| {
            profile.validate()?;
            Ok(profile)
        });
        match fetched {
            Ok(profile) => {
                self.cache.set(key, profile.clone(), now);
                Ok(profile)
            }
            Err(err) => match self.cache.get_stale(&key) {
                Some(stale) => {
                    log::warn!("analytics fetch failed, serving stale entry: {err}");
                    Ok(stale)
                }
                None => Err(err),
            },
        }
    }

    /// Shared access to the cache.
    pub const fn cache(&self) -> &C {
        &self.cache
    }

    /// Exclusive access to the cache, for eviction or clearing.
    pub const fn cache_mut(&mut self) -> &mut C {
        &mut self.cache
    }

    /// Unwrap the decorator.
    pub fn into_parts(self) -> (P, C, L) {
        (self.provider, self.cache, self.limiter)
    }
}

fn validate_query(centre: Coord<f64>, radius_km: f64) -> Result<(), ProviderError> {
    if !centre.x.is_finite() || !centre.y.is_finite() || !radius_km.is_finite() {
        return Err(ProviderError::InvalidQuery {
            reason: "coordinates and radius must be finite".to_owned(),
        });
    }
    if !(-90.0..=90.0).contains(&centre.y) || !(-180.0..=180.0).contains(&centre.x) {
        return Err(ProviderError::InvalidQuery {
            reason: "coordinates out of range".to_owned(),
        });
    }
    if radius_km <= 0.0 {
        return Err(ProviderError::InvalidQuery {
            reason: "radius must be positive".to_owned(),
        });
    }
    Ok(())
}
