//! Deterministic doubles used by unit and behaviour tests.

use std::cell::Cell;

use geo::Coord;

use crate::{LocationAnalyticsProvider, LocationProfile, ProviderError, RandomSource};

/// [`RandomSource`] that cycles through a fixed sequence.
///
/// An empty sequence always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Cycle through `values`, which should lie in `[0, 1)`.
    #[must_use]
    pub const fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always return the same value.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        let Some(value) = self.values.get(self.cursor).copied() else {
            return 0.0;
        };
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

/// Provider returning a fixed profile and counting how often it was asked.
#[derive(Debug)]
pub struct StaticProvider {
    profile: Result<LocationProfile, ProviderError>,
    calls: Cell<usize>,
}

impl StaticProvider {
    /// Serve `profile` for every query.
    #[must_use]
    pub const fn new(profile: LocationProfile) -> Self {
        Self {
            profile: Ok(profile),
            calls: Cell::new(0),
        }
    }

    /// Fail every query with `error`.
    #[must_use]
    pub const fn failing(error: ProviderError) -> Self {
        Self {
            profile: Err(error),
            calls: Cell::new(0),
        }
    }

    /// Number of fetches served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl LocationAnalyticsProvider for StaticProvider {
    fn fetch(&self, centre: Coord<f64>, radius_km: f64) -> Result<LocationProfile, ProviderError> {
        self.calls.set(self.calls.get() + 1);
        self.profile.clone().map(|profile| LocationProfile {
            lat: centre.y,
            lng: centre.x,
            radius: Some(radius_km),
            ..profile
        })
    }
}

/// Busy city-centre location used across tests.
#[must_use]
pub fn sample_location() -> LocationProfile {
    LocationProfile::new(12.9716, 77.5946)
        .with_name("MG Road")
        .with_population(500_000)
        .with_avg_income(50_000.0)
        .with_education_level(75.0)
        .with_business_density(5.0)
        .with_competitor_count(3)
}
