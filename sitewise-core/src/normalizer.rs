//! Feature normaliser mapping raw location attributes to factor scores.

use crate::catalog::ArchetypeWeights;
use crate::location::LocationProfile;

/// Population at which the population factor saturates.
pub const POPULATION_SATURATION: f64 = 100_000.0;
/// Average income at which the income factor saturates.
pub const INCOME_SATURATION: f64 = 50_000.0;
/// Competitor count at which the competition factor reaches zero.
pub const COMPETITOR_SATURATION: f64 = 10.0;
/// Business density at which the density factor saturates.
pub const DENSITY_SATURATION: f64 = 20.0;

/// Normalised location factors, each nominally in `[0, 1]`.
///
/// Education is a plain percentage ratio and is not capped, so callers that
/// skip validation may observe values above one.
///
/// # Examples
/// ```
/// use sitewise_core::{FactorScores, LocationProfile};
///
/// let location = LocationProfile::new(0.0, 0.0)
///     .with_population(500_000)
///     .with_avg_income(50_000.0)
///     .with_education_level(75.0)
///     .with_business_density(5.0)
///     .with_competitor_count(3);
/// let factors = FactorScores::from_location(&location);
/// assert_eq!(factors.population, 1.0);
/// assert_eq!(factors.density, 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    /// `min(population / 100_000, 1)`.
    pub population: f64,
    /// `min(avgIncome / 50_000, 1)`.
    pub income: f64,
    /// `educationLevel / 100`.
    pub education: f64,
    /// `max(0, 1 - competitorCount / 10)`.
    pub competition: f64,
    /// `min(businessDensity / 20, 1)`.
    pub density: f64,
}

impl FactorScores {
    /// Derive factor scores from a location.
    #[must_use]
    pub fn from_location(location: &LocationProfile) -> Self {
        Self {
            population: (location.population_f64() / POPULATION_SATURATION).min(1.0),
            income: (location.avg_income / INCOME_SATURATION).min(1.0),
            education: location.education_level / 100.0,
            competition: (1.0 - location.competitor_count_f64() / COMPETITOR_SATURATION).max(0.0),
            density: (location.business_density / DENSITY_SATURATION).min(1.0),
        }
    }

    /// Archetype-weighted sum of the five factors.
    ///
    /// Competition enters unweighted and traffic is the density factor scaled
    /// by the traffic weight. Terms are added in a fixed order so results are
    /// reproducible to the last bit.
    #[must_use]
    pub fn weighted_sum(&self, weights: &ArchetypeWeights) -> f64 {
        let traffic = weights.traffic * self.density;
        self.population * weights.population
            + self.income * weights.income
            + self.education * weights.education
            + self.competition
            + traffic
    }
}
