//! Business viability scoring for Sitewise locations.
//!
//! The crate turns a [`LocationProfile`] into ranked recommendations:
//! - **Business recommendations** score every [`BusinessKind`] against the
//!   location, project investment, revenue, profit and break-even figures,
//!   attach review flags for out-of-range outputs, and order the results by
//!   a blended priority.
//! - **Franchise recommendations** score every
//!   [`FranchiseBrand`](sitewise_core::FranchiseBrand) by market match.
//!
//! Both are pure functions of the location. The cosmetic generators (nearby
//! businesses, traffic series, idea analysis picks, market segment) take an
//! explicit [`RandomSource`] so callers decide how reproducible they are.
//!
//! # Examples
//!
//! ```
//! use sitewise_core::{BusinessKind, LocationProfile};
//! use sitewise_scorer::score_business_recommendations;
//!
//! let location = LocationProfile::new(12.97, 77.59)
//!     .with_population(500_000)
//!     .with_avg_income(50_000.0)
//!     .with_education_level(75.0)
//!     .with_business_density(5.0)
//!     .with_competitor_count(3);
//! let ranked = score_business_recommendations(&location).expect("valid location");
//! assert_eq!(ranked.len(), 5);
//! assert_eq!(ranked.first().map(|r| r.kind()), Some(BusinessKind::Restaurant));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod business;
mod franchise;
pub mod idea;
mod local;
mod market;
pub(crate) mod numeric;
mod ranker;
mod review;
mod traffic;

pub use business::MIN_BREAK_EVEN_MONTHS;
pub use franchise::{
    FRANCHISE_DENSITY_SATURATION, FRANCHISE_INCOME_SATURATION, FRANCHISE_POPULATION_SATURATION,
};
pub use idea::{BusinessIdeaAnalysis, analyze_business_idea};
pub use local::{CLOSED_THRESHOLD, FALLBACK_DISTANCE_KM};
pub use market::{
    DemandEstimate, DemandFactor, MarketOverview, MarketRisk, RiskImpact, SEGMENT_COUNT,
    market_overview,
};
pub use ranker::{priority, rank};
pub use review::REVIEW_BREAK_EVEN_MONTHS;
pub use traffic::{ParseTrafficPeriodError, TrafficPeriod, TrafficSample, traffic_series};

use sitewise_core::{
    BUSINESS_CATALOG, BusinessKind, FactorScores, FranchiseBrand, FranchiseRecommendation,
    LocationProfile, LocationProfileError, RandomSource, ScoredRecommendation,
};

/// Score and rank every business kind for a location.
///
/// The location is validated first; scoring never sees invalid input.
/// Results are ordered by priority, highest first, with ties in catalog
/// order. No local businesses are attached.
///
/// # Errors
/// Returns [`LocationProfileError`] when the location fails validation.
pub fn score_business_recommendations(
    location: &LocationProfile,
) -> Result<Vec<ScoredRecommendation>, LocationProfileError> {
    location.validate()?;
    let factors = FactorScores::from_location(location);
    let scored = BUSINESS_CATALOG
        .iter()
        .map(|profile| business::score_profile(profile, location, &factors))
        .collect();
    Ok(rank(scored))
}

/// Score and rank every business kind, attaching synthesised nearby
/// businesses to each recommendation.
///
/// Scores, figures and ordering match [`score_business_recommendations`];
/// only the cosmetic `localBusinesses` differ. Generation runs in ranked
/// order so a seeded source reproduces the same output.
///
/// # Errors
/// Returns [`LocationProfileError`] when the location fails validation.
pub fn score_business_recommendations_with_local_businesses<R>(
    location: &LocationProfile,
    reference_year: i32,
    random: &mut R,
) -> Result<Vec<ScoredRecommendation>, LocationProfileError>
where
    R: RandomSource + ?Sized,
{
    let ranked = score_business_recommendations(location)?;
    Ok(ranked
        .into_iter()
        .map(|rec| {
            let nearby =
                local::synthesize_local_businesses(rec.kind(), location, reference_year, random);
            rec.with_local_businesses(nearby)
        })
        .collect())
}

/// Score every franchise brand for a location, best market match first.
///
/// # Errors
/// Returns [`LocationProfileError`] when the location fails validation.
pub fn score_franchise_recommendations(
    location: &LocationProfile,
) -> Result<Vec<FranchiseRecommendation>, LocationProfileError> {
    location.validate()?;
    Ok(franchise::rank_franchises(location))
}

/// Score a single business kind after validating the location.
///
/// The result carries review flags but no priority; only the ranked entry
/// points attach that.
///
/// # Errors
/// Returns [`LocationProfileError`] when the location fails validation.
///
/// # Examples
/// ```
/// use sitewise_core::{BusinessKind, LocationProfile, RiskTier};
/// use sitewise_scorer::score_business_kind;
///
/// let location = LocationProfile::new(12.97, 77.59)
///     .with_population(500_000)
///     .with_avg_income(50_000.0)
///     .with_education_level(75.0)
///     .with_business_density(5.0)
///     .with_competitor_count(3);
/// let cafe = score_business_kind(BusinessKind::Cafe, &location).expect("valid location");
/// assert_eq!(cafe.score(), 58);
/// assert_eq!(cafe.investment(), 1_635_000);
/// assert_eq!(cafe.risk(), RiskTier::Medium);
/// ```
pub fn score_business_kind(
    kind: BusinessKind,
    location: &LocationProfile,
) -> Result<ScoredRecommendation, LocationProfileError> {
    location.validate()?;
    Ok(business::score_business(kind, location))
}

/// Score a single franchise brand after validating the location.
///
/// # Errors
/// Returns [`LocationProfileError`] when the location fails validation.
pub fn score_franchise_brand(
    brand: FranchiseBrand,
    location: &LocationProfile,
) -> Result<FranchiseRecommendation, LocationProfileError> {
    location.validate()?;
    Ok(franchise::score_franchise(brand, location))
}

#[cfg(test)]
mod tests;
