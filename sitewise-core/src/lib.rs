//! Core domain types for the Sitewise scoring engine.
//!
//! The crate models the inputs and outputs of business viability scoring:
//! a validated [`LocationProfile`], the closed set of scored archetypes
//! ([`BusinessKind`] and [`FranchiseBrand`]) with their static economics,
//! the normalised [`FactorScores`] derived from a location, and the
//! recommendation records handed to presentation layers.
//!
//! It also defines the seams the scorer relies on without owning: an
//! injectable [`RandomSource`] for cosmetic data, and the
//! [`LocationAnalyticsProvider`] family of collaborator traits for the
//! geospatial data source.
//!
//! Nothing here performs I/O. Validation happens up front so scoring code can
//! assume finite inputs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod archetype;
pub mod catalog;
pub mod location;
pub mod normalizer;
pub mod provider;
pub mod random;
pub mod recommendation;
pub mod risk;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use archetype::{BusinessKind, FranchiseBrand, FranchiseCategory, ParseArchetypeError};
pub use catalog::{
    ArchetypeWeights, BUSINESS_CATALOG, BusinessProfile, FRANCHISE_CATALOG, FranchiseContact,
    FranchiseProfile,
};
pub use location::{LocationProfile, LocationProfileError};
pub use normalizer::FactorScores;
pub use provider::{
    AnalyticsCache, CacheKey, CachedProvider, LocationAnalyticsProvider, ProviderError,
    RateLimiter, TokenBucket, TtlCache,
};
pub use random::{RandomSource, SeededRandom, shuffle};
pub use recommendation::{
    BusinessMetrics, BusinessStatus, FranchiseMetrics, FranchiseRecommendation, LocalBusiness,
    ReviewFlag, ScoredRecommendation,
};
pub use risk::RiskTier;
