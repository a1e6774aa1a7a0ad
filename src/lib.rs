//! Facade crate for the Sitewise scoring engine.
//!
//! This crate re-exports the core domain types and the scorer entry points so
//! callers can depend on a single package. Serialisation support follows the
//! `serde` feature; deterministic test doubles follow `test-support`.

#![forbid(unsafe_code)]

pub use sitewise_core::{
    BusinessKind, BusinessStatus, CachedProvider, FactorScores, FranchiseBrand, FranchiseCategory,
    FranchiseRecommendation, LocalBusiness, LocationAnalyticsProvider, LocationProfile,
    LocationProfileError, ProviderError, RandomSource, ReviewFlag, RiskTier, ScoredRecommendation,
    SeededRandom,
};

#[cfg(feature = "test-support")]
pub use sitewise_core::test_support;

pub use sitewise_scorer::{
    BusinessIdeaAnalysis, MarketOverview, TrafficPeriod, TrafficSample, analyze_business_idea,
    market_overview, score_business_kind, score_business_recommendations,
    score_business_recommendations_with_local_businesses, score_franchise_brand,
    score_franchise_recommendations, traffic_series,
};
