//! Recommendation records handed to presentation layers.
//!
//! Records are assembled once by the scorer and exposed read-only through
//! accessors. The ranking key travels with a [`ScoredRecommendation`] but is
//! never serialised.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::archetype::{BusinessKind, FranchiseBrand, FranchiseCategory};
use crate::catalog::{FranchiseContact, FranchiseProfile};
use crate::risk::RiskTier;

/// Out-of-range indicator raised for product review.
///
/// Flags never alter the computed figures; they mark outputs that the raw
/// formulas allow but that a reviewer may consider implausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ReviewFlag {
    /// Growth rate came out negative.
    NegativeGrowth,
    /// Profit was not positive, so no break-even period exists.
    NoBreakEven,
    /// Break-even exceeds the review horizon.
    LongBreakEven,
    /// Success probability was raised to zero from a negative raw value.
    SuccessProbabilityFloored,
    /// Market potential exceeded the `u64` range and was clipped to its maximum.
    MarketPotentialSaturated,
    /// Growth rate fell outside the `i64` range and was clipped to its bound.
    GrowthSaturated,
}

impl ReviewFlag {
    /// Camel-case flag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NegativeGrowth => "negativeGrowth",
            Self::NoBreakEven => "noBreakEven",
            Self::LongBreakEven => "longBreakEven",
            Self::SuccessProbabilityFloored => "successProbabilityFloored",
            Self::MarketPotentialSaturated => "marketPotentialSaturated",
            Self::GrowthSaturated => "growthSaturated",
        }
    }
}

/// Operating status of a nearby business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BusinessStatus {
    /// Currently trading.
    Open,
    /// No longer trading.
    Closed,
}

/// Synthesised nearby business of the same kind, used as demo data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LocalBusiness {
    /// Display name.
    pub name: String,
    /// Kind the business competes as.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: BusinessKind,
    /// Distance from the location centre in kilometres, one decimal place.
    pub distance: f64,
    /// Average rating between 3 and 5, one decimal place.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Year the business started trading.
    pub operating_since: i32,
    /// Operating status.
    pub status: BusinessStatus,
}

/// Figures computed for one business archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BusinessMetrics {
    /// Composite viability, 0-100.
    pub score: u8,
    /// Projected capital requirement.
    pub investment: u64,
    /// Projected annual revenue.
    pub revenue: u64,
    /// Projected annual profit.
    pub profit: u64,
    /// Months to recover the investment; `None` when profit is not positive.
    pub break_even: Option<u32>,
    /// Risk classification.
    pub risk: RiskTier,
    /// Competitor count echoed from the location.
    pub competitor_count: u32,
    /// Market potential indicator.
    pub market_potential: u64,
    /// Growth rate indicator; negative in saturated markets.
    pub growth_rate: i64,
    /// Success probability, 0-100.
    pub success_probability: u8,
}

/// Scored business archetype.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredRecommendation {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: BusinessKind,
    #[cfg_attr(feature = "serde", serde(flatten))]
    metrics: BusinessMetrics,
    #[cfg_attr(feature = "serde", serde(skip))]
    priority: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    review_flags: Vec<ReviewFlag>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    local_businesses: Vec<LocalBusiness>,
}

impl ScoredRecommendation {
    /// Assemble a recommendation with a zero priority and no extras.
    #[must_use]
    pub const fn new(kind: BusinessKind, metrics: BusinessMetrics) -> Self {
        Self {
            kind,
            metrics,
            priority: 0.0,
            review_flags: Vec::new(),
            local_businesses: Vec::new(),
        }
    }

    /// Attach the ranking key.
    #[must_use]
    pub const fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Attach review flags.
    #[must_use]
    pub fn with_review_flags(mut self, flags: Vec<ReviewFlag>) -> Self {
        self.review_flags = flags;
        self
    }

    /// Attach synthesised nearby businesses.
    #[must_use]
    pub fn with_local_businesses(mut self, businesses: Vec<LocalBusiness>) -> Self {
        self.local_businesses = businesses;
        self
    }

    /// Archetype identifier.
    #[must_use]
    pub const fn kind(&self) -> BusinessKind {
        self.kind
    }

    /// Archetype display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// All computed figures.
    #[must_use]
    pub const fn metrics(&self) -> &BusinessMetrics {
        &self.metrics
    }

    /// Composite viability, 0-100.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.metrics.score
    }

    /// Projected capital requirement.
    #[must_use]
    pub const fn investment(&self) -> u64 {
        self.metrics.investment
    }

    /// Projected annual revenue.
    #[must_use]
    pub const fn revenue(&self) -> u64 {
        self.metrics.revenue
    }

    /// Projected annual profit.
    #[must_use]
    pub const fn profit(&self) -> u64 {
        self.metrics.profit
    }

    /// Months to break even, or `None` when profit is not positive.
    #[must_use]
    pub const fn break_even(&self) -> Option<u32> {
        self.metrics.break_even
    }

    /// Risk classification.
    #[must_use]
    pub const fn risk(&self) -> RiskTier {
        self.metrics.risk
    }

    /// Success probability, 0-100.
    #[must_use]
    pub const fn success_probability(&self) -> u8 {
        self.metrics.success_probability
    }

    /// Market potential indicator.
    #[must_use]
    pub const fn market_potential(&self) -> u64 {
        self.metrics.market_potential
    }

    /// Growth rate indicator.
    #[must_use]
    pub const fn growth_rate(&self) -> i64 {
        self.metrics.growth_rate
    }

    /// Ranking key; zero until the ranker attaches one.
    #[must_use]
    pub const fn priority(&self) -> f64 {
        self.priority
    }

    /// Review flags raised for this record.
    #[must_use]
    pub fn review_flags(&self) -> &[ReviewFlag] {
        &self.review_flags
    }

    /// Synthesised nearby businesses, empty unless requested.
    #[must_use]
    pub fn local_businesses(&self) -> &[LocalBusiness] {
        &self.local_businesses
    }
}

/// Figures computed for one franchise brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FranchiseMetrics {
    /// Location fit, 0-100.
    pub market_match: u8,
    /// Expected return on investment, as a percentage.
    pub roi: u32,
    /// Projected capital requirement.
    pub investment: u64,
    /// Room for further outlets, as a percentage.
    pub expansion_potential: u32,
}

/// Scored franchise brand with its catalog metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FranchiseRecommendation {
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    brand: FranchiseBrand,
    category: FranchiseCategory,
    #[cfg_attr(feature = "serde", serde(flatten))]
    metrics: FranchiseMetrics,
    brand_strength: f64,
    support_rating: f64,
    requirements: &'static [&'static str],
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    contact: Option<FranchiseContact>,
    advantages: &'static [&'static str],
}

impl FranchiseRecommendation {
    /// Combine a catalog profile with its computed figures.
    #[must_use]
    pub const fn new(profile: &'static FranchiseProfile, metrics: FranchiseMetrics) -> Self {
        Self {
            brand: profile.brand,
            category: profile.category,
            metrics,
            brand_strength: profile.brand_strength,
            support_rating: profile.support_rating,
            requirements: profile.requirements,
            contact: profile.contact,
            advantages: profile.advantages,
        }
    }

    /// Brand identifier.
    #[must_use]
    pub const fn brand(&self) -> FranchiseBrand {
        self.brand
    }

    /// Sector the brand operates in.
    #[must_use]
    pub const fn category(&self) -> FranchiseCategory {
        self.category
    }

    /// All computed figures.
    #[must_use]
    pub const fn metrics(&self) -> &FranchiseMetrics {
        &self.metrics
    }

    /// Location fit, 0-100.
    #[must_use]
    pub const fn market_match(&self) -> u8 {
        self.metrics.market_match
    }

    /// Expected return on investment, as a percentage.
    #[must_use]
    pub const fn roi(&self) -> u32 {
        self.metrics.roi
    }

    /// Projected capital requirement.
    #[must_use]
    pub const fn investment(&self) -> u64 {
        self.metrics.investment
    }

    /// Room for further outlets, as a percentage.
    #[must_use]
    pub const fn expansion_potential(&self) -> u32 {
        self.metrics.expansion_potential
    }

    /// Brand recognition on a 0-100 scale.
    #[must_use]
    pub const fn brand_strength(&self) -> f64 {
        self.brand_strength
    }

    /// Franchisor support quality on a 0-100 scale.
    #[must_use]
    pub const fn support_rating(&self) -> f64 {
        self.support_rating
    }

    /// Entry requirements.
    #[must_use]
    pub const fn requirements(&self) -> &'static [&'static str] {
        self.requirements
    }

    /// Franchisor contact details, when published.
    #[must_use]
    pub const fn contact(&self) -> Option<&FranchiseContact> {
        self.contact.as_ref()
    }

    /// Advertised selling points.
    #[must_use]
    pub const fn advantages(&self) -> &'static [&'static str] {
        self.advantages
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn metrics() -> BusinessMetrics {
        BusinessMetrics {
            score: 58,
            investment: 1_635_000,
            revenue: 2_175_000,
            profit: 543_750,
            break_even: Some(41),
            risk: RiskTier::Medium,
            competitor_count: 3,
            market_potential: 31_250,
            growth_rate: 12,
            success_probability: 55,
        }
    }

    #[rstest]
    fn serialised_shape_hides_priority(metrics: BusinessMetrics) {
        let rec = ScoredRecommendation::new(BusinessKind::Cafe, metrics).with_priority(6286.3);
        let value = serde_json::to_value(&rec).expect("serialise recommendation");
        assert_eq!(
            value,
            json!({
                "type": "Café",
                "score": 58,
                "investment": 1_635_000,
                "revenue": 2_175_000,
                "profit": 543_750,
                "breakEven": 41,
                "risk": "Medium",
                "competitorCount": 3,
                "marketPotential": 31_250,
                "growthRate": 12,
                "successProbability": 55
            })
        );
    }

    #[rstest]
    fn missing_break_even_serialises_as_null(metrics: BusinessMetrics) {
        let rec = ScoredRecommendation::new(
            BusinessKind::Gym,
            BusinessMetrics {
                break_even: None,
                ..metrics
            },
        )
        .with_review_flags(vec![ReviewFlag::NoBreakEven]);
        let value = serde_json::to_value(&rec).expect("serialise recommendation");
        assert_eq!(value.get("breakEven"), Some(&Value::Null));
        assert_eq!(value.get("reviewFlags"), Some(&json!(["noBreakEven"])));
    }

    #[rstest]
    #[case(ReviewFlag::NegativeGrowth)]
    #[case(ReviewFlag::NoBreakEven)]
    #[case(ReviewFlag::LongBreakEven)]
    #[case(ReviewFlag::SuccessProbabilityFloored)]
    #[case(ReviewFlag::MarketPotentialSaturated)]
    #[case(ReviewFlag::GrowthSaturated)]
    fn flag_names_match_their_serialised_form(#[case] flag: ReviewFlag) {
        let value = serde_json::to_value(flag).expect("serialise flag");
        assert_eq!(value, json!(flag.as_str()));
    }

    #[rstest]
    #[case(BusinessStatus::Open, "Open")]
    #[case(BusinessStatus::Closed, "Closed")]
    fn statuses_serialise_as_display_words(#[case] status: BusinessStatus, #[case] word: &str) {
        let value = serde_json::to_value(status).expect("serialise status");
        assert_eq!(value, json!(word));
    }

    #[rstest]
    fn franchise_carries_catalog_metadata() {
        let rec = FranchiseRecommendation::new(
            FranchiseBrand::ChaiPoint.profile(),
            FranchiseMetrics {
                market_match: 77,
                roi: 41,
                investment: 11_080_000,
                expansion_potential: 71,
            },
        );
        let value = serde_json::to_value(&rec).expect("serialise franchise");
        assert_eq!(value.get("name"), Some(&json!("Chai Point")));
        assert_eq!(value.get("category"), Some(&json!("Food & Beverage")));
        assert_eq!(value.get("marketMatch"), Some(&json!(77)));
        assert_eq!(
            value.pointer("/contact/email"),
            Some(&json!("franchise@chaipoint.com"))
        );
        assert_eq!(rec.advantages().len(), 5);
    }
}
