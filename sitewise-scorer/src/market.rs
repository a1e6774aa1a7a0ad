//! Heuristic market overview for a location.

use sitewise_core::{LocationProfile, LocationProfileError, RandomSource, RiskTier};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::numeric::{round_half_up, to_percent};

/// Number of market segments a location can be assigned to.
pub const SEGMENT_COUNT: u32 = 5;

/// Relative weight of one demand driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DemandFactor {
    /// Driver name.
    pub feature: &'static str,
    /// Importance out of 100.
    pub importance: u8,
}

const DEMAND_FACTORS: [DemandFactor; 4] = [
    DemandFactor {
        feature: "Population",
        importance: 85,
    },
    DemandFactor {
        feature: "Average Income",
        importance: 75,
    },
    DemandFactor {
        feature: "Business Density",
        importance: 65,
    },
    DemandFactor {
        feature: "Education Level",
        importance: 55,
    },
];

/// Estimated demand with a confidence figure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DemandEstimate {
    /// Demand index out of 100.
    pub value: u8,
    /// Confidence out of 100, between 70 and 90.
    pub confidence: u8,
    /// Drivers behind the estimate.
    pub factors: Vec<DemandFactor>,
}

/// Contribution of one factor to market risk.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RiskImpact {
    /// Factor name.
    pub factor: &'static str,
    /// Impact, capped at 100.
    pub impact: f64,
}

/// Market-level risk assessment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MarketRisk {
    /// Overall level.
    pub level: RiskTier,
    /// Probability out of 100, between 10 and 90.
    pub probability: u8,
    /// Per-factor impacts.
    pub factors: Vec<RiskImpact>,
}

/// Market overview of one location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MarketOverview {
    /// Segment index in `0..SEGMENT_COUNT`.
    pub segment: u32,
    /// Demand estimate.
    pub demand: DemandEstimate,
    /// Risk assessment.
    pub risk: MarketRisk,
}

/// Signed tally of risk indicators, from `-4` to `4`.
fn risk_score(location: &LocationProfile) -> i8 {
    let sign = |favourable: bool| if favourable { 1 } else { -1 };
    sign(location.business_density <= 10.0)
        + sign(location.competitor_count <= 5)
        + sign(location.population > 500_000)
        + sign(location.avg_income > 50_000.0)
}

const fn risk_level(score: i8) -> RiskTier {
    if score >= 2 {
        RiskTier::Low
    } else if score <= -2 {
        RiskTier::High
    } else {
        RiskTier::Medium
    }
}

fn demand_value(location: &LocationProfile) -> u8 {
    to_percent(round_half_up(
        location.population_f64() / 100_000.0 * 30.0
            + location.avg_income / 50_000.0 * 30.0
            + location.business_density * 5.0
            + location.education_level * 0.3,
    ))
}

fn risk_impacts(location: &LocationProfile) -> Vec<RiskImpact> {
    vec![
        RiskImpact {
            factor: "Market Competition",
            impact: (location.competitor_count_f64() * 10.0).min(100.0),
        },
        RiskImpact {
            factor: "Market Size",
            impact: (location.population_f64() / 100_000.0 * 20.0).min(100.0),
        },
        RiskImpact {
            factor: "Economic Factors",
            impact: (location.avg_income / 50_000.0 * 50.0 + location.business_density * 5.0)
                .min(100.0),
        },
        RiskImpact {
            factor: "Demographics",
            impact: location.education_level.min(100.0),
        },
    ]
}

/// Summarise demand and risk for a location.
///
/// The location is validated before any draw. Two draws are then taken: the
/// segment, then the demand confidence.
///
/// # Errors
/// Returns [`LocationProfileError`] when the location fails validation.
pub fn market_overview<R>(
    location: &LocationProfile,
    random: &mut R,
) -> Result<MarketOverview, LocationProfileError>
where
    R: RandomSource + ?Sized,
{
    location.validate()?;
    let segment = random.range_u32(0, SEGMENT_COUNT);
    let confidence = to_percent(round_half_up(random.range_f64(70.0, 90.0)));
    let score = risk_score(location);
    let probability = to_percent(f64::from(50 + i16::from(score) * 10));

    Ok(MarketOverview {
        segment,
        demand: DemandEstimate {
            value: demand_value(location),
            confidence,
            factors: DEMAND_FACTORS.to_vec(),
        },
        risk: MarketRisk {
            level: risk_level(score),
            probability,
            factors: risk_impacts(location),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sitewise_core::test_support::{SequenceRandom, sample_location};

    fn impacts(overview: &MarketOverview) -> Vec<f64> {
        overview.risk.factors.iter().map(|f| f.impact).collect()
    }

    #[rstest]
    fn downtown_overview_is_medium_risk() {
        let mut random = SequenceRandom::new(vec![0.5, 0.25]);
        let overview = market_overview(&sample_location(), &mut random).expect("valid location");

        assert_eq!(overview.segment, 2);
        assert_eq!(overview.demand.value, 100);
        assert_eq!(overview.demand.confidence, 75);
        assert_eq!(overview.demand.factors.len(), 4);
        assert_eq!(overview.risk.level, RiskTier::Medium);
        assert_eq!(overview.risk.probability, 50);
        assert_eq!(impacts(&overview), vec![30.0, 100.0, 75.0, 75.0]);
    }

    #[rstest]
    fn crowded_small_market_is_high_risk() {
        let location = LocationProfile::new(0.0, 0.0)
            .with_population(100_000)
            .with_avg_income(25_000.0)
            .with_education_level(50.0)
            .with_business_density(2.0)
            .with_competitor_count(8);
        let overview = market_overview(&location, &mut SequenceRandom::constant(0.0))
            .expect("valid location");

        assert_eq!(overview.demand.value, 70);
        assert_eq!(overview.demand.confidence, 70);
        assert_eq!(overview.risk.level, RiskTier::High);
        assert_eq!(overview.risk.probability, 30);
        assert_eq!(impacts(&overview), vec![80.0, 20.0, 35.0, 50.0]);
    }

    #[rstest]
    fn large_affluent_market_is_low_risk() {
        let location = LocationProfile::new(0.0, 0.0)
            .with_population(600_000)
            .with_avg_income(60_000.0)
            .with_education_level(40.0)
            .with_business_density(2.0)
            .with_competitor_count(1);
        let overview = market_overview(&location, &mut SequenceRandom::constant(0.99))
            .expect("valid location");

        assert_eq!(overview.segment, SEGMENT_COUNT - 1);
        assert_eq!(overview.risk.level, RiskTier::Low);
        assert_eq!(overview.risk.probability, 90);
    }
}
