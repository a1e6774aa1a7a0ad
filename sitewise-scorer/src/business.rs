//! Composite scoring and financial projections for standard businesses.

use sitewise_core::{
    BusinessKind, BusinessMetrics, BusinessProfile, FactorScores, LocationProfile, RiskTier,
    ScoredRecommendation,
};
use thiserror::Error;

use crate::numeric::{round_half_up, to_i64, to_percent, to_u32, to_u64, u64_as_f64};
use crate::review::{RawFigures, business_flags};

/// Shortest break-even period reported, in months.
pub const MIN_BREAK_EVEN_MONTHS: u32 = 6;

/// Raised when profit is not positive; recovered as "no break-even".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("profit is not positive, so no break-even period exists")]
struct DivisionGuardError;

/// Score one business kind against an already validated location.
///
/// The result carries review flags but no priority; the ranker attaches that.
#[must_use]
pub(crate) fn score_business(
    kind: BusinessKind,
    location: &LocationProfile,
) -> ScoredRecommendation {
    let factors = FactorScores::from_location(location);
    score_profile(kind.profile(), location, &factors)
}

pub(crate) fn score_profile(
    profile: &BusinessProfile,
    location: &LocationProfile,
    factors: &FactorScores,
) -> ScoredRecommendation {
    let competitors = location.competitor_count_f64();
    let raw_density = location.business_density;

    let score = to_percent(round_half_up(
        factors.weighted_sum(&profile.weights) * 100.0 / 5.0,
    ));
    let score_ratio = f64::from(score) / 100.0;

    let location_multiplier = score_ratio * (1.0 + factors.density);
    let investment = to_u64(round_half_up(
        profile.base_investment * (0.8 + location_multiplier * 0.4),
    ));
    let revenue = to_u64(round_half_up(profile.base_revenue * location_multiplier));
    let profit = to_u64(round_half_up(u64_as_f64(revenue) * profile.profit_margin));

    let risk = RiskTier::classify(score, location.competitor_count);

    let raw_success = round_half_up(
        f64::from(score) * (1.2 - competitors / 10.0) * (1.0 + factors.density / 5.0),
    )
    .min(100.0);
    let success_probability = to_percent(raw_success);

    let raw_market_potential = round_half_up(
        (location.population_f64() * location.avg_income / 1_000_000.0)
            * (1.0 + raw_density / 20.0),
    );
    let market_potential = to_u64(raw_market_potential);
    let raw_growth = round_half_up(
        score_ratio * (20.0 - competitors) * (1.0 + raw_density / 30.0),
    );
    let growth_rate = to_i64(raw_growth);

    let break_even = match break_even_months(investment, profit, risk) {
        Ok(months) => Some(months),
        Err(guard) => {
            log::debug!("{}: {guard}", profile.kind);
            None
        }
    };

    let metrics = BusinessMetrics {
        score,
        investment,
        revenue,
        profit,
        break_even,
        risk,
        competitor_count: location.competitor_count,
        market_potential,
        growth_rate,
        success_probability,
    };
    let raw = RawFigures {
        success_probability: raw_success,
        market_potential: raw_market_potential,
        growth_rate: raw_growth,
    };
    let flags = business_flags(profile.kind, &metrics, raw);
    ScoredRecommendation::new(profile.kind, metrics).with_review_flags(flags)
}

fn break_even_months(
    investment: u64,
    profit: u64,
    risk: RiskTier,
) -> Result<u32, DivisionGuardError> {
    if profit == 0 {
        return Err(DivisionGuardError);
    }
    let monthly_profit = u64_as_f64(profit) / 12.0;
    let months = round_half_up(
        (u64_as_f64(investment) / monthly_profit) * (1.0 + risk.break_even_penalty()),
    );
    Ok(to_u32(months).max(MIN_BREAK_EVEN_MONTHS))
}
