//! Priority ordering of scored recommendations.

use sitewise_core::ScoredRecommendation;

use crate::numeric::{i64_as_f64, u64_as_f64};

/// Ranking key blending the headline figures.
///
/// `score×0.3 + successProbability×0.3 + marketPotential×0.2 + growthRate×0.2`
#[must_use]
pub fn priority(rec: &ScoredRecommendation) -> f64 {
    f64::from(rec.score()) * 0.3
        + f64::from(rec.success_probability()) * 0.3
        + u64_as_f64(rec.market_potential()) * 0.2
        + i64_as_f64(rec.growth_rate()) * 0.2
}

/// Attach priorities and sort descending.
///
/// The sort is stable: equal priorities keep their input order.
#[must_use]
pub fn rank(recommendations: Vec<ScoredRecommendation>) -> Vec<ScoredRecommendation> {
    let mut ranked: Vec<_> = recommendations
        .into_iter()
        .map(|rec| {
            let key = priority(&rec);
            rec.with_priority(key)
        })
        .collect();
    ranked.sort_by(|a, b| b.priority().total_cmp(&a.priority()));
    ranked
}
