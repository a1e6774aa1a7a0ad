//! Review flags for outputs the raw formulas allow but a reviewer should see.
//!
//! Figures are never clamped here; flags are attached alongside them and
//! logged at warn level.

use sitewise_core::{BusinessKind, BusinessMetrics, ReviewFlag};

use crate::numeric::{saturates_i64, saturates_u64};

/// Break-even periods above this many months are flagged.
pub const REVIEW_BREAK_EVEN_MONTHS: u32 = 120;

/// Rounded figures as computed, before any floor or integer conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RawFigures {
    pub(crate) success_probability: f64,
    pub(crate) market_potential: f64,
    pub(crate) growth_rate: f64,
}

/// Flags raised for one scored business.
pub(crate) fn business_flags(
    kind: BusinessKind,
    metrics: &BusinessMetrics,
    raw: RawFigures,
) -> Vec<ReviewFlag> {
    let mut flags = Vec::new();
    if metrics.growth_rate < 0 {
        flags.push(ReviewFlag::NegativeGrowth);
    }
    match metrics.break_even {
        None => flags.push(ReviewFlag::NoBreakEven),
        Some(months) if months > REVIEW_BREAK_EVEN_MONTHS => flags.push(ReviewFlag::LongBreakEven),
        Some(_) => {}
    }
    if raw.success_probability < 0.0 {
        flags.push(ReviewFlag::SuccessProbabilityFloored);
    }
    if saturates_u64(raw.market_potential) {
        flags.push(ReviewFlag::MarketPotentialSaturated);
    }
    if saturates_i64(raw.growth_rate) {
        flags.push(ReviewFlag::GrowthSaturated);
    }
    for flag in &flags {
        log::warn!("{kind}: output flagged for review ({})", flag.as_str());
    }
    flags
}
