//! Risk tier classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum score for a [`RiskTier::Low`] classification.
pub const LOW_RISK_MIN_SCORE: u8 = 70;
/// Maximum competitor count for a [`RiskTier::Low`] classification.
pub const LOW_RISK_MAX_COMPETITORS: u32 = 3;
/// Scores below this are always [`RiskTier::High`] unless already low.
pub const HIGH_RISK_SCORE_BELOW: u8 = 40;
/// Competitor counts above this force [`RiskTier::High`] unless already low.
pub const HIGH_RISK_COMPETITORS_ABOVE: u32 = 7;

/// Categorical risk attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiskTier {
    /// Strong score in an uncrowded market.
    Low,
    /// Neither low nor high.
    Medium,
    /// Weak score or a crowded market.
    High,
}

impl RiskTier {
    /// Classify a score and competitor count.
    ///
    /// The low branch is evaluated first, then the high branch; anything else
    /// is medium.
    ///
    /// # Examples
    /// ```
    /// use sitewise_core::RiskTier;
    ///
    /// assert_eq!(RiskTier::classify(70, 3), RiskTier::Low);
    /// assert_eq!(RiskTier::classify(39, 0), RiskTier::High);
    /// assert_eq!(RiskTier::classify(70, 8), RiskTier::High);
    /// assert_eq!(RiskTier::classify(55, 5), RiskTier::Medium);
    /// ```
    #[must_use]
    pub const fn classify(score: u8, competitor_count: u32) -> Self {
        if score >= LOW_RISK_MIN_SCORE && competitor_count <= LOW_RISK_MAX_COMPETITORS {
            Self::Low
        } else if score < HIGH_RISK_SCORE_BELOW || competitor_count > HIGH_RISK_COMPETITORS_ABOVE {
            Self::High
        } else {
            Self::Medium
        }
    }

    /// Fractional uplift applied to the raw break-even period.
    #[must_use]
    pub const fn break_even_penalty(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 0.15,
            Self::High => 0.3,
        }
    }

    /// Tier name as shown to consumers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
