//! Launch-planning analysis for a single business idea.
//!
//! Complements the ranked recommendations with the detail a founder needs
//! once a kind has been chosen: adjusted resource costs, operational risks,
//! a local demographic breakdown, competitor structure and support
//! programmes. Competitor advantage and programme picks are random; every
//! other figure is deterministic.

pub mod catalog;

use sitewise_core::{
    BusinessKind, LocationProfile, LocationProfileError, RandomSource, shuffle,
};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::numeric::{round_half_up, to_percent, to_u32, to_u64};

pub use catalog::{
    IDEA_CATALOG, IdeaProfile, MarketTrend, ProgramContact, ProgramKind, ResourceKind,
    SUPPORT_PROGRAMS, SupportProgram, TrendDirection, TrendImpact, idea_profile,
};

/// Lowest success probability reported.
pub const MIN_IDEA_SUCCESS: u8 = 5;
/// Highest success probability reported.
pub const MAX_IDEA_SUCCESS: u8 = 95;
/// Shortest break-even period reported, in months.
pub const MIN_IDEA_BREAK_EVEN_MONTHS: u32 = 6;
/// Lowest ROI percentage reported.
pub const MIN_IDEA_ROI: u32 = 5;
/// Floor for adjusted availability, probability and impact figures.
pub const MIN_ADJUSTED_PERCENT: u8 = 10;

/// Resource adjusted for the location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BusinessResource {
    /// Resource name.
    pub name: &'static str,
    /// Resource category.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ResourceKind,
    /// Local availability out of 100.
    pub availability: u8,
    /// Local cost in INR.
    pub cost: u64,
    /// Importance out of 100.
    pub importance: u8,
}

/// Operational risk adjusted for the location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssessedRisk {
    /// Risk name.
    pub name: &'static str,
    /// Probability out of 100.
    pub probability: u8,
    /// Impact out of 100.
    pub impact: u8,
    /// Suggested mitigation.
    pub mitigation_strategy: &'static str,
}

/// Break-even horizon bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Timeframe {
    /// Twelve months or fewer.
    #[cfg_attr(feature = "serde", serde(rename = "Under 1 year"))]
    UnderOneYear,
    /// Thirteen to twenty-four months.
    #[cfg_attr(feature = "serde", serde(rename = "1-2 years"))]
    OneToTwoYears,
    /// Twenty-five to thirty-six months.
    #[cfg_attr(feature = "serde", serde(rename = "2-3 years"))]
    TwoToThreeYears,
    /// Longer than thirty-six months.
    #[cfg_attr(feature = "serde", serde(rename = "3+ years"))]
    OverThreeYears,
}

impl Timeframe {
    /// Bucket a break-even period.
    #[must_use]
    pub const fn from_months(months: u32) -> Self {
        match months {
            0..=12 => Self::UnderOneYear,
            13..=24 => Self::OneToTwoYears,
            25..=36 => Self::TwoToThreeYears,
            _ => Self::OverThreeYears,
        }
    }
}

/// Return on investment projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoiProjection {
    /// Annual ROI percentage.
    pub value: u32,
    /// Horizon bucket of `break_even_months`.
    pub timeframe: Timeframe,
    /// Months to break even.
    pub break_even_months: u32,
}

/// Labelled percentage share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Share {
    /// Bucket label.
    pub label: &'static str,
    /// Percentage.
    pub value: u8,
}

/// Local population breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Demographics {
    /// Age bands from `18-24` to `55+`.
    pub age_groups: [Share; 5],
    /// Low, medium and high income shares.
    pub income_levels: [Share; 3],
    /// Primary, secondary and higher education shares.
    pub education_levels: [Share; 3],
}

/// Dominant local competitor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MarketLeader {
    /// Display name.
    pub name: String,
    /// Market share percentage.
    pub market_share: u32,
    /// Typical strengths.
    pub strengths: &'static [&'static str],
    /// Typical weaknesses.
    pub weaknesses: &'static [&'static str],
}

/// Competitive structure around the location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompetitorAnalysis {
    /// All competitors.
    pub total_competitors: u32,
    /// Competitors of the same kind.
    pub direct_competitors: u32,
    /// Remaining competitors.
    pub indirect_competitors: u32,
    /// Dominant competitor.
    pub market_leader: MarketLeader,
    /// Differentiators to pursue.
    pub competitive_advantage: Vec<&'static str>,
}

/// Full analysis of one business idea at one location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BusinessIdeaAnalysis {
    /// Kind analysed.
    #[cfg_attr(feature = "serde", serde(rename = "businessType"))]
    pub kind: BusinessKind,
    /// Location analysed.
    pub location: LocationProfile,
    /// Success probability between 5 and 95.
    pub success_probability: u8,
    /// Resources with local availability and cost.
    pub resources: Vec<BusinessResource>,
    /// Programmes worth applying to.
    pub support_programs: Vec<SupportProgram>,
    /// Local population breakdown.
    pub demographics: Demographics,
    /// ROI projection.
    pub roi: RoiProjection,
    /// Operational risks with local probability and impact.
    pub risk_factors: Vec<AssessedRisk>,
    /// Market trends for the kind.
    pub market_trends: &'static [MarketTrend],
    /// Competitive structure.
    pub competitor_analysis: CompetitorAnalysis,
}

const LEADER_STRENGTHS: &[&str] = &[
    "Established brand recognition",
    "Prime location",
    "Loyal customer base",
];

const LEADER_WEAKNESSES: &[&str] = &[
    "Higher pricing",
    "Limited innovation",
    "Inconsistent service quality",
];

fn clamp_percent(value: f64, floor: u8, ceiling: u8) -> u8 {
    to_percent(round_half_up(value)).clamp(floor, ceiling)
}

fn success_probability(profile: &IdeaProfile, location: &LocationProfile) -> u8 {
    let population = (location.population_f64() / 500_000.0).min(1.0) * profile.population_weight;
    let income = (location.avg_income / 50_000.0).min(1.0) * profile.income_weight;
    let education = (location.education_level / 100.0) * profile.education_weight;
    let competition =
        (1.0 - (location.competitor_count_f64() / 10.0) * profile.competitor_impact).max(0.0);
    let density = (location.business_density / 20.0).min(1.0);
    let location_score = (population + income + education + competition + density) * 20.0;
    clamp_percent(
        profile.base_success_probability + location_score - 50.0,
        MIN_IDEA_SUCCESS,
        MAX_IDEA_SUCCESS,
    )
}

fn roi_projection(profile: &IdeaProfile, location: &LocationProfile) -> RoiProjection {
    let competitors = location.competitor_count_f64();
    let roi_modifier = (location.avg_income / 50_000.0) * 0.2
        + (location.population_f64() / 500_000.0) * 0.1
        - (competitors / 5.0) * 0.15
        + (location.business_density / 10.0) * 0.1;
    let value = to_u32(round_half_up(profile.base_roi * (1.0 + roi_modifier))).max(MIN_IDEA_ROI);

    let break_even_modifier = (competitors / 5.0) * 0.2
        - (location.avg_income / 50_000.0) * 0.1
        - (location.population_f64() / 500_000.0) * 0.1;
    let break_even_months = to_u32(round_half_up(
        profile.break_even_months * (1.0 + break_even_modifier),
    ))
    .max(MIN_IDEA_BREAK_EVEN_MONTHS);

    RoiProjection {
        value,
        timeframe: Timeframe::from_months(break_even_months),
        break_even_months,
    }
}

fn resources(profile: &IdeaProfile, location: &LocationProfile) -> Vec<BusinessResource> {
    let availability_modifier = (location.business_density / 10.0) * 0.1
        + (location.population_f64() / 500_000.0) * 0.1
        + (location.avg_income / 50_000.0) * 0.1;
    let cost_modifier =
        (location.business_density / 10.0) * 0.2 + (location.avg_income / 50_000.0) * 0.3;

    profile
        .resources
        .iter()
        .map(|template| BusinessResource {
            name: template.name,
            kind: template.kind,
            availability: clamp_percent(
                template.base_availability * (0.8 + availability_modifier),
                MIN_ADJUSTED_PERCENT,
                100,
            ),
            cost: to_u64(round_half_up(template.base_cost * (1.0 + cost_modifier))),
            importance: template.importance,
        })
        .collect()
}

/// Risks grow as the area gets sparser; zero density saturates both figures.
fn risk_factors(profile: &IdeaProfile, location: &LocationProfile) -> Vec<AssessedRisk> {
    let crowding = (location.competitor_count_f64() / 5.0) * 0.1;
    let sparsity = if location.business_density > 0.0 {
        (10.0 / location.business_density) * 0.1
    } else {
        f64::INFINITY
    };
    let probability_modifier = crowding + sparsity - (location.avg_income / 100_000.0) * 0.1;
    let impact_modifier = crowding + sparsity;

    profile
        .risks
        .iter()
        .map(|template| AssessedRisk {
            name: template.name,
            probability: clamp_percent(
                template.base_probability * (1.0 + probability_modifier),
                MIN_ADJUSTED_PERCENT,
                100,
            ),
            impact: clamp_percent(
                template.base_impact * (1.0 + impact_modifier),
                MIN_ADJUSTED_PERCENT,
                100,
            ),
            mitigation_strategy: template.mitigation,
        })
        .collect()
}

fn share(label: &'static str, percent: f64) -> Share {
    Share {
        label,
        value: to_percent(round_half_up(percent)),
    }
}

fn demographics(location: &LocationProfile) -> Demographics {
    let education = location.education_level;
    let income = location.avg_income;

    let young = (0.25 + education / 200.0).min(0.4);
    let middle_aged = (0.3 + income / 100_000.0).min(0.45);
    let senior = (1.0 - young - middle_aged).max(0.1);

    let high_income = (income / 150_000.0).min(0.3);
    let middle_income = (0.3 + income / 100_000.0).min(0.5);
    let low_income = (1.0 - high_income - middle_income).max(0.1);

    let higher_education = education / 100.0;
    let secondary_education = ((100.0 - education) / 150.0).min(0.5);
    let primary_education = (1.0 - higher_education - secondary_education).max(0.1);

    Demographics {
        age_groups: [
            share("18-24", young * 40.0),
            share("25-34", young * 60.0),
            share("35-44", middle_aged * 50.0),
            share("45-54", middle_aged * 50.0),
            share("55+", senior * 100.0),
        ],
        income_levels: [
            share("Low", low_income * 100.0),
            share("Medium", middle_income * 100.0),
            share("High", high_income * 100.0),
        ],
        education_levels: [
            share("Primary", primary_education * 100.0),
            share("Secondary", secondary_education * 100.0),
            share("Higher", higher_education * 100.0),
        ],
    }
}

fn pick_support_programs<R>(random: &mut R) -> Vec<SupportProgram>
where
    R: RandomSource + ?Sized,
{
    let count = random.range_u32(3, 6);
    let mut programs = SUPPORT_PROGRAMS.to_vec();
    shuffle(&mut programs, random);
    programs.truncate(usize::try_from(count).unwrap_or(programs.len()));
    programs
}

fn analyse_competitors<R>(
    profile: &IdeaProfile,
    location: &LocationProfile,
    random: &mut R,
) -> CompetitorAnalysis
where
    R: RandomSource + ?Sized,
{
    let total = location.competitor_count;
    let direct = to_u32(round_half_up(location.competitor_count_f64() * 0.6)).min(total);
    let market_share = random.range_u32(25, 40);

    let mut advantages = profile.advantages.to_vec();
    shuffle(&mut advantages, random);
    let picked = random.range_u32(3, 5);
    advantages.truncate(usize::try_from(picked).unwrap_or(advantages.len()));

    CompetitorAnalysis {
        total_competitors: total,
        direct_competitors: direct,
        indirect_competitors: total - direct,
        market_leader: MarketLeader {
            name: format!("Leading {}", profile.kind),
            market_share,
            strengths: LEADER_STRENGTHS,
            weaknesses: LEADER_WEAKNESSES,
        },
        competitive_advantage: advantages,
    }
}

/// Analyse launching `kind` at a location.
///
/// The location is validated before any draw. Draws are then taken in a
/// fixed order: programme count, programme shuffle, leader share, advantage
/// shuffle, advantage count.
///
/// # Errors
/// Returns [`LocationProfileError`] when the location fails validation.
pub fn analyze_business_idea<R>(
    kind: BusinessKind,
    location: &LocationProfile,
    random: &mut R,
) -> Result<BusinessIdeaAnalysis, LocationProfileError>
where
    R: RandomSource + ?Sized,
{
    location.validate()?;
    let profile = idea_profile(kind);
    let support_programs = pick_support_programs(random);
    let competitor_analysis = analyse_competitors(profile, location, random);

    Ok(BusinessIdeaAnalysis {
        kind,
        location: location.clone(),
        success_probability: success_probability(profile, location),
        resources: resources(profile, location),
        support_programs,
        demographics: demographics(location),
        roi: roi_projection(profile, location),
        risk_factors: risk_factors(profile, location),
        market_trends: profile.trends,
        competitor_analysis,
    })
}
