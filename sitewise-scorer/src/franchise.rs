//! Franchise-brand scoring.
//!
//! Franchises use their own saturation points and fold education into a
//! single market-match figure that plays the role of the composite score.

use sitewise_core::{
    FRANCHISE_CATALOG, FranchiseBrand, FranchiseMetrics, FranchiseProfile,
    FranchiseRecommendation, LocationProfile,
};

use crate::numeric::{round_half_up, to_percent, to_u32, to_u64};

/// Population at which the franchise population factor saturates.
pub const FRANCHISE_POPULATION_SATURATION: f64 = 500_000.0;
/// Average income at which the franchise income factor saturates.
pub const FRANCHISE_INCOME_SATURATION: f64 = 40_000.0;
/// Business density at which the franchise density factor saturates.
pub const FRANCHISE_DENSITY_SATURATION: f64 = 15.0;

#[derive(Debug, Clone, Copy)]
struct FranchiseFactors {
    population: f64,
    income: f64,
    education: f64,
    density: f64,
}

impl FranchiseFactors {
    fn from_location(location: &LocationProfile) -> Self {
        Self {
            population: (location.population_f64() / FRANCHISE_POPULATION_SATURATION).min(1.0),
            income: (location.avg_income / FRANCHISE_INCOME_SATURATION).min(1.0),
            education: location.education_level / 100.0,
            density: (location.business_density / FRANCHISE_DENSITY_SATURATION).min(1.0),
        }
    }

    fn market_match(&self) -> u8 {
        to_percent(round_half_up(
            (self.population + self.income + self.education + self.density) * 100.0 / 4.0,
        ))
    }
}

/// Score one franchise brand against an already validated location.
#[must_use]
pub(crate) fn score_franchise(
    brand: FranchiseBrand,
    location: &LocationProfile,
) -> FranchiseRecommendation {
    score_franchise_profile(brand.profile(), &FranchiseFactors::from_location(location))
}

fn score_franchise_profile(
    profile: &'static FranchiseProfile,
    factors: &FranchiseFactors,
) -> FranchiseRecommendation {
    let market_match = factors.market_match();
    let match_ratio = f64::from(market_match) / 100.0;
    let brand_ratio = profile.brand_strength / 100.0;

    let roi = to_u32(round_half_up(15.0 + match_ratio * 20.0 + brand_ratio * 15.0));
    let investment = to_u64(round_half_up(
        profile.base_investment * (0.8 + match_ratio * 0.4),
    ));
    let expansion_potential = to_u32(round_half_up(
        factors.population * 40.0 + factors.density * 30.0 + brand_ratio * 30.0,
    ));

    FranchiseRecommendation::new(
        profile,
        FranchiseMetrics {
            market_match,
            roi,
            investment,
            expansion_potential,
        },
    )
}

/// Score every franchise brand, ordered by market match descending.
///
/// Equal market matches keep catalog order.
pub(crate) fn rank_franchises(location: &LocationProfile) -> Vec<FranchiseRecommendation> {
    let factors = FranchiseFactors::from_location(location);
    let mut scored: Vec<_> = FRANCHISE_CATALOG
        .iter()
        .map(|profile| score_franchise_profile(profile, &factors))
        .collect();
    scored.sort_by(|a, b| b.market_match().cmp(&a.market_match()));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn location(population: u32, income: f64, education: f64, density: f64) -> LocationProfile {
        LocationProfile::new(0.0, 0.0)
            .with_population(population)
            .with_avg_income(income)
            .with_education_level(education)
            .with_business_density(density)
    }

    #[rstest]
    #[case(FranchiseBrand::Dominos, 44, 33_240_000, 77)]
    #[case(FranchiseBrand::Subway, 43, 22_160_000, 76)]
    #[case(FranchiseBrand::PrestigeSmartKitchen, 42, 16_620_000, 73)]
    #[case(FranchiseBrand::Vlcc, 42, 27_700_000, 74)]
    #[case(FranchiseBrand::ChaiPoint, 41, 11_080_000, 71)]
    fn downtown_franchise_figures(
        #[case] brand: FranchiseBrand,
        #[case] roi: u32,
        #[case] investment: u64,
        #[case] expansion: u32,
    ) {
        let rec = score_franchise(brand, &location(500_000, 50_000.0, 75.0, 5.0));
        assert_eq!(rec.market_match(), 77);
        assert_eq!(rec.roi(), roi);
        assert_eq!(rec.investment(), investment);
        assert_eq!(rec.expansion_potential(), expansion);
    }

    #[rstest]
    fn empty_location_keeps_brand_terms() {
        let rec = score_franchise(FranchiseBrand::Dominos, &location(0, 0.0, 0.0, 0.0));
        assert_eq!(rec.market_match(), 0);
        assert_eq!(rec.roi(), 29);
        assert_eq!(rec.investment(), 24_000_000);
        assert_eq!(rec.expansion_potential(), 27);
    }

    #[rstest]
    fn equal_matches_keep_catalog_order() {
        let ranked = rank_franchises(&location(500_000, 50_000.0, 75.0, 5.0));
        let brands: Vec<_> = ranked.iter().map(FranchiseRecommendation::brand).collect();
        assert_eq!(brands, FranchiseBrand::ALL);
    }

    #[rstest]
    fn market_match_is_capped() {
        let rec = score_franchise(FranchiseBrand::Subway, &location(u32::MAX, 1e9, 100.0, 1e6));
        assert_eq!(rec.market_match(), 100);
    }
}
