//! Property tests for the feature normaliser and risk classification.

use proptest::prelude::*;
use sitewise_core::{FactorScores, LocationProfile, RiskTier};

fn valid_location() -> impl Strategy<Value = LocationProfile> {
    (
        -90.0_f64..=90.0,
        -180.0_f64..=180.0,
        any::<u32>(),
        0.0_f64..1e7,
        0.0_f64..=100.0,
        0.0_f64..500.0,
        0_u32..200,
    )
        .prop_map(|(lat, lng, population, income, education, density, competitors)| {
            LocationProfile::new(lat, lng)
                .with_population(population)
                .with_avg_income(income)
                .with_education_level(education)
                .with_business_density(density)
                .with_competitor_count(competitors)
        })
}

proptest! {
    #[test]
    fn generated_locations_validate(location in valid_location()) {
        prop_assert!(location.validate().is_ok());
    }

    #[test]
    fn factors_lie_in_unit_interval(location in valid_location()) {
        let factors = FactorScores::from_location(&location);
        for value in [
            factors.population,
            factors.income,
            factors.education,
            factors.competition,
            factors.density,
        ] {
            prop_assert!((0.0..=1.0).contains(&value), "factor {value} out of range");
        }
    }

    #[test]
    fn crowded_markets_are_never_low_risk(score in 0_u8..=100, competitors in 4_u32..1000) {
        prop_assert_ne!(RiskTier::classify(score, competitors), RiskTier::Low);
    }

    #[test]
    fn weak_scores_are_high_risk(score in 0_u8..40, competitors in 0_u32..1000) {
        prop_assert_eq!(RiskTier::classify(score, competitors), RiskTier::High);
    }

    #[test]
    fn seed_region_is_stable(location in valid_location()) {
        prop_assert_eq!(location.seed_region(), location.clone().seed_region());
    }
}
