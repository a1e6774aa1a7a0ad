//! Unit coverage for the scoring entry points.

use rstest::{fixture, rstest};
use sitewise_core::test_support::{SequenceRandom, sample_location};
use sitewise_core::{
    BusinessKind, FranchiseBrand, LocationProfile, LocationProfileError, ReviewFlag,
    ScoredRecommendation, SeededRandom,
};

use crate::{
    TrafficPeriod, analyze_business_idea, market_overview, score_business_kind,
    score_business_recommendations, score_business_recommendations_with_local_businesses,
    score_franchise_brand, score_franchise_recommendations, traffic_series,
};

#[fixture]
fn downtown() -> LocationProfile {
    sample_location()
}

fn kinds(ranked: &[ScoredRecommendation]) -> Vec<BusinessKind> {
    ranked.iter().map(ScoredRecommendation::kind).collect()
}

#[rstest]
fn downtown_ranking_prefers_restaurants(downtown: LocationProfile) {
    let ranked = score_business_recommendations(&downtown).expect("valid location");

    assert_eq!(
        kinds(&ranked),
        vec![
            BusinessKind::Restaurant,
            BusinessKind::CoworkingSpace,
            BusinessKind::Gym,
            BusinessKind::Cafe,
            BusinessKind::RetailStore,
        ]
    );
    let top = ranked.first().expect("five recommendations");
    assert!((top.priority() - 6287.5).abs() < 1e-6);
    assert!(ranked.iter().all(|r| r.local_businesses().is_empty()));
}

#[rstest]
fn ranking_is_idempotent(downtown: LocationProfile) {
    let first = score_business_recommendations(&downtown).expect("valid location");
    let second = score_business_recommendations(&downtown).expect("valid location");
    assert_eq!(first, second);
}

#[rstest]
fn local_businesses_leave_scores_untouched(downtown: LocationProfile) {
    let plain = score_business_recommendations(&downtown).expect("valid location");
    let mut random = SequenceRandom::new(vec![0.2, 0.4, 0.6, 0.8]);
    let decorated =
        score_business_recommendations_with_local_businesses(&downtown, 2024, &mut random)
            .expect("valid location");

    assert_eq!(kinds(&plain), kinds(&decorated));
    for (bare, rich) in plain.iter().zip(&decorated) {
        assert_eq!(bare.metrics(), rich.metrics());
        assert!((2..=6).contains(&rich.local_businesses().len()));
        assert!(rich
            .local_businesses()
            .iter()
            .all(|b| b.kind == rich.kind()));
    }
}

#[rstest]
fn franchises_rank_by_market_match(downtown: LocationProfile) {
    let ranked = score_franchise_recommendations(&downtown).expect("valid location");
    assert_eq!(ranked.len(), FranchiseBrand::ALL.len());
    let top = ranked.first().expect("five franchises");
    assert_eq!(top.brand(), FranchiseBrand::Dominos);
    assert_eq!(top.market_match(), 77);
}

#[rstest]
#[case(
    LocationProfile::new(12.0, 77.0).with_education_level(140.0),
    LocationProfileError::EducationOutOfRange { value: 140.0 }
)]
#[case(
    LocationProfile::new(95.0, 77.0),
    LocationProfileError::LatitudeOutOfRange { value: 95.0 }
)]
#[case(
    LocationProfile::new(12.0, 77.0).with_radius(0.0),
    LocationProfileError::NonPositiveRadius { value: 0.0 }
)]
fn invalid_locations_are_rejected(
    #[case] location: LocationProfile,
    #[case] expected: LocationProfileError,
) {
    assert_eq!(score_business_recommendations(&location), Err(expected.clone()));
    assert_eq!(score_franchise_recommendations(&location), Err(expected.clone()));
    assert_eq!(
        score_business_kind(BusinessKind::Gym, &location),
        Err(expected)
    );
}

#[rstest]
fn non_finite_income_is_rejected() {
    let location = LocationProfile::new(12.0, 77.0).with_avg_income(f64::NAN);
    assert!(matches!(
        score_business_recommendations(&location),
        Err(LocationProfileError::NonFinite { .. })
    ));
}

#[rstest]
#[case::nan_income(
    sample_location().with_avg_income(f64::NAN).with_education_level(f64::INFINITY),
    "avgIncome"
)]
#[case::infinite_education(sample_location().with_education_level(f64::INFINITY), "educationLevel")]
#[case::infinite_density(sample_location().with_business_density(f64::NEG_INFINITY), "businessDensity")]
fn every_public_entry_point_refuses_non_finite_figures(
    #[case] location: LocationProfile,
    #[case] field: &'static str,
) {
    let expected: Result<(), LocationProfileError> = Err(LocationProfileError::NonFinite { field });
    let mut random = SequenceRandom::constant(0.5);

    assert_eq!(score_business_recommendations(&location).map(|_| ()), expected.clone());
    assert_eq!(
        score_business_recommendations_with_local_businesses(&location, 2024, &mut random)
            .map(|_| ()),
        expected.clone()
    );
    assert_eq!(score_franchise_recommendations(&location).map(|_| ()), expected.clone());
    for kind in BusinessKind::ALL {
        assert_eq!(score_business_kind(kind, &location).map(|_| ()), expected.clone());
        assert_eq!(
            analyze_business_idea(kind, &location, &mut random).map(|_| ()),
            expected.clone()
        );
    }
    for brand in FranchiseBrand::ALL {
        assert_eq!(score_franchise_brand(brand, &location).map(|_| ()), expected.clone());
    }
    for period in TrafficPeriod::ALL {
        assert_eq!(
            traffic_series(&location, period, &mut random).map(|_| ()),
            expected.clone()
        );
    }
    assert_eq!(market_overview(&location, &mut random).map(|_| ()), expected);
}

#[rstest]
fn single_brand_matches_the_ranked_entry(downtown: LocationProfile) {
    let ranked = score_franchise_recommendations(&downtown).expect("valid location");
    for rec in &ranked {
        let single = score_franchise_brand(rec.brand(), &downtown).expect("valid location");
        assert_eq!(&single, rec);
    }
}

#[rstest]
fn oversized_market_figures_are_flagged_not_hidden() {
    let location = LocationProfile::new(12.0, 77.0)
        .with_population(u32::MAX)
        .with_avg_income(1e16)
        .with_education_level(50.0)
        .with_business_density(1e300);
    let ranked = score_business_recommendations(&location).expect("finite inputs are valid");

    for rec in &ranked {
        assert_eq!(rec.metrics().market_potential, u64::MAX);
        assert_eq!(rec.metrics().growth_rate, i64::MAX);
        assert!(rec.review_flags().contains(&ReviewFlag::MarketPotentialSaturated));
        assert!(rec.review_flags().contains(&ReviewFlag::GrowthSaturated));
    }
}

#[rstest]
fn same_seed_reproduces_local_businesses(downtown: LocationProfile) {
    let run = |seed: u64| {
        let mut random = SeededRandom::from_seed(seed);
        score_business_recommendations_with_local_businesses(&downtown, 2024, &mut random)
            .expect("valid location")
    };
    let first = run(42);
    let second = run(42);

    assert_eq!(first, second);
    assert!(first.iter().all(|rec| !rec.local_businesses().is_empty()));
    let other = run(43);
    assert_eq!(kinds(&first), kinds(&other));
}
