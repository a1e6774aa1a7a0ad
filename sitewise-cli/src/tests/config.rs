//! Configuration resolution for each subcommand.

use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;
use sitewise_core::BusinessKind;
use sitewise_scorer::TrafficPeriod;

use crate::idea::{IdeaArgs, IdeaConfig};
use crate::score::{ScoreArgs, ScoreConfig, config_from_layers_for_test};
use crate::traffic::{TrafficArgs, TrafficConfig};
use crate::{
    ARG_KIND, ARG_LOCATION, CliError, ENV_IDEA_KIND, ENV_SCORE_LOCATION, ENV_TRAFFIC_LOCATION,
};

#[rstest]
fn converting_score_without_location_errors() {
    let err = ScoreConfig::try_from(ScoreArgs::default()).expect_err("missing location");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_LOCATION);
            assert_eq!(env, ENV_SCORE_LOCATION);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn score_defaults_to_plain_ranking() {
    let args = ScoreArgs {
        location_path: Some(Utf8PathBuf::from("site.json")),
        reference_year: Some(2024),
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(
        config,
        ScoreConfig {
            location_path: Utf8PathBuf::from("site.json"),
            local_businesses: false,
            seed: None,
            reference_year: 2024,
        }
    );
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "location_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honour_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "location_path": "from-file.json",
            "seed": 1,
            "reference_year": 2020,
        }),
        None,
    );
    composer.push_environment(json!({
        "location_path": "from-env.json",
        "seed": 2,
    }));
    composer.push_cli(json!({ "local_businesses": true }));

    let config = config_from_layers_for_test(composer.layers()).expect("layers should merge");
    assert_eq!(config.location_path, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.seed, Some(2));
    assert_eq!(config.reference_year, 2020);
    assert!(config.local_businesses);
}

#[rstest]
#[case::default(None, TrafficPeriod::Daily)]
#[case::weekly(Some("weekly"), TrafficPeriod::Weekly)]
#[case::mixed_case(Some(" Monthly "), TrafficPeriod::Monthly)]
fn traffic_period_resolves(#[case] raw: Option<&str>, #[case] expected: TrafficPeriod) {
    let args = TrafficArgs {
        location_path: Some(Utf8PathBuf::from("site.json")),
        period: raw.map(str::to_owned),
        seed: Some(3),
    };
    let config = TrafficConfig::try_from(args).expect("config should build");
    assert_eq!(config.period, expected);
    assert_eq!(config.seed, Some(3));
}

#[rstest]
fn traffic_rejects_unknown_period() {
    let args = TrafficArgs {
        location_path: Some(Utf8PathBuf::from("site.json")),
        period: Some("hourly".to_owned()),
        seed: None,
    };
    let err = TrafficConfig::try_from(args).expect_err("unknown period");
    assert!(matches!(err, CliError::InvalidPeriod(_)), "found {err:?}");
}

#[rstest]
fn traffic_requires_location() {
    let err = TrafficConfig::try_from(TrafficArgs::default()).expect_err("missing location");
    match err {
        CliError::MissingArgument { env, .. } => assert_eq!(env, ENV_TRAFFIC_LOCATION),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::cafe("cafe", BusinessKind::Cafe)]
#[case::coworking("Coworking Space", BusinessKind::CoworkingSpace)]
#[case::retail("retail", BusinessKind::RetailStore)]
fn idea_kind_resolves(#[case] raw: &str, #[case] expected: BusinessKind) {
    let args = IdeaArgs {
        location_path: Some(Utf8PathBuf::from("site.json")),
        kind: Some(raw.to_owned()),
        seed: None,
    };
    let config = IdeaConfig::try_from(args).expect("config should build");
    assert_eq!(config.kind, expected);
}

#[rstest]
fn idea_requires_kind() {
    let args = IdeaArgs {
        location_path: Some(Utf8PathBuf::from("site.json")),
        ..IdeaArgs::default()
    };
    let err = IdeaConfig::try_from(args).expect_err("missing kind");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_KIND);
            assert_eq!(env, ENV_IDEA_KIND);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn idea_rejects_unknown_kind() {
    let args = IdeaArgs {
        location_path: Some(Utf8PathBuf::from("site.json")),
        kind: Some("bakery".to_owned()),
        seed: None,
    };
    let err = IdeaConfig::try_from(args).expect_err("unknown kind");
    assert!(matches!(err, CliError::InvalidKind(_)), "found {err:?}");
}
