//! Synthetic footfall series for daily, weekly and monthly views.
//!
//! Shapes are fixed per period; amplitude follows population, business
//! density and income, with one noise draw per bucket.

use std::{fmt, str::FromStr};

use sitewise_core::{LocationProfile, LocationProfileError, RandomSource};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Time span a traffic series covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrafficPeriod {
    /// Twenty-four hourly buckets.
    #[default]
    Daily,
    /// Seven day buckets, Monday first.
    Weekly,
    /// Twelve month buckets, January first.
    Monthly,
}

impl TrafficPeriod {
    /// Every period.
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Hours represented by one bucket.
    const fn scale(self) -> f64 {
        match self {
            Self::Daily => 1.0,
            Self::Weekly => 24.0,
            Self::Monthly => 720.0,
        }
    }
}

impl fmt::Display for TrafficPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a period name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traffic period '{0}', expected daily, weekly or monthly")]
pub struct ParseTrafficPeriodError(String);

impl FromStr for TrafficPeriod {
    type Err = ParseTrafficPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTrafficPeriodError(s.to_owned()))
    }
}

/// One bucket of a traffic series.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TrafficSample {
    /// `HH:00`, weekday name or three-letter month.
    pub label: String,
    /// Total passers-by.
    pub traffic: u64,
    /// Pedestrian share of `traffic`.
    pub pedestrian: u64,
    /// Remainder of `traffic`.
    pub vehicle: u64,
}

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Multiplier shape and pedestrian ratio of one bucket.
#[derive(Debug, Clone, Copy)]
struct BucketShape {
    multiplier: f64,
    pedestrian_ratio: f64,
}

impl BucketShape {
    const BASELINE: Self = Self {
        multiplier: 1.0,
        pedestrian_ratio: 0.6,
    };

    const fn scaled(factor: f64, business: f64, pedestrian_ratio: f64) -> Self {
        Self {
            multiplier: factor * business,
            pedestrian_ratio,
        }
    }
}

const fn hour_shape(hour: usize, business: f64) -> BucketShape {
    match hour {
        8..=10 => BucketShape::scaled(2.5, business, 0.7),
        12..=14 => BucketShape::scaled(2.0, business, 0.8),
        17..=19 => BucketShape::scaled(3.0, business, 0.6),
        0..=5 | 23 => BucketShape {
            multiplier: 0.3,
            pedestrian_ratio: 0.3,
        },
        _ => BucketShape::BASELINE,
    }
}

fn weekday_shape(day: &str, business: f64) -> BucketShape {
    match day {
        "Saturday" => BucketShape::scaled(2.0, business, 0.8),
        "Sunday" => BucketShape::scaled(1.8, business, 0.9),
        "Friday" => BucketShape::scaled(1.5, business, 0.7),
        _ => BucketShape::BASELINE,
    }
}

fn month_shape(month: &str, business: f64) -> BucketShape {
    match month {
        "Oct" | "Nov" | "Dec" => BucketShape::scaled(1.5, business, 0.8),
        "Jun" | "Jul" | "Aug" => BucketShape::scaled(0.8, business, 0.5),
        _ => BucketShape::BASELINE,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "traffic figures are non-negative and far below u64::MAX"
)]
fn floor_count(value: f64) -> u64 {
    value.max(0.0).floor() as u64
}

#[expect(
    clippy::cast_precision_loss,
    reason = "traffic figures stay far below 2^53"
)]
const fn count_as_f64(value: u64) -> f64 {
    value as f64
}

/// Generate the traffic series for `period`.
///
/// The location is validated before any draw; one draw is then taken per
/// bucket, in bucket order.
///
/// # Errors
/// Returns [`LocationProfileError`] when the location fails validation.
pub fn traffic_series<R>(
    location: &LocationProfile,
    period: TrafficPeriod,
    random: &mut R,
) -> Result<Vec<TrafficSample>, LocationProfileError>
where
    R: RandomSource + ?Sized,
{
    location.validate()?;
    let base_traffic = (location.population_f64() / 1000.0).floor();
    let business = location.business_density / 5.0;
    let income = location.avg_income / 50_000.0;
    let scale = period.scale();

    let buckets: Vec<(String, BucketShape)> = match period {
        TrafficPeriod::Daily => (0..24)
            .map(|hour| (format!("{hour:02}:00"), hour_shape(hour, business)))
            .collect(),
        TrafficPeriod::Weekly => WEEKDAYS
            .iter()
            .map(|day| ((*day).to_owned(), weekday_shape(day, business)))
            .collect(),
        TrafficPeriod::Monthly => MONTHS
            .iter()
            .map(|month| ((*month).to_owned(), month_shape(month, business)))
            .collect(),
    };

    Ok(buckets
        .into_iter()
        .map(|(label, shape)| {
            let noise = 0.8 + random.next_f64() * 0.4;
            let multiplier = shape.multiplier * noise * (0.5 + income * 0.5);
            let traffic = floor_count(base_traffic * multiplier * scale);
            let pedestrian = floor_count(count_as_f64(traffic) * shape.pedestrian_ratio);
            TrafficSample {
                label,
                traffic,
                pedestrian,
                vehicle: traffic - pedestrian,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sitewise_core::test_support::{SequenceRandom, sample_location};

    #[rstest]
    #[case(TrafficPeriod::Daily, 24, "00:00")]
    #[case(TrafficPeriod::Weekly, 7, "Monday")]
    #[case(TrafficPeriod::Monthly, 12, "Jan")]
    fn series_have_expected_buckets(
        #[case] period: TrafficPeriod,
        #[case] len: usize,
        #[case] first: &str,
    ) {
        let mut random = SequenceRandom::constant(0.5);
        let series = traffic_series(&sample_location(), period, &mut random).expect("valid location");
        assert_eq!(series.len(), len);
        assert_eq!(series.first().map(|s| s.label.as_str()), Some(first));
    }

    #[rstest]
    fn daily_shape_follows_reference_figures() {
        // 500 base, business factor 1, income factor 1, noise 1.0
        let mut random = SequenceRandom::constant(0.5);
        let series = traffic_series(&sample_location(), TrafficPeriod::Daily, &mut random)
            .expect("valid location");
        let at = |hour: usize| series.get(hour).expect("24 buckets").clone();

        assert_eq!(at(3).traffic, 150);
        assert_eq!(at(3).pedestrian, 45);
        assert_eq!(at(9).traffic, 1250);
        assert_eq!(at(9).pedestrian, 875);
        assert_eq!(at(13).traffic, 1000);
        assert_eq!(at(18).traffic, 1500);
        assert_eq!(at(18).vehicle, 600);
        assert_eq!(at(15).traffic, 500);
        assert_eq!(at(23).label, "23:00");
    }

    #[rstest]
    fn weekly_and_monthly_apply_scale() {
        let mut random = SequenceRandom::constant(0.5);
        let weekly = traffic_series(&sample_location(), TrafficPeriod::Weekly, &mut random)
            .expect("valid location");
        let saturday = weekly.get(5).expect("seven buckets");
        assert_eq!(saturday.label, "Saturday");
        assert_eq!(saturday.traffic, 24_000);
        assert_eq!(saturday.pedestrian, 19_200);

        let monthly = traffic_series(&sample_location(), TrafficPeriod::Monthly, &mut random)
            .expect("valid location");
        let january = monthly.first().expect("twelve buckets");
        assert_eq!(january.traffic, 360_000);
    }

    #[rstest]
    fn vehicles_complete_the_total() {
        let mut random = SequenceRandom::new(vec![0.1, 0.7, 0.33, 0.99]);
        for period in TrafficPeriod::ALL {
            let series =
                traffic_series(&sample_location(), period, &mut random).expect("valid location");
            for sample in series {
                assert_eq!(sample.pedestrian + sample.vehicle, sample.traffic);
            }
        }
    }

    #[rstest]
    #[case("daily", TrafficPeriod::Daily)]
    #[case(" Weekly ", TrafficPeriod::Weekly)]
    #[case("MONTHLY", TrafficPeriod::Monthly)]
    fn periods_parse_case_insensitively(#[case] input: &str, #[case] expected: TrafficPeriod) {
        assert_eq!(input.parse::<TrafficPeriod>(), Ok(expected));
    }

    #[rstest]
    fn unknown_period_is_rejected() {
        let err = "hourly".parse::<TrafficPeriod>().expect_err("not a period");
        assert!(err.to_string().contains("hourly"));
    }
}
