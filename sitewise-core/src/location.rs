//! Location profiles supplied by the analytics provider.
//!
//! A [`LocationProfile`] is the only input to scoring. Callers must run
//! [`LocationProfile::validate`] (the scoring entry points do so) before any
//! arithmetic touches the fields, so non-finite values never reach financial
//! outputs.

use geo::{Coord, Rect};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Search radius assumed when the provider omits one, in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 1.0;

/// Kilometres spanned by one degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// Grid cells per degree used when deriving [`LocationProfile::seed_region`].
const SEED_CELLS_PER_DEGREE: f64 = 100.0;

/// Demographic and economic features of a location.
///
/// Field names serialise in camelCase to match provider payloads.
///
/// # Examples
///
/// ```
/// use sitewise_core::LocationProfile;
///
/// let location = LocationProfile::new(12.97, 77.59)
///     .with_population(500_000)
///     .with_avg_income(50_000.0)
///     .with_education_level(75.0)
///     .with_business_density(5.0)
///     .with_competitor_count(3);
/// assert!(location.validate().is_ok());
/// assert_eq!(location.radius_km(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LocationProfile {
    /// Optional display name for the location.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Resident population within the search radius.
    pub population: u32,
    /// Average income, in the same currency unit as catalog baselines.
    pub avg_income: f64,
    /// Share of residents with higher education, as a percentage.
    pub education_level: f64,
    /// Businesses per square kilometre.
    pub business_density: f64,
    /// Competing businesses within the search radius.
    pub competitor_count: u32,
    /// Search radius in kilometres; [`DEFAULT_RADIUS_KM`] when absent.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub radius: Option<f64>,
}

/// Errors returned by [`LocationProfile::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationProfileError {
    /// A numeric field was `NaN` or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A field that models a count or amount was negative.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// Education level fell outside `0..=100`.
    #[error("educationLevel must be between 0 and 100 (got {value})")]
    EducationOutOfRange {
        /// Value supplied by the caller.
        value: f64,
    },
    /// Latitude fell outside `-90..=90`.
    #[error("latitude must be between -90 and 90 (got {value})")]
    LatitudeOutOfRange {
        /// Value supplied by the caller.
        value: f64,
    },
    /// Longitude fell outside `-180..=180`.
    #[error("longitude must be between -180 and 180 (got {value})")]
    LongitudeOutOfRange {
        /// Value supplied by the caller.
        value: f64,
    },
    /// An explicit radius was zero or negative.
    #[error("radius must be positive (got {value})")]
    NonPositiveRadius {
        /// Value supplied by the caller.
        value: f64,
    },
}

impl LocationProfile {
    /// Construct an empty profile at the given coordinates.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            ..Self::default()
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the resident population.
    #[must_use]
    pub const fn with_population(mut self, population: u32) -> Self {
        self.population = population;
        self
    }

    /// Set the average income.
    #[must_use]
    pub const fn with_avg_income(mut self, avg_income: f64) -> Self {
        self.avg_income = avg_income;
        self
    }

    /// Set the education level percentage.
    #[must_use]
    pub const fn with_education_level(mut self, education_level: f64) -> Self {
        self.education_level = education_level;
        self
    }

    /// Set the business density.
    #[must_use]
    pub const fn with_business_density(mut self, business_density: f64) -> Self {
        self.business_density = business_density;
        self
    }

    /// Set the competitor count.
    #[must_use]
    pub const fn with_competitor_count(mut self, competitor_count: u32) -> Self {
        self.competitor_count = competitor_count;
        self
    }

    /// Set an explicit search radius in kilometres.
    #[must_use]
    pub const fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius = Some(radius_km);
        self
    }

    /// Check that every numeric field lies in its documented domain.
    ///
    /// # Errors
    ///
    /// Returns the first [`LocationProfileError`] found. Non-finite values are
    /// reported before range violations.
    pub fn validate(&self) -> Result<(), LocationProfileError> {
        let finite_fields = [
            ("lat", self.lat),
            ("lng", self.lng),
            ("avgIncome", self.avg_income),
            ("educationLevel", self.education_level),
            ("businessDensity", self.business_density),
        ];
        for (field, value) in finite_fields {
            if !value.is_finite() {
                return Err(LocationProfileError::NonFinite { field });
            }
        }
        if let Some(radius) = self.radius
            && !radius.is_finite()
        {
            return Err(LocationProfileError::NonFinite { field: "radius" });
        }

        for (field, value) in [
            ("avgIncome", self.avg_income),
            ("businessDensity", self.business_density),
        ] {
            if value < 0.0 {
                return Err(LocationProfileError::Negative { field, value });
            }
        }
        if !(0.0..=100.0).contains(&self.education_level) {
            return Err(LocationProfileError::EducationOutOfRange {
                value: self.education_level,
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(LocationProfileError::LatitudeOutOfRange { value: self.lat });
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(LocationProfileError::LongitudeOutOfRange { value: self.lng });
        }
        if let Some(radius) = self.radius
            && radius <= 0.0
        {
            return Err(LocationProfileError::NonPositiveRadius { value: radius });
        }
        Ok(())
    }

    /// Search radius in kilometres, defaulting to [`DEFAULT_RADIUS_KM`].
    #[must_use]
    pub fn radius_km(&self) -> f64 {
        self.radius.unwrap_or(DEFAULT_RADIUS_KM)
    }

    /// Population as a float for scoring arithmetic.
    #[must_use]
    pub fn population_f64(&self) -> f64 {
        f64::from(self.population)
    }

    /// Competitor count as a float for scoring arithmetic.
    #[must_use]
    pub fn competitor_count_f64(&self) -> f64 {
        f64::from(self.competitor_count)
    }

    /// Centre of the location, with `x` as longitude and `y` as latitude.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    /// Bounding box enclosing the search circle.
    ///
    /// Uses an equirectangular approximation; the longitude span widens with
    /// latitude and is capped at the full globe near the poles.
    #[must_use]
    pub fn search_bounds(&self) -> Rect<f64> {
        let radius = self.radius_km();
        let lat_span = radius / KM_PER_DEGREE;
        let cos_lat = self.lat.to_radians().cos();
        let lng_span = if cos_lat <= f64::EPSILON {
            180.0
        } else {
            (radius / (KM_PER_DEGREE * cos_lat)).min(180.0)
        };
        Rect::new(
            Coord {
                x: self.lng - lng_span,
                y: (self.lat - lat_span).max(-90.0),
            },
            Coord {
                x: self.lng + lng_span,
                y: (self.lat + lat_span).min(90.0),
            },
        )
    }

    /// Deterministic seed shared by every location in the same grid cell.
    ///
    /// Coordinates are quantised to a 0.01 degree grid, so nearby lookups
    /// reproduce the same cosmetic data.
    #[must_use]
    pub fn seed_region(&self) -> u64 {
        let lat_cell = grid_cell(self.lat);
        let lng_cell = grid_cell(self.lng);
        let packed = (lat_cell.cast_unsigned() << 32) ^ (lng_cell.cast_unsigned() & 0xffff_ffff);
        splitmix64(packed)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "validated coordinates scale to at most 18_000 cells"
)]
fn grid_cell(degrees: f64) -> i64 {
    (degrees * SEED_CELLS_PER_DEGREE).floor() as i64
}

const fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn downtown() -> LocationProfile {
        LocationProfile::new(12.9716, 77.5946)
            .with_population(500_000)
            .with_avg_income(50_000.0)
            .with_education_level(75.0)
            .with_business_density(5.0)
            .with_competitor_count(3)
    }

    #[rstest]
    fn valid_profile_passes(downtown: LocationProfile) {
        assert_eq!(downtown.validate(), Ok(()));
    }

    #[rstest]
    #[case::nan_income(LocationProfile { avg_income: f64::NAN, ..LocationProfile::default() }, "avgIncome")]
    #[case::infinite_density(LocationProfile { business_density: f64::INFINITY, ..LocationProfile::default() }, "businessDensity")]
    #[case::nan_education(LocationProfile { education_level: f64::NAN, ..LocationProfile::default() }, "educationLevel")]
    #[case::infinite_lat(LocationProfile { lat: f64::NEG_INFINITY, ..LocationProfile::default() }, "lat")]
    #[case::nan_radius(LocationProfile { radius: Some(f64::NAN), ..LocationProfile::default() }, "radius")]
    fn non_finite_fields_are_rejected(
        #[case] profile: LocationProfile,
        #[case] expected: &'static str,
    ) {
        match profile.validate() {
            Err(LocationProfileError::NonFinite { field }) => assert_eq!(field, expected),
            other => panic!("expected NonFinite for {expected}, got {other:?}"),
        }
    }

    #[rstest]
    fn negative_income_is_rejected(downtown: LocationProfile) {
        let profile = downtown.with_avg_income(-1.0);
        assert!(matches!(
            profile.validate(),
            Err(LocationProfileError::Negative {
                field: "avgIncome",
                ..
            })
        ));
    }

    #[rstest]
    #[case(-0.5)]
    #[case(100.5)]
    fn education_outside_percentage_is_rejected(downtown: LocationProfile, #[case] value: f64) {
        let profile = downtown.with_education_level(value);
        assert_eq!(
            profile.validate(),
            Err(LocationProfileError::EducationOutOfRange { value })
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    fn non_positive_radius_is_rejected(downtown: LocationProfile, #[case] value: f64) {
        let profile = downtown.with_radius(value);
        assert_eq!(
            profile.validate(),
            Err(LocationProfileError::NonPositiveRadius { value })
        );
    }

    #[rstest]
    fn out_of_range_coordinates_are_rejected() {
        let bad_lat = LocationProfile::new(91.0, 0.0);
        assert!(matches!(
            bad_lat.validate(),
            Err(LocationProfileError::LatitudeOutOfRange { .. })
        ));
        let bad_lng = LocationProfile::new(0.0, -181.0);
        assert!(matches!(
            bad_lng.validate(),
            Err(LocationProfileError::LongitudeOutOfRange { .. })
        ));
    }

    #[rstest]
    fn radius_defaults_to_one_kilometre(downtown: LocationProfile) {
        assert!((downtown.radius_km() - 1.0).abs() < f64::EPSILON);
        assert!((downtown.with_radius(2.5).radius_km() - 2.5).abs() < f64::EPSILON);
    }

    #[rstest]
    fn search_bounds_enclose_centre(downtown: LocationProfile) {
        let bounds = downtown.clone().with_radius(3.0).search_bounds();
        let centre = downtown.coord();
        assert!(bounds.min().x < centre.x && centre.x < bounds.max().x);
        assert!(bounds.min().y < centre.y && centre.y < bounds.max().y);
        let lat_span = bounds.max().y - bounds.min().y;
        assert!((lat_span - 6.0 / 111.32).abs() < 1e-9);
    }

    #[rstest]
    fn seed_region_is_shared_within_a_grid_cell(downtown: LocationProfile) {
        let nearby = LocationProfile {
            lat: downtown.lat + 0.0001,
            ..downtown.clone()
        };
        let far = LocationProfile {
            lat: downtown.lat + 0.5,
            ..downtown.clone()
        };
        assert_eq!(downtown.seed_region(), nearby.seed_region());
        assert_ne!(downtown.seed_region(), far.seed_region());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_camel_case_payload() {
        let payload = r#"{
            "lat": 19.07,
            "lng": 72.87,
            "population": 120000,
            "avgIncome": 42000,
            "educationLevel": 61.5,
            "businessDensity": 8.2,
            "competitorCount": 4
        }"#;
        let profile: LocationProfile =
            serde_json::from_str(payload).expect("payload should deserialise");
        assert_eq!(profile.population, 120_000);
        assert_eq!(profile.competitor_count, 4);
        assert!(profile.radius.is_none());
        assert!(profile.name.is_none());
    }
}
