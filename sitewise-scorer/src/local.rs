//! Synthesised nearby businesses attached to recommendations as demo data.
//!
//! Every figure comes from the supplied [`RandomSource`]; nothing here feeds
//! back into scoring.

use sitewise_core::{BusinessKind, BusinessStatus, LocalBusiness, LocationProfile, RandomSource};

use crate::numeric::round_to_tenth;

/// Distance reported when the drawn distance is exactly zero.
pub const FALLBACK_DISTANCE_KM: f64 = 5.0;

/// Draws strictly above this value mark a business as closed.
pub const CLOSED_THRESHOLD: f64 = 0.8;

/// Generate two to six nearby businesses of `kind`, nearest first.
///
/// `reference_year` anchors the "operating since" years. Draws happen in a
/// fixed order per business: distance, rating, reviews, age, status.
pub(crate) fn synthesize_local_businesses<R>(
    kind: BusinessKind,
    location: &LocationProfile,
    reference_year: i32,
    random: &mut R,
) -> Vec<LocalBusiness>
where
    R: RandomSource + ?Sized,
{
    let count = random.range_u32(2, 7);
    let radius = location.radius_km();
    let mut businesses: Vec<LocalBusiness> = (1..=count)
        .map(|index| {
            let drawn = random.next_f64() * radius;
            let distance = if drawn > 0.0 {
                round_to_tenth(drawn)
            } else {
                FALLBACK_DISTANCE_KM
            };
            let rating = round_to_tenth(3.0 + random.next_f64() * 2.0);
            let reviews = random.range_u32(50, 250);
            let years_trading = random.range_u32(1, 11);
            let status = if random.exceeds(CLOSED_THRESHOLD) {
                BusinessStatus::Closed
            } else {
                BusinessStatus::Open
            };
            LocalBusiness {
                name: format!("{kind} {index}"),
                kind,
                distance,
                rating,
                reviews,
                operating_since: reference_year.saturating_sub_unsigned(years_trading),
                status,
            }
        })
        .collect();
    businesses.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    businesses
}
