use itertools::{Itertools, MinMaxResult};

use crate::star::Star;

/// `max_age` reported while fewer than two stars exist.
pub const EMPTY_MAX_AGE: f64 = 0.0;

/// `min_age` reported while fewer than two stars exist.
pub const EMPTY_MIN_AGE: f64 = 1000.0;

/// Population size and age range of a star collection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RangeStats {
    pub count: usize,
    pub max_age: f64,
    pub min_age: f64,
}

impl Default for RangeStats {
    fn default() -> Self {
        Self {
            count: 0,
            max_age: EMPTY_MAX_AGE,
            min_age: EMPTY_MIN_AGE,
        }
    }
}

impl RangeStats {
    /// Stats over a multiset of ages.
    ///
    /// The range is defined over pairs of distinct stars, seeded with [`EMPTY_MAX_AGE`] and
    /// [`EMPTY_MIN_AGE`]. With fewer than two ages no pair exists and the seeds are reported
    /// as-is. With two or more, every age is part of some pair, so a single min/max scan gives
    /// the same answer as the pairwise walk.
    ///
    /// A `NaN` age poisons the range: once any pair includes it, both `max_age` and `min_age`
    /// are `NaN`, the way `Math.max`/`Math.min` fold it.
    pub fn of_ages(ages: impl IntoIterator<Item = f64>) -> Self {
        let ages: Vec<f64> = ages.into_iter().collect();
        let mut stats = Self {
            count: ages.len(),
            ..Default::default()
        };
        if stats.count < 2 {
            return stats;
        }

        if ages.iter().any(|age| age.is_nan()) {
            stats.max_age = f64::NAN;
            stats.min_age = f64::NAN;
            return stats;
        }

        let (lo, hi) = match ages.into_iter().minmax() {
            MinMaxResult::NoElements => return stats,
            MinMaxResult::OneElement(age) => (age, age),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        stats.max_age = stats.max_age.max(hi);
        stats.min_age = stats.min_age.min(lo);
        stats
    }
}

/// Compute [`RangeStats`] over a star collection.
pub fn range_stats<'a>(stars: impl IntoIterator<Item = &'a Star>) -> RangeStats {
    RangeStats::of_ages(stars.into_iter().map(|star| star.age().value()))
}
