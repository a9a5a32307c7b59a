//! Listening analysis core: profile statistics and candidate ranking.
//!
//! Both entry points are pure functions over in-memory track records. They
//! perform no I/O, hold no state between calls, and are safe to call from
//! sync or async contexts. Where the records come from (caller-provided
//! fixtures or the live catalog) is invisible here.

mod profile;
mod recommend;

pub use profile::analyze;
pub use recommend::{recommend, DEFAULT_RECOMMENDATION_LIMIT};

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// Popularity at or above this value counts as mainstream.
pub const MAINSTREAM_THRESHOLD: u8 = 70;

/// Popularity at or above this value (and below mainstream) counts as mid.
pub const MID_THRESHOLD: u8 = 30;

/// Popularity tier derived from artist popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopularityTier {
    Mainstream,
    Mid,
    Emerging,
}

impl PopularityTier {
    /// Classify a 0-100 popularity value.
    pub fn from_popularity(popularity: u8) -> Self {
        if popularity >= MAINSTREAM_THRESHOLD {
            Self::Mainstream
        } else if popularity >= MID_THRESHOLD {
            Self::Mid
        } else {
            Self::Emerging
        }
    }
}

impl fmt::Display for PopularityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mainstream => "mainstream",
            Self::Mid => "mid",
            Self::Emerging => "emerging",
        };
        write!(f, "{label}")
    }
}

/// Round half away from zero to two decimal places.
///
/// The crate-wide rounding mode for every reported statistic.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Count label frequencies, ranked by descending count.
///
/// Ties keep the order in which a label was first seen, so results are
/// stable across calls for identical input order.
pub(crate) fn ranked_counts<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&'a str> = Vec::new();

    for label in labels {
        match counts.entry(label) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                entry.insert(1);
                order.push(label);
            }
        }
    }

    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.into_iter().map(|label| (label, counts[label])).collect()
}
