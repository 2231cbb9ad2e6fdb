use crate::models::SalaryRange;

/// Currency code of salaries that are taken into account
pub const LOCAL_CURRENCY: &str = "RUR";

const OPEN_UPPER_FACTOR: f64 = 0.8;
const OPEN_LOWER_FACTOR: f64 = 1.2;

/// Estimate a single salary figure for a listing.
///
/// A closed range yields its midpoint. An open range is shifted towards the
/// missing side: an upper bound alone is scaled by 0.8, a lower bound alone
/// by 1.2. Nothing is estimated for ranges in a foreign currency or without
/// any bound.
pub fn estimate(range: &SalaryRange) -> Option<f64> {
    if let Some(currency) = &range.currency {
        if currency != LOCAL_CURRENCY {
            return None;
        }
    }
    match (range.from, range.to) {
        (Some(from), Some(to)) => Some((f64::from(from) + f64::from(to)) / 2.0),
        (None, Some(to)) => Some(f64::from(to) * OPEN_UPPER_FACTOR),
        (Some(from), None) => Some(f64::from(from) * OPEN_LOWER_FACTOR),
        (None, None) => None,
    }
}
