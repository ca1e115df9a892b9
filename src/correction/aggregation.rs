//! Worked-time aggregation.
//!
//! Reduces a corrected stamp sequence to the total time worked by pairing
//! each In-stamp with the next Out-stamp after it.

use chrono::TimeDelta;

use crate::models::Stamp;

/// Outcome of aggregating a stamp sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregation {
    /// Total time covered by complete (In, Out) pairs.
    pub worked: TimeDelta,
    /// Number of complete pairs.
    pub pairs: usize,
    /// Stamps that were not part of any pair.
    pub unpaired: usize,
}

impl Aggregation {
    /// Returns true if every stamp was part of a pair.
    pub fn is_alternating(&self) -> bool {
        self.unpaired == 0
    }
}

/// Pairs In- and Out-stamps in order and sums the paired time.
///
/// An In-stamp opens a pair unless one is already open; an Out-stamp closes
/// the open pair. Stamps that cannot be paired (a repeated In while a pair is
/// open, an Out with no open pair, a trailing In) are counted in
/// [`Aggregation::unpaired`] and contribute nothing to the sum.
///
/// # Examples
///
/// ```
/// use worktime_engine::correction::aggregate;
/// use worktime_engine::models::Stamp;
/// use chrono::{NaiveDate, TimeDelta};
///
/// let day = NaiveDate::from_ymd_opt(2016, 4, 3).unwrap();
/// let at = |h| day.and_hms_opt(h, 0, 0).unwrap();
/// let stamps = vec![
///     Stamp::clock_in(1, at(9)),
///     Stamp::clock_out(1, at(12)),
///     Stamp::clock_in(1, at(15)),
///     Stamp::clock_out(1, at(18)),
/// ];
///
/// let aggregation = aggregate(&stamps);
/// assert_eq!(aggregation.worked, TimeDelta::hours(6));
/// assert_eq!(aggregation.pairs, 2);
/// assert!(aggregation.is_alternating());
/// ```
pub fn aggregate(stamps: &[Stamp]) -> Aggregation {
    let mut worked = TimeDelta::zero();
    let mut pairs = 0;
    let mut unpaired = 0;
    let mut open: Option<&Stamp> = None;

    for stamp in stamps {
        match (stamp.is_in(), open) {
            (true, None) => open = Some(stamp),
            (true, Some(_)) => unpaired += 1,
            (false, Some(start)) => {
                // ordered input keeps this non-negative; clamp anyway
                worked += (stamp.time - start.time).max(TimeDelta::zero());
                pairs += 1;
                open = None;
            }
            (false, None) => unpaired += 1,
        }
    }

    if open.is_some() {
        unpaired += 1;
    }

    Aggregation {
        worked,
        pairs,
        unpaired,
    }
}

/// Total worked time of a corrected stamp sequence.
pub fn total_worked(stamps: &[Stamp]) -> TimeDelta {
    aggregate(stamps).worked
}
