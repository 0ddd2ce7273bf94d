//! Trip duration bucketing.

use std::collections::BTreeMap;

use crate::types::{DurationPeriod, TaxiPark};

const PERIOD_MINUTES: u32 = 10;

/// The 10-minute bucket containing `duration`: `0..=9`, `10..=19`, and so on.
pub fn duration_period_of(duration: u32) -> DurationPeriod {
    let start = duration / PERIOD_MINUTES * PERIOD_MINUTES;
    start..=start.saturating_add(PERIOD_MINUTES - 1)
}

/// The duration bucket holding the most trips, or `None` if the park has no trips.
///
/// When several buckets tie, the shortest one wins.
pub fn find_the_most_frequent_trip_duration_period(park: &TaxiPark) -> Option<DurationPeriod> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for trip in &park.trips {
        *counts.entry(trip.duration / PERIOD_MINUTES).or_insert(0) += 1;
    }

    // max_by_key keeps the last maximum, so walk buckets from longest to shortest.
    counts
        .into_iter()
        .rev()
        .max_by_key(|&(_, n)| n)
        .map(|(bucket, _)| duration_period_of(bucket * PERIOD_MINUTES))
}
