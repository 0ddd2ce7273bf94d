//! Passenger-centric queries.
//!
//! All results are drawn from [`TaxiPark::all_passengers`]; passengers that appear on trips but
//! were never registered are ignored.

use std::collections::{HashMap, HashSet};

use crate::types::{Driver, Passenger, TaxiPark, Trip};

/// Passengers who completed at least `min_trips` trips.
///
/// A shared trip counts once for each of its passengers. `min_trips == 0` matches every
/// registered passenger.
pub fn find_faithful_passengers(park: &TaxiPark, min_trips: usize) -> HashSet<Passenger> {
    let counts = trip_counts(park, |_| true);
    park.all_passengers
        .iter()
        .filter(|p| counts.get(p).copied().unwrap_or(0) >= min_trips)
        .cloned()
        .collect()
}

/// Passengers taken by `driver` on more than one trip.
pub fn find_frequent_passengers(park: &TaxiPark, driver: &Driver) -> HashSet<Passenger> {
    let counts = trip_counts(park, |t| &t.driver == driver);
    park.all_passengers
        .iter()
        .filter(|p| counts.get(p).copied().unwrap_or(0) > 1)
        .cloned()
        .collect()
}

/// Passengers who had a discount on the majority of their trips.
///
/// Discounted trips must strictly outnumber full-price ones, so passengers with no trips never
/// qualify.
pub fn find_smart_passengers(park: &TaxiPark) -> HashSet<Passenger> {
    park.all_passengers
        .iter()
        .filter(|p| {
            let (with, without) = park.trips_of(p).fold((0usize, 0usize), |(with, without), t| {
                if t.is_discounted() {
                    (with + 1, without)
                } else {
                    (with, without + 1)
                }
            });
            with > without
        })
        .cloned()
        .collect()
}

fn trip_counts<F>(park: &TaxiPark, mut keep: F) -> HashMap<&Passenger, usize>
where
    F: FnMut(&Trip) -> bool,
{
    let mut counts = HashMap::new();
    for trip in park.trips.iter().filter(|&t| keep(t)) {
        for p in &trip.passengers {
            *counts.entry(p).or_insert(0) += 1;
        }
    }
    counts
}
