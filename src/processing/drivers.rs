//! Driver-centric queries.

use std::collections::HashSet;

use crate::types::{Driver, TaxiPark};

/// Drivers registered in the park who performed no trips.
pub fn find_fake_drivers(park: &TaxiPark) -> HashSet<Driver> {
    let active: HashSet<&Driver> = park.trips.iter().map(|t| &t.driver).collect();
    park.all_drivers
        .iter()
        .filter(|d| !active.contains(d))
        .cloned()
        .collect()
}
