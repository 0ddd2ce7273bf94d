//! Income concentration across drivers.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{Driver, TaxiPark};

/// Thresholds for [`check_pareto_principle_with`].
///
/// Use [`Default`] for the classic 20/80 split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParetoOptions {
    /// Share of registered drivers, in percent, considered "top earners". The resulting driver
    /// count is truncated, not rounded.
    pub driver_percent: usize,
    /// Share of total income, in percent, those drivers must reach.
    pub income_percent: f64,
}

impl Default for ParetoOptions {
    fn default() -> Self {
        Self {
            driver_percent: 20,
            income_percent: 80.0,
        }
    }
}

/// Total income per driver that appears in at least one trip, highest first.
///
/// Drivers with equal income are ordered by name.
pub fn driver_income(park: &TaxiPark) -> Vec<(&Driver, f64)> {
    let mut income: HashMap<&Driver, f64> = HashMap::new();
    for trip in &park.trips {
        *income.entry(&trip.driver).or_insert(0.0) += trip.cost;
    }

    let mut ranked: Vec<(&Driver, f64)> = income.into_iter().collect();
    ranked.sort_by(|(da, a), (db, b)| match b.total_cmp(a) {
        Ordering::Equal => da.cmp(db),
        other => other,
    });
    ranked
}

/// Check whether 20% of the drivers contribute at least 80% of the income.
///
/// The number of top drivers is `all_drivers.len() * 20 / 100`, truncated. With fewer than five
/// registered drivers that is zero, so any non-zero income fails the check. A park without trips
/// always passes.
pub fn check_pareto_principle(park: &TaxiPark) -> bool {
    check_pareto_principle_with(park, &ParetoOptions::default())
}

/// [`check_pareto_principle`] with custom thresholds.
pub fn check_pareto_principle_with(park: &TaxiPark, options: &ParetoOptions) -> bool {
    let number_max = park.all_drivers.len() * options.driver_percent / 100;
    let top_income: f64 = driver_income(park)
        .into_iter()
        .take(number_max)
        .map(|(_, income)| income)
        .sum();
    let total_income: f64 = park.trips.iter().map(|t| t.cost).sum();

    let holds = total_income * (options.income_percent / 100.0) <= top_income;
    tracing::debug!(
        drivers = park.all_drivers.len(),
        number_max,
        top_income,
        total_income,
        holds,
        "pareto check"
    );
    holds
}
