//! Core data model types.
//!
//! A [`TaxiPark`] is the read-only aggregate every query in [`crate::processing`] operates on: the
//! universe of known [`Driver`]s and [`Passenger`]s plus the list of completed [`Trip`]s.

use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A 10-minute trip duration bucket, e.g. `20..=29`.
pub type DurationPeriod = RangeInclusive<u32>;

/// Identity of a driver. Compared and hashed by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Driver(String);

impl Driver {
    /// Create a driver identity from a name or id.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identity string.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Driver {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Identity of a passenger. Compared and hashed by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passenger(String);

impl Passenger {
    /// Create a passenger identity from a name or id.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identity string.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Passenger {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One completed ride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Driver who performed the trip.
    pub driver: Driver,
    /// Riders sharing the trip. Expected to be non-empty.
    pub passengers: HashSet<Passenger>,
    /// Trip length in minutes.
    pub duration: u32,
    /// Fare.
    pub cost: f64,
    /// Discount fraction, if the trip was discounted.
    pub discount: Option<f64>,
}

impl Trip {
    /// Create an undiscounted trip.
    pub fn new<I>(driver: Driver, passengers: I, duration: u32, cost: f64) -> Self
    where
        I: IntoIterator<Item = Passenger>,
    {
        Self {
            driver,
            passengers: passengers.into_iter().collect(),
            duration,
            cost,
            discount: None,
        }
    }

    /// Returns the same trip with `discount` applied.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Whether a discount was applied to this trip.
    pub fn is_discounted(&self) -> bool {
        self.discount.is_some()
    }

    /// Whether `passenger` rode on this trip.
    pub fn has_passenger(&self, passenger: &Passenger) -> bool {
        self.passengers.contains(passenger)
    }
}

/// The read-only aggregate of drivers, passengers and trips.
///
/// `all_drivers` and `all_passengers` may contain identities that appear in no trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxiPark {
    /// Every driver known to the park.
    pub all_drivers: HashSet<Driver>,
    /// Every passenger known to the park.
    pub all_passengers: HashSet<Passenger>,
    /// Completed trips.
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    /// Create a park from its parts.
    pub fn new(
        all_drivers: HashSet<Driver>,
        all_passengers: HashSet<Passenger>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            all_drivers,
            all_passengers,
            trips,
        }
    }

    /// Start building a park incrementally.
    pub fn builder() -> TaxiParkBuilder {
        TaxiParkBuilder::default()
    }

    /// Number of trips in the park.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Trips that `passenger` rode on, in order.
    pub fn trips_of<'a>(&'a self, passenger: &'a Passenger) -> impl Iterator<Item = &'a Trip> + 'a {
        self.trips.iter().filter(move |t| t.has_passenger(passenger))
    }
}

/// Incremental constructor for [`TaxiPark`], used by fixtures and loaders.
#[derive(Debug, Clone, Default)]
pub struct TaxiParkBuilder {
    park: TaxiPark,
}

impl TaxiParkBuilder {
    /// Register a driver, with or without trips.
    pub fn driver(mut self, driver: impl Into<Driver>) -> Self {
        self.park.all_drivers.insert(driver.into());
        self
    }

    /// Register several drivers.
    pub fn drivers<I, D>(mut self, drivers: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Driver>,
    {
        self.park.all_drivers.extend(drivers.into_iter().map(Into::into));
        self
    }

    /// Register a passenger, with or without trips.
    pub fn passenger(mut self, passenger: impl Into<Passenger>) -> Self {
        self.park.all_passengers.insert(passenger.into());
        self
    }

    /// Register several passengers.
    pub fn passengers<I, P>(mut self, passengers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Passenger>,
    {
        self.park
            .all_passengers
            .extend(passengers.into_iter().map(Into::into));
        self
    }

    /// Append a trip. The trip's driver and passengers are not registered automatically.
    pub fn trip(mut self, trip: Trip) -> Self {
        self.park.trips.push(trip);
        self
    }

    /// Append a trip and register its driver and passengers in the universes.
    pub fn trip_registering(mut self, trip: Trip) -> Self {
        self.park.all_drivers.insert(trip.driver.clone());
        self.park
            .all_passengers
            .extend(trip.passengers.iter().cloned());
        self.park.trips.push(trip);
        self
    }

    /// Finish building.
    pub fn build(self) -> TaxiPark {
        self.park
    }
}
