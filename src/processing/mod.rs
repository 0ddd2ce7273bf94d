//! Queries over a [`crate::types::TaxiPark`].
//!
//! Every function here is pure: it reads the park and returns a fresh result, never mutating the
//! input. None of them can fail.
//!
//! Currently implemented:
//!
//! - [`find_fake_drivers()`]: drivers with no trips
//! - [`find_faithful_passengers()`]: passengers with at least N trips
//! - [`find_frequent_passengers()`]: passengers taken by a given driver more than once
//! - [`find_smart_passengers()`]: passengers discounted on the majority of their trips
//! - [`find_the_most_frequent_trip_duration_period()`]: busiest 10-minute duration bucket
//! - [`check_pareto_principle()`]: do 20% of the drivers earn 80% of the income
//!
//! ## Example
//!
//! ```rust
//! use taxipark_analytics::processing::{find_fake_drivers, find_the_most_frequent_trip_duration_period};
//! use taxipark_analytics::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let park = TaxiPark::builder()
//!     .drivers(["D-0", "D-1"])
//!     .passengers(["P-0", "P-1"])
//!     .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 5, 10.0))
//!     .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-1")], 7, 12.0).with_discount(0.1))
//!     .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 23, 30.0))
//!     .build();
//!
//! assert_eq!(
//!     find_fake_drivers(&park).into_iter().collect::<Vec<_>>(),
//!     vec![Driver::new("D-1")]
//! );
//! assert_eq!(find_the_most_frequent_trip_duration_period(&park), Some(0..=9));
//! ```

pub mod drivers;
pub mod duration;
pub mod pareto;
pub mod passengers;

pub use drivers::find_fake_drivers;
pub use duration::{duration_period_of, find_the_most_frequent_trip_duration_period};
pub use pareto::{check_pareto_principle, check_pareto_principle_with, driver_income, ParetoOptions};
pub use passengers::{find_faithful_passengers, find_frequent_passengers, find_smart_passengers};
