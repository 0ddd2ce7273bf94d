//! `taxipark-analytics` answers small questions about an in-memory taxi park: which drivers never
//! drove, which passengers ride often or mostly on discount, which trip length is the most common,
//! and whether income follows the 80/20 rule. It also ships a tiny string classifier,
//! [`nice_string::is_nice`].
//!
//! The primary entrypoints are the query functions in [`processing`], which operate on a
//! read-only [`types::TaxiPark`]. Parks are built with [`types::TaxiPark::builder`] or loaded from
//! JSON/CSV text with [`ingestion::ingest_from_str`].
//!
//! ## Modules
//!
//! - [`types`]: drivers, passengers, trips and the park aggregate
//! - [`processing`]: the taxi park queries
//! - [`nice_string`]: the niceness classifier
//! - [`ingestion`]: JSON/CSV loading with an observer hook
//! - [`validation`]: invariant checks for loaded parks
//! - [`error`]: error type used by ingestion and validation
//!
//! ## Example
//!
//! ```rust
//! use taxipark_analytics::processing::{
//!     check_pareto_principle, find_fake_drivers, find_faithful_passengers, find_smart_passengers,
//! };
//! use taxipark_analytics::types::{Driver, Passenger, TaxiPark, Trip};
//!
//! let park = TaxiPark::builder()
//!     .drivers(["D-0", "D-1", "D-2", "D-3", "D-4"])
//!     .passengers(["P-0", "P-1"])
//!     .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 12, 90.0).with_discount(0.1))
//!     .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0"), Passenger::new("P-1")], 8, 5.0))
//!     .trip(Trip::new(Driver::new("D-1"), [Passenger::new("P-0")], 30, 5.0).with_discount(0.2))
//!     .build();
//!
//! assert_eq!(find_fake_drivers(&park).len(), 3);
//! assert_eq!(find_faithful_passengers(&park, 2).len(), 1);
//! assert!(find_smart_passengers(&park).contains(&Passenger::new("P-0")));
//! // One driver (20% of five) earns 95 of 100.
//! assert!(check_pareto_principle(&park));
//! ```

pub mod error;
pub mod ingestion;
pub mod nice_string;
pub mod processing;
pub mod types;
pub mod validation;

pub use error::{TaxiParkError, TaxiParkResult};
