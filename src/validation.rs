//! Opt-in checks of the [`TaxiPark`] invariants.
//!
//! Queries never call these; they assume well-formed input and stay permissive otherwise.
//! Ingestion runs them when [`crate::ingestion::IngestionOptions::validate`] is set.

use crate::error::{TaxiParkError, TaxiParkResult};
use crate::types::TaxiPark;

impl TaxiPark {
    /// See [`validate_taxi_park`].
    pub fn validate(&self) -> TaxiParkResult<()> {
        validate_taxi_park(self)
    }
}

/// Check that every trip is consistent with the park.
///
/// Reports the first violation found:
///
/// - a trip has no passengers
/// - a cost is negative or not finite
/// - a discount is outside `0.0..=1.0` or not finite
/// - a trip references a driver or passenger missing from the universes
pub fn validate_taxi_park(park: &TaxiPark) -> TaxiParkResult<()> {
    for (idx, trip) in park.trips.iter().enumerate() {
        if trip.passengers.is_empty() {
            return Err(invalid(idx, "has no passengers".to_string()));
        }
        if !trip.cost.is_finite() || trip.cost < 0.0 {
            return Err(invalid(idx, format!("has invalid cost {}", trip.cost)));
        }
        if let Some(discount) = trip.discount {
            if !(0.0..=1.0).contains(&discount) {
                return Err(invalid(idx, format!("has invalid discount {discount}")));
            }
        }
        if !park.all_drivers.contains(&trip.driver) {
            return Err(invalid(idx, format!("references unknown driver '{}'", trip.driver)));
        }
        // Sorted so the reported passenger does not depend on hash order.
        let mut unknown: Vec<_> = trip
            .passengers
            .iter()
            .filter(|&p| !park.all_passengers.contains(p))
            .collect();
        unknown.sort();
        if let Some(p) = unknown.first() {
            return Err(invalid(idx, format!("references unknown passenger '{p}'")));
        }
    }
    Ok(())
}

fn invalid(trip_idx: usize, what: String) -> TaxiParkError {
    TaxiParkError::Validation {
        message: format!("trip {trip_idx} {what}"),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_taxi_park;
    use crate::types::{Driver, Passenger, TaxiPark, Trip};

    fn base() -> crate::types::TaxiParkBuilder {
        TaxiPark::builder().driver("D-0").passenger("P-0")
    }

    fn trip(cost: f64) -> Trip {
        Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 10, cost)
    }

    #[test]
    fn well_formed_park_is_valid() {
        let park = base().trip(trip(10.0).with_discount(0.25)).build();
        assert!(park.validate().is_ok());
        assert!(TaxiPark::default().validate().is_ok());
    }

    #[test]
    fn rejects_trip_without_passengers() {
        let park = base()
            .trip(Trip::new(Driver::new("D-0"), Vec::<Passenger>::new(), 1, 1.0))
            .build();
        let msg = validate_taxi_park(&park).unwrap_err().to_string();
        assert_eq!(msg, "invalid taxi park: trip 0 has no passengers");
    }

    #[test]
    fn rejects_negative_or_nan_cost() {
        let park = base().trip(trip(1.0)).trip(trip(-1.0)).build();
        let msg = validate_taxi_park(&park).unwrap_err().to_string();
        assert!(msg.contains("trip 1 has invalid cost -1"));

        let park = base().trip(trip(f64::NAN)).build();
        assert!(validate_taxi_park(&park).is_err());
    }

    #[test]
    fn rejects_out_of_range_discount() {
        let park = base().trip(trip(1.0).with_discount(1.5)).build();
        let msg = validate_taxi_park(&park).unwrap_err().to_string();
        assert!(msg.contains("invalid discount 1.5"));
    }

    #[test]
    fn rejects_unknown_identities() {
        let park = base()
            .trip(Trip::new(Driver::new("D-9"), [Passenger::new("P-0")], 1, 1.0))
            .build();
        let msg = validate_taxi_park(&park).unwrap_err().to_string();
        assert!(msg.contains("unknown driver 'D-9'"));

        let park = base()
            .trip(Trip::new(
                Driver::new("D-0"),
                [Passenger::new("P-0"), Passenger::new("P-8"), Passenger::new("P-7")],
                1,
                1.0,
            ))
            .build();
        let msg = validate_taxi_park(&park).unwrap_err().to_string();
        assert!(msg.contains("unknown passenger 'P-7'"));
    }
}
