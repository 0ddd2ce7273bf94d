//! CSV ingestion implementation.
//!
//! One record per trip:
//!
//! ```text
//! driver,passengers,duration,cost,discount
//! D-0,P-0;P-1,12,25.5,
//! D-1,P-2,4,8.0,0.1
//! ```
//!
//! Passengers are separated by `;`. An empty `discount` means the trip was not discounted.

use std::collections::HashSet;

use crate::error::{TaxiParkError, TaxiParkResult};
use crate::types::{Driver, Passenger, TaxiPark, Trip};

const COLUMNS: [&str; 5] = ["driver", "passengers", "duration", "cost", "discount"];
const PASSENGER_SEPARATOR: char = ';';

/// Build a [`TaxiPark`] from a CSV reader of trips.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain every trip column (order can differ).
/// - The driver and passenger universes are the identities referenced by trips plus
///   `extra_drivers` / `extra_passengers`.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    extra_drivers: &[Driver],
    extra_passengers: &[Passenger],
) -> TaxiParkResult<TaxiPark> {
    let headers = rdr.headers()?.clone();

    // Map trip columns -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = [0usize; COLUMNS.len()];
    for (slot, name) in col_idxs.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| TaxiParkError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })?;
    }
    let [driver_idx, passengers_idx, duration_idx, cost_idx, discount_idx] = col_idxs;

    let mut builder = TaxiPark::builder()
        .drivers(extra_drivers.iter().cloned())
        .passengers(extra_passengers.iter().cloned());

    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let driver = parse_identity(user_row, "driver", field(driver_idx))?;
        let passengers: HashSet<Passenger> = field(passengers_idx)
            .split(PASSENGER_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Passenger::new)
            .collect();
        let duration = parse_number::<u32>(user_row, "duration", field(duration_idx))?;
        let cost = parse_number::<f64>(user_row, "cost", field(cost_idx))?;
        let discount = match field(discount_idx) {
            "" => None,
            raw => Some(parse_number::<f64>(user_row, "discount", raw)?),
        };

        let mut trip = Trip::new(Driver::new(driver), passengers, duration, cost);
        trip.discount = discount;
        builder = builder.trip_registering(trip);
    }

    Ok(builder.build())
}

fn parse_identity<'a>(row: usize, column: &str, raw: &'a str) -> TaxiParkResult<&'a str> {
    if raw.is_empty() {
        return Err(TaxiParkError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: "expected non-empty identity".to_string(),
        });
    }
    Ok(raw)
}

fn parse_number<T>(row: usize, column: &str, raw: &str) -> TaxiParkResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| TaxiParkError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}
