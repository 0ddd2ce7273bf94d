//! JSON ingestion implementation.
//!
//! Expected input is a single object:
//!
//! ```json
//! {
//!   "all_drivers": ["D-0", "D-1"],
//!   "all_passengers": ["P-0"],
//!   "trips": [
//!     {"driver": "D-0", "passengers": ["P-0"], "duration": 10, "cost": 20.0, "discount": 0.1}
//!   ]
//! }
//! ```
//!
//! `discount` may be omitted or `null`. Drivers and passengers listed only on trips are not added
//! to the universes.

use crate::error::{TaxiParkError, TaxiParkResult};
use crate::types::TaxiPark;

/// Ingest a [`TaxiPark`] from an in-memory JSON string.
pub fn ingest_json_from_str(input: &str) -> TaxiParkResult<TaxiPark> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TaxiParkError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)?;
    if !value.is_object() {
        return Err(TaxiParkError::SchemaMismatch {
            message: "json must be an object with all_drivers, all_passengers and trips".to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}
