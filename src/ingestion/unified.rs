//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_str`], which builds a [`crate::types::TaxiPark`] from
//! in-memory text in the format named by [`IngestionOptions::format`].
//!
//! - If [`IngestionOptions::validate`] is set (the default), the park is checked with
//!   [`crate::validation::validate_taxi_park`] before it is returned.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::sync::Arc;

use crate::error::{TaxiParkError, TaxiParkResult};
use crate::types::{Driver, Passenger, TaxiPark};

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, json};

/// Supported ingestion formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestionFormat {
    /// A single JSON object holding the whole park.
    #[default]
    Json,
    /// One CSV record per trip.
    Csv,
}

/// Options controlling unified ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Input format.
    pub format: IngestionFormat,
    /// Run [`crate::validation::validate_taxi_park`] on the result.
    pub validate: bool,
    /// CSV only: drivers to register even though no trip references them.
    pub extra_drivers: Vec<Driver>,
    /// CSV only: passengers to register even though no trip references them.
    pub extra_passengers: Vec<Passenger>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("validate", &self.validate)
            .field("extra_drivers", &self.extra_drivers)
            .field("extra_passengers", &self.extra_passengers)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: IngestionFormat::default(),
            validate: true,
            extra_drivers: Vec::new(),
            extra_passengers: Vec::new(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Unified ingestion entry point for in-memory input.
///
/// When an observer is configured, this function reports:
///
/// - `on_loaded` on success, with driver/passenger/trip counts
/// - `on_rejected` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ## JSON (default format)
///
/// ```rust
/// use taxipark_analytics::ingestion::{ingest_from_str, IngestionOptions};
///
/// # fn main() -> Result<(), taxipark_analytics::TaxiParkError> {
/// let input = r#"{
///     "all_drivers": ["D-0"],
///     "all_passengers": ["P-0"],
///     "trips": [{"driver": "D-0", "passengers": ["P-0"], "duration": 12, "cost": 9.5}]
/// }"#;
/// let park = ingest_from_str(input, &IngestionOptions::default())?;
/// assert_eq!(park.trips.len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// ## CSV with drivers that have no trips
///
/// ```rust
/// use taxipark_analytics::ingestion::{ingest_from_str, IngestionFormat, IngestionOptions};
/// use taxipark_analytics::types::Driver;
///
/// # fn main() -> Result<(), taxipark_analytics::TaxiParkError> {
/// let opts = IngestionOptions {
///     format: IngestionFormat::Csv,
///     extra_drivers: vec![Driver::new("D-idle")],
///     ..Default::default()
/// };
/// let park = ingest_from_str("driver,passengers,duration,cost,discount\nD-0,P-0,5,3.0,\n", &opts)?;
/// assert_eq!(park.all_drivers.len(), 2);
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (tracing + alert threshold)
///
/// ```rust
/// use std::sync::Arc;
///
/// use taxipark_analytics::ingestion::{
///     ingest_from_str, IngestionOptions, IngestionSeverity, TracingObserver,
/// };
///
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     alert_at_or_above: IngestionSeverity::Error,
///     ..Default::default()
/// };
///
/// // Invalid JSON is an Error-severity failure and triggers `on_alert` at this threshold.
/// let _err = ingest_from_str("{not json", &opts).unwrap_err();
/// ```
pub fn ingest_from_str(input: &str, options: &IngestionOptions) -> TaxiParkResult<TaxiPark> {
    let ctx = IngestionContext {
        format: options.format,
        input_len: input.len(),
    };

    let result = ingest_dispatch(input, options).and_then(|park| {
        if options.validate {
            park.validate()?;
        }
        Ok(park)
    });

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(park) => obs.on_loaded(&ctx, IngestionStats::of(park)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_rejected(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn ingest_dispatch(input: &str, options: &IngestionOptions) -> TaxiParkResult<TaxiPark> {
    match options.format {
        IngestionFormat::Json => json::ingest_json_from_str(input),
        IngestionFormat::Csv => {
            let mut rdr = ::csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(input.as_bytes());
            csv::ingest_csv_from_reader(&mut rdr, &options.extra_drivers, &options.extra_passengers)
        }
    }
}

fn severity_for_error(e: &TaxiParkError) -> IngestionSeverity {
    match e {
        TaxiParkError::Io(_) => IngestionSeverity::Critical,
        TaxiParkError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        TaxiParkError::Json(err) if err.is_io() => IngestionSeverity::Critical,
        TaxiParkError::Json(_) => IngestionSeverity::Error,
        TaxiParkError::SchemaMismatch { .. } => IngestionSeverity::Error,
        TaxiParkError::ParseError { .. } => IngestionSeverity::Error,
        TaxiParkError::Validation { .. } => IngestionSeverity::Error,
    }
}
