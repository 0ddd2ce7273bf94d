//! Reporting of ingestion outcomes.
//!
//! [`super::ingest_from_str`] tells an optional [`IngestionObserver`] whether a park was loaded or
//! rejected. [`TracingObserver`] forwards those outcomes to `tracing`.

use crate::error::TaxiParkError;
use crate::types::TaxiPark;

use super::unified::IngestionFormat;

/// How serious a rejected load is.
///
/// Ordered so that [`super::IngestionOptions::alert_at_or_above`] can act as a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// The input was malformed or the park broke one of its invariants.
    Error,
    /// The underlying reader failed.
    Critical,
}

/// What was being loaded.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// Format the input was parsed as.
    pub format: IngestionFormat,
    /// Input size in bytes.
    pub input_len: usize,
}

/// Size of a successfully loaded park.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Registered drivers, including those without trips.
    pub drivers: usize,
    /// Registered passengers, including those without trips.
    pub passengers: usize,
    /// Loaded trips.
    pub trips: usize,
}

impl IngestionStats {
    /// Count the universes and trips of `park`.
    pub fn of(park: &TaxiPark) -> Self {
        Self {
            drivers: park.all_drivers.len(),
            passengers: park.all_passengers.len(),
            trips: park.trips.len(),
        }
    }
}

/// Receives the outcome of every [`super::ingest_from_str`] call it is attached to.
pub trait IngestionObserver: Send + Sync {
    /// A park was parsed (and validated, if enabled).
    fn on_loaded(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// The input was rejected.
    fn on_rejected(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &TaxiParkError) {}

    /// A rejection reached the configured alert threshold. Called after [`Self::on_rejected`].
    ///
    /// Defaults to nothing, so observers only opt into alerting explicitly.
    fn on_alert(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &TaxiParkError) {}
}

/// Logs ingestion outcomes through `tracing`.
///
/// Loaded parks are logged at `info`, rejections at `warn`, alerts at `error`. Install a
/// subscriber (e.g. `tracing-subscriber`) to see them.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_loaded(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::info!(
            format = ?ctx.format,
            input_len = ctx.input_len,
            drivers = stats.drivers,
            passengers = stats.passengers,
            trips = stats.trips,
            "taxi park loaded"
        );
    }

    fn on_rejected(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TaxiParkError) {
        tracing::warn!(
            format = ?ctx.format,
            input_len = ctx.input_len,
            ?severity,
            %error,
            "taxi park rejected"
        );
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &TaxiParkError) {
        tracing::error!(
            format = ?ctx.format,
            input_len = ctx.input_len,
            ?severity,
            %error,
            "taxi park ingestion alert"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{IngestionSeverity, IngestionStats};
    use crate::types::{Driver, Passenger, TaxiPark, Trip};

    #[test]
    fn stats_count_idle_identities() {
        let park = TaxiPark::builder()
            .drivers(["D-0", "D-1"])
            .passengers(["P-0", "P-1", "P-2"])
            .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 5, 1.0))
            .build();
        assert_eq!(
            IngestionStats::of(&park),
            IngestionStats {
                drivers: 2,
                passengers: 3,
                trips: 1,
            }
        );
    }

    #[test]
    fn critical_outranks_error() {
        assert!(IngestionSeverity::Critical > IngestionSeverity::Error);
    }
}
