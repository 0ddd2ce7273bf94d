//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_str`] (from [`unified`]) which:
//!
//! - builds an in-memory [`crate::types::TaxiPark`] from JSON or CSV text
//! - validates it unless told otherwise (see [`IngestionOptions`])
//! - optionally reports loads, rejections and alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, TracingObserver,
};
pub use unified::{ingest_from_str, IngestionFormat, IngestionOptions};
