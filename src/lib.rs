//! bases-charts: turns typed, queryable records into chart-ready series.
//!
//! The crate is split into a pure transformation core (value parsing, point
//! projection, partitioning, stacking, Y domains, colors) and a thin
//! host-facing API that runs one refresh at a time.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartData, ChartView, ChartViewConfig, process_data};
pub use error::{ChartError, ChartResult};
