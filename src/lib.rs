//! Statistics engine for a greenhouse-gas emissions dashboard.
//!
//! Pure, stateless computation over year-indexed emission series (CO2, CH4,
//! N2O and their total): descriptive statistics, period and year-over-year
//! growth, contribution-to-world ratios, the "other gases" residual,
//! percentage-of-total decomposition for stacked charts, and copy-on-write
//! "what-if" edits.
//!
//! The crate does no I/O. An external shell fetches the statistics API,
//! hands raw payloads to [`parse_statistics_payload`], and renders the value
//! objects produced here. Every operation is a pure function of its explicit
//! arguments, holds no state between calls, and is safe to call concurrently.
//! Degenerate input (missing years, zero denominators, non-finite values)
//! maps to documented sentinel outputs instead of errors; a bad data point
//! never aborts a rendering pass.

pub mod data;
pub mod processing;
pub mod state;

pub use data::payload::{parse_statistics_payload, PayloadError};
pub use data::series::{GasSeries, GasType};
pub use processing::decompose::{decompose, other_residual, YearShares};
pub use processing::growth::{contribution, growth_between, yoy_series, Trend, YoyPoint};
pub use processing::simulate::apply_edit;
pub use processing::statistics::DescriptiveStats;
pub use state::store::SeriesSet;
