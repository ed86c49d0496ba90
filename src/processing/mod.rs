pub mod decompose;
pub mod growth;
pub mod simulate;
pub mod statistics;

/// Round to two decimal places, the charting convention for percentages.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
