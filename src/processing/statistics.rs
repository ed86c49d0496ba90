use serde::Serialize;

use crate::data::series::GasSeries;

/// Descriptive statistics for one gas series (or any raw value collection).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Entries excluded from the computation as non-finite.
    pub missing_count: usize,
}

impl DescriptiveStats {
    /// Compute statistics from raw values, filtering out non-finite entries.
    ///
    /// Returns `None` when no finite value remains, so callers render
    /// "no data" instead of a zero-filled card. Variance is population
    /// variance (divide by N), matching the dataset's published figures;
    /// the median averages the two middle elements on even counts.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut vals: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let missing_count = values.len() - vals.len();
        if vals.is_empty() {
            return None;
        }

        let count = vals.len();
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = vals.iter().sum::<f64>() / count as f64;

        vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = if count % 2 == 0 {
            (vals[count / 2 - 1] + vals[count / 2]) / 2.0
        } else {
            vals[count / 2]
        };

        let variance = vals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Some(DescriptiveStats {
            count,
            mean,
            median,
            min,
            max,
            range: max - min,
            variance,
            std_dev: variance.sqrt(),
            missing_count,
        })
    }

    /// Statistics over every stored observation of a series.
    pub fn of_series(series: &GasSeries) -> Option<Self> {
        Self::compute(&series.values())
    }
}
