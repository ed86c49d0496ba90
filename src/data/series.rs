use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed set of gas types delivered by the statistics API.
///
/// The "other gases" residual (total minus the three components) is derived
/// on demand and never stored; see [`crate::processing::decompose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasType {
    Total,
    Co2,
    Ch4,
    N2o,
}

impl GasType {
    /// The component gases that sum into `Total`.
    pub const COMPONENTS: [GasType; 3] = [GasType::Co2, GasType::Ch4, GasType::N2o];

    /// Every stored gas type, `Total` first.
    pub const ALL: [GasType; 4] = [GasType::Total, GasType::Co2, GasType::Ch4, GasType::N2o];

    /// Key used by the statistics API payload.
    pub fn key(&self) -> &'static str {
        match self {
            GasType::Total => "total",
            GasType::Co2 => "co2",
            GasType::Ch4 => "ch4",
            GasType::N2o => "n2o",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GasType::Total => "Total GHG",
            GasType::Co2 => "CO2",
            GasType::Ch4 => "CH4",
            GasType::N2o => "N2O",
        }
    }
}

/// A year-indexed set of observations for one gas type and one area.
///
/// An absent year means "no data", which is distinct from a zero value.
/// Each year maps to at most one value and iteration is always in ascending
/// year order. Only finite values are ever stored; the parsing boundary in
/// [`crate::data::payload`] rejects everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasSeries(BTreeMap<i32, f64>);

impl GasSeries {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Snapshot value at a single year, `None` when the year is absent.
    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.0.get(&year).copied()
    }

    /// Insert or overwrite the observation for one year.
    /// Non-finite values are ignored; the series never stores them.
    pub fn set(&mut self, year: i32, value: f64) {
        if value.is_finite() {
            self.0.insert(year, value);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending `(year, value)` iteration over the whole series.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.0.iter().map(|(&y, &v)| (y, v))
    }

    /// Ascending `(year, value)` pairs restricted to `[start, end]` inclusive.
    pub fn range(&self, start: i32, end: i32) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.0.range(start..=end).map(|(&y, &v)| (y, v))
    }

    /// Values in ascending year order.
    pub fn values(&self) -> Vec<f64> {
        self.0.values().copied().collect()
    }
}

impl FromIterator<(i32, f64)> for GasSeries {
    fn from_iter<T: IntoIterator<Item = (i32, f64)>>(iter: T) -> Self {
        let mut series = GasSeries::new();
        for (year, value) in iter {
            series.set(year, value);
        }
        series
    }
}
