use serde::{Deserialize, Serialize};

use crate::data::series::{GasSeries, GasType};

/// The per-area data store the caller hands to engine functions by reference.
///
/// One stored series per gas type. The engine never owns or caches a set
/// across calls; "what-if" edits produce a fresh set via
/// [`crate::processing::simulate::apply_edit`] and the caller decides which
/// one to render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub total: GasSeries,
    pub co2: GasSeries,
    pub ch4: GasSeries,
    pub n2o: GasSeries,
}

impl SeriesSet {
    pub fn series(&self, gas: GasType) -> &GasSeries {
        match gas {
            GasType::Total => &self.total,
            GasType::Co2 => &self.co2,
            GasType::Ch4 => &self.ch4,
            GasType::N2o => &self.n2o,
        }
    }

    pub fn series_mut(&mut self, gas: GasType) -> &mut GasSeries {
        match gas {
            GasType::Total => &mut self.total,
            GasType::Co2 => &mut self.co2,
            GasType::Ch4 => &mut self.ch4,
            GasType::N2o => &mut self.n2o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_accessors_map_each_gas() {
        let mut set = SeriesSet::default();
        for (i, gas) in GasType::ALL.into_iter().enumerate() {
            set.series_mut(gas).set(2020, i as f64);
        }
        assert_eq!(set.total.value_at(2020), Some(0.0));
        assert_eq!(set.co2.value_at(2020), Some(1.0));
        assert_eq!(set.ch4.value_at(2020), Some(2.0));
        assert_eq!(set.n2o.value_at(2020), Some(3.0));
    }
}
