use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::data::series::{GasSeries, GasType};
use crate::state::store::SeriesSet;

/// Years accepted from the external API. The source dataset starts in 1960;
/// anything outside this window is a data-entry artifact.
const MIN_YEAR: i32 = 1960;
const MAX_YEAR: i32 = 2100;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed statistics payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// A value that may arrive as a JSON number or as a numeric string, both of
/// which the upstream API emits depending on endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    fn as_finite_f64(&self) -> Option<f64> {
        let v = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

/// One gas entry as delivered by the API: a map of year (as a string) to a
/// single-element value array. Precomputed statistical fields in the payload
/// are ignored; the engine recomputes them from the raw values.
#[derive(Debug, Default, Deserialize)]
struct GasPayload {
    #[serde(default)]
    raw_values: BTreeMap<String, Vec<RawValue>>,
}

#[derive(Debug, Default, Deserialize)]
struct StatisticsPayload {
    total: Option<GasPayload>,
    co2: Option<GasPayload>,
    ch4: Option<GasPayload>,
    n2o: Option<GasPayload>,
}

/// Parse a statistics API response into validated series.
///
/// Missing gas keys, missing years and empty value arrays are tolerated.
/// Entries with unparseable years or non-numeric values are dropped with a
/// warning, never coerced to zero, so downstream "no data" rendering stays
/// distinct from a real zero. Only a syntactically malformed document is an
/// error; a single bad data point never fails the whole payload.
pub fn parse_statistics_payload(json: &str) -> Result<SeriesSet, PayloadError> {
    let payload: StatisticsPayload = serde_json::from_str(json)?;
    let mut set = SeriesSet::default();
    let entries = [
        (GasType::Total, payload.total),
        (GasType::Co2, payload.co2),
        (GasType::Ch4, payload.ch4),
        (GasType::N2o, payload.n2o),
    ];
    for (gas, entry) in entries {
        if let Some(entry) = entry {
            *set.series_mut(gas) = series_from_raw(gas, &entry.raw_values);
        }
    }
    Ok(set)
}

fn series_from_raw(gas: GasType, raw: &BTreeMap<String, Vec<RawValue>>) -> GasSeries {
    let mut series = GasSeries::new();
    for (year_str, values) in raw {
        let year = match parse_year(year_str) {
            Some(y) => y,
            None => {
                warn!(gas = gas.key(), year = %year_str, "dropping entry with invalid year");
                continue;
            }
        };
        // By API convention each year carries a single-element array; an
        // empty array means the observation is missing.
        let Some(first) = values.first() else { continue };
        match first.as_finite_f64() {
            Some(v) => series.set(year, v),
            None => warn!(gas = gas.key(), year, "dropping non-numeric value"),
        }
    }
    series
}

fn parse_year(s: &str) -> Option<i32> {
    let y = s.trim().parse::<i32>().ok()?;
    (MIN_YEAR..=MAX_YEAR).contains(&y).then_some(y)
}
