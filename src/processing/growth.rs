use serde::Serialize;

use crate::data::series::GasSeries;
use crate::processing::round2;

/// Percentage change between the values at two years.
///
/// `None` when either year is absent from the series or the start value is
/// exactly zero, so renderers show "-" rather than a fake 0%. A zero end
/// value is fine (a drop to zero is -100%). The result is unrounded;
/// rounding is a presentation concern.
pub fn growth_between(series: &GasSeries, start_year: i32, end_year: i32) -> Option<f64> {
    let start = series.value_at(start_year)?;
    let end = series.value_at(end_year)?;
    if start == 0.0 {
        return None;
    }
    Some((end - start) / start * 100.0)
}

/// One year-over-year growth observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YoyPoint {
    pub year: i32,
    pub percent: f64,
}

/// Year-over-year growth across consecutive observed years in
/// `[start_year, end_year]` inclusive, ascending.
///
/// Each pair of consecutive observations contributes an entry at its later
/// year only when both values are non-zero; pairs touching a zero are
/// skipped outright rather than zero-filled, so the output may be shorter
/// than the range. Percentages use `|prev|` as the base and are rounded to
/// two decimals for charting.
pub fn yoy_series(series: &GasSeries, start_year: i32, end_year: i32) -> Vec<YoyPoint> {
    let observed: Vec<(i32, f64)> = series.range(start_year, end_year).collect();
    let mut points = Vec::with_capacity(observed.len().saturating_sub(1));
    for pair in observed.windows(2) {
        let (_, prev) = pair[0];
        let (year, curr) = pair[1];
        if prev == 0.0 || curr == 0.0 {
            continue;
        }
        points.push(YoyPoint {
            year,
            percent: round2((curr - prev) / prev.abs() * 100.0),
        });
    }
    points
}

/// A region's share of an aggregate value, as a whole-number percentage.
///
/// Missing data and a non-positive aggregate both read as "no measurable
/// contribution" and yield 0. This deliberately differs from growth, where a
/// zero base makes the ratio undefined instead.
pub fn contribution(country: Option<f64>, world: Option<f64>) -> i64 {
    match (country, world) {
        (Some(c), Some(w)) if w > 0.0 => (c / w * 100.0).round() as i64,
        _ => 0,
    }
}

/// Direction of a growth figure, as shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn from_growth(growth: Option<f64>) -> Self {
        match growth {
            Some(g) if g > 0.0 => Trend::Up,
            Some(g) if g < 0.0 => Trend::Down,
            _ => Trend::Neutral,
        }
    }
}
