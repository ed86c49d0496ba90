use serde::Serialize;

use crate::data::series::GasType;
use crate::processing::round2;
use crate::state::store::SeriesSet;

/// The "other gases" residual: total minus the three named components.
///
/// Missing operands count as zero and the result is clamped at zero. The
/// clamp exists because the residual feeds stacked percentage charts where a
/// negative band is meaningless; callers that need the signed residual for
/// diagnostics recompute it from the raw components.
pub fn other_residual(
    total: Option<f64>,
    co2: Option<f64>,
    ch4: Option<f64>,
    n2o: Option<f64>,
) -> f64 {
    let t = total.unwrap_or(0.0);
    let components = co2.unwrap_or(0.0) + ch4.unwrap_or(0.0) + n2o.unwrap_or(0.0);
    (t - components).max(0.0)
}

/// Percentage-of-total shares for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearShares {
    pub year: i32,
    pub co2: f64,
    pub ch4: f64,
    pub n2o: f64,
    pub other: f64,
}

/// Per-year decomposition of the total into component shares, one entry per
/// calendar year in `[start_year, end_year]` inclusive.
///
/// Charting convention: a stacked bar must exist for every year on the axis,
/// so absent values read as zero here and every share is zero when the total
/// is not positive. Shares are rounded to two decimals.
pub fn decompose(set: &SeriesSet, start_year: i32, end_year: i32) -> Vec<YearShares> {
    (start_year..=end_year)
        .map(|year| {
            let total = set.series(GasType::Total).value_at(year);
            let co2 = set.series(GasType::Co2).value_at(year);
            let ch4 = set.series(GasType::Ch4).value_at(year);
            let n2o = set.series(GasType::N2o).value_at(year);
            let other = other_residual(total, co2, ch4, n2o);

            let t = total.unwrap_or(0.0);
            let pct = |v: f64| if t > 0.0 { round2(100.0 * v / t) } else { 0.0 };
            YearShares {
                year,
                co2: pct(co2.unwrap_or(0.0)),
                ch4: pct(ch4.unwrap_or(0.0)),
                n2o: pct(n2o.unwrap_or(0.0)),
                other: pct(other),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(total: &[(i32, f64)], co2: &[(i32, f64)], ch4: &[(i32, f64)], n2o: &[(i32, f64)]) -> SeriesSet {
        SeriesSet {
            total: total.iter().copied().collect(),
            co2: co2.iter().copied().collect(),
            ch4: ch4.iter().copied().collect(),
            n2o: n2o.iter().copied().collect(),
        }
    }

    #[test]
    fn residual_is_total_minus_components() {
        assert_eq!(other_residual(Some(100.0), Some(40.0), Some(30.0), Some(20.0)), 10.0);
    }

    #[test]
    fn residual_clamps_at_zero() {
        assert_eq!(other_residual(Some(100.0), Some(60.0), Some(60.0), Some(60.0)), 0.0);
    }

    #[test]
    fn residual_treats_missing_operands_as_zero() {
        assert_eq!(other_residual(Some(50.0), None, Some(10.0), None), 40.0);
        assert_eq!(other_residual(None, Some(10.0), None, None), 0.0);
    }

    #[test]
    fn shares_split_the_total() {
        let s = set(
            &[(2020, 100.0)],
            &[(2020, 40.0)],
            &[(2020, 30.0)],
            &[(2020, 20.0)],
        );
        let shares = decompose(&s, 2020, 2020);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].year, 2020);
        assert_eq!(shares[0].co2, 40.0);
        assert_eq!(shares[0].ch4, 30.0);
        assert_eq!(shares[0].n2o, 20.0);
        assert_eq!(shares[0].other, 10.0);
    }

    #[test]
    fn every_year_in_range_gets_an_entry() {
        let s = set(&[(2020, 100.0)], &[(2020, 100.0)], &[], &[]);
        let shares = decompose(&s, 2019, 2021);
        let years: Vec<i32> = shares.iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
        // Years with no total at all are all-zero bars.
        assert_eq!(shares[0].co2, 0.0);
        assert_eq!(shares[2].other, 0.0);
    }

    #[test]
    fn shares_round_to_two_decimals() {
        let s = set(&[(2020, 3.0)], &[(2020, 1.0)], &[(2020, 1.0)], &[(2020, 1.0)]);
        let shares = decompose(&s, 2020, 2020);
        assert_eq!(shares[0].co2, 33.33);
        assert_eq!(shares[0].other, 0.0);
    }
}
