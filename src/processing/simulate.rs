use crate::data::series::GasType;
use crate::state::store::SeriesSet;

/// Apply a "what-if" edit: override one gas value at one year.
///
/// Returns a new set; the input is never mutated, so the caller keeps the
/// fetched data untouched and can diff the two renders. Editing a component
/// gas re-derives the total at that year as the sum of the updated
/// components, absent components contributing zero; the total is never read
/// from a cache. Edits are memory-only previews and are never persisted.
pub fn apply_edit(set: &SeriesSet, gas: GasType, year: i32, value: f64) -> SeriesSet {
    let mut edited = set.clone();
    edited.series_mut(gas).set(year, value);

    if gas != GasType::Total {
        let component_sum: f64 = GasType::COMPONENTS
            .iter()
            .filter_map(|g| edited.series(*g).value_at(year))
            .sum();
        edited.series_mut(GasType::Total).set(year, component_sum);
    }
    edited
}
