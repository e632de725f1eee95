use crate::engine::normalize::{matches, normalize};
use crate::models::{CoverageRow, NutrientEntry, TableSet};

/// Suggest vocabulary entries whose normalized form contains the
/// normalized query as a substring.
///
/// An empty query matches everything; callers decide whether an empty
/// search should show suggestions at all.
pub fn suggest_foods<'a>(query: &str, vocabulary: &'a [String]) -> Vec<&'a str> {
    let needle = normalize(query);
    vocabulary
        .iter()
        .filter(|food| normalize(food).contains(&needle))
        .map(String::as_str)
        .collect()
}

/// Names of all entries, across both tables, supplied by the given food.
pub fn nutrients_for_food<'a>(food: &str, tables: &'a TableSet) -> Vec<&'a str> {
    tables
        .all_entries()
        .filter(|entry| entry.foods.iter().any(|src| matches(src, food)))
        .map(|entry| entry.name.as_str())
        .collect()
}

fn is_covered(entry: &NutrientEntry, selection: &[String]) -> bool {
    selection
        .iter()
        .any(|food| entry.foods.iter().any(|src| matches(food, src)))
}

/// Compute one row per table entry, then stably partition: uncovered
/// entries first, covered entries after, each subgroup in table order.
pub fn coverage<'a>(table: &'a [NutrientEntry], selection: &[String]) -> Vec<CoverageRow<'a>> {
    let mut rows: Vec<CoverageRow<'a>> = table
        .iter()
        .map(|entry| CoverageRow {
            entry,
            is_covered: is_covered(entry, selection),
        })
        .collect();

    // sort_by_key is stable; false sorts before true.
    rows.sort_by_key(|row| row.is_covered);
    rows
}

/// Percentage of table entries covered by the selection, rounded to the
/// nearest integer. An empty table yields 0 rather than a NaN ratio.
pub fn coverage_percent(table: &[NutrientEntry], selection: &[String]) -> u32 {
    if table.is_empty() {
        return 0;
    }

    let covered = table
        .iter()
        .filter(|entry| is_covered(entry, selection))
        .count();

    ((covered as f64 / table.len() as f64) * 100.0).round() as u32
}
