use crate::models::NutrientEntry;

/// One row of a coverage report: a table entry and whether the current
/// selection covers it. Derived on demand, never stored.
#[derive(Debug, Clone, Copy)]
pub struct CoverageRow<'a> {
    pub entry: &'a NutrientEntry,
    pub is_covered: bool,
}
