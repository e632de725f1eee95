mod nutrient;
mod report;

pub use nutrient::{NutrientEntry, TableSet};
pub use report::CoverageRow;
