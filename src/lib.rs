pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{NutriError, Result};
pub use models::{CoverageRow, NutrientEntry, TableSet};
