pub mod coverage;
pub mod normalize;

pub use coverage::{coverage, coverage_percent, nutrients_for_food, suggest_foods};
pub use normalize::{matches, normalize};
