use serde::{Deserialize, Serialize};

/// A nutrient or beneficial group and the foods known to supply it.
///
/// Entries are immutable after load; food strings keep their display
/// casing and are only normalized transiently during matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientEntry {
    pub name: String,
    pub foods: Vec<String>,
}

impl NutrientEntry {
    /// Basic validation: a non-blank name and at least one non-blank food.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.foods.is_empty()
            && self.foods.iter().all(|f| !f.trim().is_empty())
    }
}

/// The two static tables the checker operates on: essential nutrients
/// and beneficial groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSet {
    pub essential: Vec<NutrientEntry>,
    pub beneficial: Vec<NutrientEntry>,
}

impl TableSet {
    /// All entries, essential first, then beneficial, each in table order.
    pub fn all_entries(&self) -> impl Iterator<Item = &NutrientEntry> {
        self.essential.iter().chain(self.beneficial.iter())
    }

    /// The food vocabulary: every food named by any entry across both
    /// tables, exact-string deduplicated, first occurrence order kept.
    pub fn vocabulary(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut foods = Vec::new();
        for entry in self.all_entries() {
            for food in &entry.foods {
                if seen.insert(food.clone()) {
                    foods.push(food.clone());
                }
            }
        }
        foods
    }
}
