/// State transitions for the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddFood(String),
    RemoveFood(String),
    ClearAllRequested,
    ClearAllConfirmed,
    ClearAllCancelled,
    SetSearch(String),
}

/// The whole mutable state of a session: the selected foods, the search
/// text, and whether a clear-all is awaiting confirmation.
///
/// Coverage and suggestions are derived from this on every change, never
/// cached here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Selected foods in insertion order. Duplicates are prevented by
    /// exact string equality; normalization plays no part here.
    pub foods: Vec<String>,
    pub search: String,
    pub confirm_clear: bool,
}

impl AppState {
    /// Apply one action. Transitions are deterministic and independent
    /// of rendering.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AddFood(food) => {
                if !self.foods.contains(&food) {
                    self.foods.push(food);
                }
                // Adding always resets the search box.
                self.search.clear();
            }
            Action::RemoveFood(food) => {
                self.foods.retain(|f| *f != food);
            }
            Action::ClearAllRequested => {
                self.confirm_clear = true;
            }
            Action::ClearAllConfirmed => {
                self.foods.clear();
                self.confirm_clear = false;
            }
            Action::ClearAllCancelled => {
                self.confirm_clear = false;
            }
            Action::SetSearch(text) => {
                self.search = text;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_food_is_idempotent() {
        let mut state = AppState::default();
        state.apply(Action::AddFood("Eggs".to_string()));
        state.apply(Action::AddFood("Eggs".to_string()));
        assert_eq!(state.foods, vec!["Eggs"]);
    }

    #[test]
    fn test_add_dedup_is_case_sensitive() {
        // Duplicate prevention is exact-match; "eggs" and "Eggs" coexist.
        let mut state = AppState::default();
        state.apply(Action::AddFood("Eggs".to_string()));
        state.apply(Action::AddFood("eggs".to_string()));
        assert_eq!(state.foods.len(), 2);
    }

    #[test]
    fn test_add_clears_search() {
        let mut state = AppState::default();
        state.apply(Action::SetSearch("eg".to_string()));
        state.apply(Action::AddFood("Eggs".to_string()));
        assert!(state.search.is_empty());
    }

    #[test]
    fn test_remove_food() {
        let mut state = AppState::default();
        state.apply(Action::AddFood("Eggs".to_string()));
        state.apply(Action::AddFood("Milk".to_string()));
        state.apply(Action::RemoveFood("Eggs".to_string()));
        assert_eq!(state.foods, vec!["Milk"]);

        // Removing something absent is a no-op.
        state.apply(Action::RemoveFood("Kale".to_string()));
        assert_eq!(state.foods, vec!["Milk"]);
    }

    #[test]
    fn test_clear_all_two_step_confirm() {
        let mut state = AppState::default();
        state.apply(Action::AddFood("Eggs".to_string()));

        state.apply(Action::ClearAllRequested);
        assert!(state.confirm_clear);
        assert_eq!(state.foods.len(), 1);

        state.apply(Action::ClearAllConfirmed);
        assert!(!state.confirm_clear);
        assert!(state.foods.is_empty());
    }

    #[test]
    fn test_clear_all_two_step_cancel() {
        let mut state = AppState::default();
        state.apply(Action::AddFood("Eggs".to_string()));

        state.apply(Action::ClearAllRequested);
        state.apply(Action::ClearAllCancelled);
        assert!(!state.confirm_clear);
        assert_eq!(state.foods, vec!["Eggs"]);
    }

    #[test]
    fn test_set_search() {
        let mut state = AppState::default();
        state.apply(Action::SetSearch("kiw".to_string()));
        assert_eq!(state.search, "kiw");
    }
}
