use nutri_check_rs::state::{Action, AppState};

fn add(state: &mut AppState, food: &str) {
    state.apply(Action::AddFood(food.to_string()));
}

#[test]
fn test_session_add_remove_flow() {
    let mut state = AppState::default();

    add(&mut state, "Eggs");
    add(&mut state, "Milk");
    add(&mut state, "Spinach");
    assert_eq!(state.foods, vec!["Eggs", "Milk", "Spinach"]);

    state.apply(Action::RemoveFood("Milk".to_string()));
    assert_eq!(state.foods, vec!["Eggs", "Spinach"]);
}

#[test]
fn test_duplicate_add_keeps_selection_length() {
    let mut state = AppState::default();

    add(&mut state, "Eggs");
    add(&mut state, "Eggs");
    assert_eq!(state.foods.len(), 1);
}

#[test]
fn test_clear_all_requires_confirmation() {
    let mut state = AppState::default();
    add(&mut state, "Eggs");
    add(&mut state, "Milk");

    // Cancelled: nothing is lost.
    state.apply(Action::ClearAllRequested);
    state.apply(Action::ClearAllCancelled);
    assert_eq!(state.foods.len(), 2);
    assert!(!state.confirm_clear);

    // Confirmed: everything goes.
    state.apply(Action::ClearAllRequested);
    assert!(state.confirm_clear);
    state.apply(Action::ClearAllConfirmed);
    assert!(state.foods.is_empty());
    assert!(!state.confirm_clear);
}

#[test]
fn test_search_lifecycle() {
    let mut state = AppState::default();

    state.apply(Action::SetSearch("egg".to_string()));
    assert_eq!(state.search, "egg");

    add(&mut state, "Eggs");
    assert!(state.search.is_empty(), "adding a food resets the search");
}

#[test]
fn test_actions_are_order_sensitive_but_deterministic() {
    let mut a = AppState::default();
    let mut b = AppState::default();

    let script = [
        Action::AddFood("Eggs".to_string()),
        Action::SetSearch("mi".to_string()),
        Action::AddFood("Milk".to_string()),
        Action::RemoveFood("Eggs".to_string()),
    ];

    for action in &script {
        a.apply(action.clone());
        b.apply(action.clone());
    }

    assert_eq!(a, b);
    assert_eq!(a.foods, vec!["Milk"]);
}
