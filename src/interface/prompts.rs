use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::engine::{normalize, suggest_foods};
use crate::error::Result;

/// Top-level menu choices for the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    RemoveAll,
    Inspect,
    Quit,
}

/// Prompt for the next action.
pub fn prompt_menu() -> Result<MenuChoice> {
    let options = [
        "Add a food",
        "Remove a food",
        "Remove all",
        "Inspect a nutrient",
        "Quit",
    ];

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => MenuChoice::Add,
        1 => MenuChoice::Remove,
        2 => MenuChoice::RemoveAll,
        3 => MenuChoice::Inspect,
        _ => MenuChoice::Quit,
    })
}

/// Prompt for a food search string. Empty input is allowed; an empty
/// query lists the whole vocabulary.
pub fn prompt_search() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search for a food")
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Resolve a search query to one vocabulary food, or None.
///
/// Substring suggestions come from the engine; when none match, fall
/// back to fuzzy matching so a typo like "spinch" still finds spinach.
pub fn pick_suggestion(query: &str, vocabulary: &[String]) -> Result<Option<String>> {
    let suggestions = suggest_foods(query, vocabulary);

    if suggestions.is_empty() {
        return pick_fuzzy(query, vocabulary);
    }

    if suggestions.len() == 1 {
        return Ok(Some(suggestions[0].to_string()));
    }

    let mut options: Vec<String> = suggestions.iter().map(|s| s.to_string()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which food?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < suggestions.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Fuzzy fallback for queries with no substring match.
fn pick_fuzzy(query: &str, vocabulary: &[String]) -> Result<Option<String>> {
    let needle = normalize(query);

    let mut candidates: Vec<(&String, f64)> = vocabulary
        .iter()
        .map(|food| (food, jaro_winkler(&normalize(food), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching foods for '{}'", query);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(food.clone()) } else { None });
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(food, _)| (*food).clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Did you mean one of these?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Prompt to remove one food from the selection.
pub fn prompt_remove(foods: &[String]) -> Result<Option<String>> {
    let mut options: Vec<String> = foods.to_vec();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which food?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < foods.len() {
        Ok(Some(foods[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Prompt to pick a nutrient entry by name; returns its index.
pub fn prompt_entry(names: &[String]) -> Result<Option<usize>> {
    let mut options: Vec<String> = names.to_vec();
    options.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Inspect which entry?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < names.len() {
        Ok(Some(selection))
    } else {
        Ok(None)
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
