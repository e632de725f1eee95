use std::path::Path;

use clap::Parser;

use nutri_check_rs::cli::{Cli, Command};
use nutri_check_rs::engine::{coverage, coverage_percent, nutrients_for_food};
use nutri_check_rs::error::Result;
use nutri_check_rs::interface::{
    display_coverage_panel, display_entry_detail, display_food_nutrients, display_selection,
    display_vocabulary, export_report_csv, pick_suggestion, prompt_entry, prompt_menu,
    prompt_remove, prompt_search, prompt_yes_no, MenuChoice,
};
use nutri_check_rs::models::TableSet;
use nutri_check_rs::state::{builtin_tables, load_tables, Action, AppState};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let tables = match &cli.tables {
        Some(path) => load_tables(path)?,
        None => builtin_tables()?,
    };

    match cli.command.unwrap_or_default() {
        Command::Check => cmd_check(&tables),
        Command::Report { foods, export } => cmd_report(&tables, &foods, export.as_deref()),
        Command::Lookup { food } => cmd_lookup(&tables, &food),
        Command::Foods => cmd_foods(&tables),
    }
}

/// Interactive session: add and remove foods, coverage recomputed and
/// redrawn after every change.
fn cmd_check(tables: &TableSet) -> Result<()> {
    let vocabulary = tables.vocabulary();
    let mut state = AppState::default();

    println!(
        "Loaded {} essential nutrients and {} beneficial groups ({} foods known)",
        tables.essential.len(),
        tables.beneficial.len(),
        vocabulary.len()
    );

    loop {
        println!();
        display_selection(&state.foods);
        display_coverage_panel(
            "Essential Nutrients",
            &coverage(&tables.essential, &state.foods),
            coverage_percent(&tables.essential, &state.foods),
        );
        display_coverage_panel(
            "Beneficial Groups",
            &coverage(&tables.beneficial, &state.foods),
            coverage_percent(&tables.beneficial, &state.foods),
        );
        println!();

        match prompt_menu()? {
            MenuChoice::Add => {
                let query = prompt_search()?;
                state.apply(Action::SetSearch(query));

                if let Some(food) = pick_suggestion(&state.search, &vocabulary)? {
                    println!("Added: {}", food);
                    state.apply(Action::AddFood(food));
                }
            }
            MenuChoice::Remove => {
                if state.foods.is_empty() {
                    println!("No foods selected.");
                    continue;
                }

                if let Some(food) = prompt_remove(&state.foods)? {
                    state.apply(Action::RemoveFood(food));
                }
            }
            MenuChoice::RemoveAll => {
                if state.foods.is_empty() {
                    println!("No foods selected.");
                    continue;
                }

                state.apply(Action::ClearAllRequested);
                if prompt_yes_no("Clear all selected foods?", false)? {
                    state.apply(Action::ClearAllConfirmed);
                    println!("Selection cleared.");
                } else {
                    state.apply(Action::ClearAllCancelled);
                }
            }
            MenuChoice::Inspect => {
                let entries: Vec<_> = tables.all_entries().collect();
                let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();

                if let Some(idx) = prompt_entry(&names)? {
                    display_entry_detail(entries[idx], &state.foods);
                }
            }
            MenuChoice::Quit => break,
        }
    }

    Ok(())
}

/// Non-interactive coverage report for a given food list.
fn cmd_report(tables: &TableSet, foods: &[String], export: Option<&str>) -> Result<()> {
    let selection: Vec<String> = foods.to_vec();

    display_selection(&selection);
    display_coverage_panel(
        "Essential Nutrients",
        &coverage(&tables.essential, &selection),
        coverage_percent(&tables.essential, &selection),
    );
    display_coverage_panel(
        "Beneficial Groups",
        &coverage(&tables.beneficial, &selection),
        coverage_percent(&tables.beneficial, &selection),
    );
    println!();

    for food in &selection {
        let names = nutrients_for_food(food, tables);
        display_food_nutrients(food, &names);
    }

    if let Some(path) = export {
        export_report_csv(Path::new(path), tables, &selection)?;
        println!();
        println!("Report written to {}", path);
    }

    Ok(())
}

/// Print the nutrients and groups one food supplies.
fn cmd_lookup(tables: &TableSet, food: &str) -> Result<()> {
    let names = nutrients_for_food(food, tables);
    display_food_nutrients(food, &names);
    Ok(())
}

/// Print the full food vocabulary.
fn cmd_foods(tables: &TableSet) -> Result<()> {
    display_vocabulary(&tables.vocabulary());
    Ok(())
}
