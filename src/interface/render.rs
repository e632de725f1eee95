use std::path::Path;

use crate::engine::matches;
use crate::error::Result;
use crate::models::{CoverageRow, NutrientEntry, TableSet};

/// Display one coverage panel: missing entries first, covered after,
/// with the covered percentage in the header.
pub fn display_coverage_panel(title: &str, rows: &[CoverageRow], percent: u32) {
    println!();
    println!("=== {} ({}% covered) ===", title, percent);

    if rows.is_empty() {
        println!("  (no entries)");
        return;
    }

    let max_name_len = rows
        .iter()
        .map(|r| r.entry.name.len())
        .max()
        .unwrap_or(10);

    for row in rows {
        let (mark, status) = if row.is_covered {
            ("x", "covered")
        } else {
            (" ", "missing")
        };
        println!(
            "  [{}] {:<width$}  {}",
            mark,
            row.entry.name,
            status,
            width = max_name_len
        );
    }
}

/// Display the current selection in insertion order.
pub fn display_selection(foods: &[String]) {
    if foods.is_empty() {
        println!("Foods: (none selected)");
        return;
    }

    println!("Foods ({}):", foods.len());
    for food in foods {
        println!("  - {}", food);
    }
}

/// Display one entry's contributing foods, flagging the sources the
/// current selection matches.
pub fn display_entry_detail(entry: &NutrientEntry, selection: &[String]) {
    println!();
    println!("=== {} ===", entry.name);

    let mut any_matched = false;
    for src in &entry.foods {
        let matched = selection.iter().any(|food| matches(food, src));
        any_matched |= matched;
        let mark = if matched { "*" } else { " " };
        println!("  {} {}", mark, src);
    }

    if any_matched {
        println!("  (* = matched by your selection)");
    }
}

/// Display the nutrients and groups one food supplies.
pub fn display_food_nutrients(food: &str, names: &[&str]) {
    if names.is_empty() {
        println!("No nutrient entries list '{}'", food);
        return;
    }

    println!("{} supplies:", food);
    for name in names {
        println!("  - {}", name);
    }
}

/// Display the full food vocabulary.
pub fn display_vocabulary(foods: &[String]) {
    println!("=== Known foods ({}) ===", foods.len());
    for food in foods {
        println!("  {}", food);
    }
}

/// Write a coverage report for both tables to a CSV file.
pub fn export_report_csv(path: &Path, tables: &TableSet, selection: &[String]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["table", "entry", "covered", "matched_foods"])?;

    for (table_name, table) in [
        ("essential", &tables.essential),
        ("beneficial", &tables.beneficial),
    ] {
        for row in crate::engine::coverage(table, selection) {
            let matched: Vec<&str> = selection
                .iter()
                .filter(|food| row.entry.foods.iter().any(|src| matches(food, src)))
                .map(String::as_str)
                .collect();
            let matched = matched.join("; ");

            wtr.write_record([
                table_name,
                row.entry.name.as_str(),
                if row.is_covered { "yes" } else { "no" },
                matched.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
