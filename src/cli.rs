use clap::{Parser, Subcommand};

/// NutriCheck — which nutrients did today's foods cover?
#[derive(Parser, Debug)]
#[command(name = "nutri_check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a custom nutrient tables JSON file (defaults to the
    /// built-in tables).
    #[arg(short, long)]
    pub tables: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively build a food list and watch coverage update.
    Check,

    /// One-shot coverage report for a list of foods.
    Report {
        /// A food eaten today; repeat the flag for several.
        #[arg(short, long = "food", required = true)]
        foods: Vec<String>,

        /// Write the report to a CSV file.
        #[arg(short, long)]
        export: Option<String>,
    },

    /// Show which nutrients and groups a single food supplies.
    Lookup {
        /// The food to look up.
        food: String,
    },

    /// List every food the tables know about.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Check
    }
}
