pub mod prompts;
pub mod render;

pub use prompts::{
    pick_suggestion, prompt_entry, prompt_menu, prompt_remove, prompt_search, prompt_yes_no,
    MenuChoice,
};
pub use render::{
    display_coverage_panel, display_entry_detail, display_food_nutrients, display_selection,
    display_vocabulary, export_report_csv,
};
