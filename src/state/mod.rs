mod app;
mod tables;

pub use app::{Action, AppState};
pub use tables::{builtin_tables, load_tables};
