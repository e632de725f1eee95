use std::fs;
use std::path::Path;

use crate::error::{NutriError, Result};
use crate::models::TableSet;

/// Built-in nutrient tables, compiled into the binary.
const BUILTIN_TABLES: &str = include_str!("../../data/nutrients.json");

/// Load the built-in table set.
pub fn builtin_tables() -> Result<TableSet> {
    parse_tables(BUILTIN_TABLES)
}

/// Load a table set from a user-supplied JSON file (same schema as the
/// built-in data).
pub fn load_tables<P: AsRef<Path>>(path: P) -> Result<TableSet> {
    let content = fs::read_to_string(path)?;
    parse_tables(&content)
}

/// Parse and validate, fail-fast: a malformed entry aborts the load
/// before anything is rendered.
fn parse_tables(json: &str) -> Result<TableSet> {
    let tables: TableSet = serde_json::from_str(json)?;
    validate(&tables)?;
    Ok(tables)
}

fn validate(tables: &TableSet) -> Result<()> {
    for (table_name, entries) in [
        ("essential", &tables.essential),
        ("beneficial", &tables.beneficial),
    ] {
        for (i, entry) in entries.iter().enumerate() {
            if !entry.is_valid() {
                return Err(NutriError::InvalidTable(format!(
                    "{} table, entry {}: needs a non-empty name and at least one non-blank food",
                    table_name, i
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_tables_parse_and_validate() {
        let tables = builtin_tables().unwrap();
        assert!(!tables.essential.is_empty());
        assert!(!tables.beneficial.is_empty());
        assert!(!tables.vocabulary().is_empty());
    }

    #[test]
    fn test_load_tables_from_file() {
        let json = r#"{
            "essential": [
                {"name": "Vitamin C", "foods": ["orange", "kiwi"]},
                {"name": "Iron", "foods": ["spinach", "beef"]}
            ],
            "beneficial": [
                {"name": "Leafy Greens", "foods": ["spinach", "kale"]}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let tables = load_tables(file.path()).unwrap();
        assert_eq!(tables.essential.len(), 2);
        assert_eq!(tables.beneficial.len(), 1);
        assert_eq!(tables.essential[1].name, "Iron");
    }

    #[test]
    fn test_entry_without_foods_fails_fast() {
        let json = r#"{
            "essential": [{"name": "Iron", "foods": []}],
            "beneficial": []
        }"#;

        let err = parse_tables(json).unwrap_err();
        assert!(matches!(err, NutriError::InvalidTable(_)));
    }

    #[test]
    fn test_entry_with_blank_name_fails_fast() {
        let json = r#"{
            "essential": [{"name": "  ", "foods": ["spinach"]}],
            "beneficial": []
        }"#;

        let err = parse_tables(json).unwrap_err();
        assert!(matches!(err, NutriError::InvalidTable(_)));
    }

    #[test]
    fn test_missing_field_is_a_json_error() {
        let json = r#"{
            "essential": [{"name": "Iron"}],
            "beneficial": []
        }"#;

        let err = parse_tables(json).unwrap_err();
        assert!(matches!(err, NutriError::Json(_)));
    }
}
