//! Edit command - Update an application's details

use std::path::Path;

use crate::errors::Result;
use crate::fs;

/// Replace the given details on an application
pub fn run(
    data_dir: Option<&Path>,
    id: &str,
    company: Option<String>,
    role: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    if company.is_none() && role.is_none() && notes.is_none() {
        println!("Nothing to change.");
        return Ok(());
    }

    let dir = fs::locate_data_dir(data_dir)?;
    let app = fs::read_application(&dir, id)?;

    let updated = app.with_details(company, role, notes);
    fs::write_application(&dir, id, &updated)?;

    tracing::info!(id = %id, "application edited");
    println!("Updated {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed(temp: &TempDir) {
        crate::cli::commands::add::run(
            Some(temp.path()),
            "Acme".to_string(),
            "Platform Engineer".to_string(),
            Some("first round".to_string()),
            None,
        )
        .unwrap();
    }

    #[test]
    fn test_edit_replaces_given_fields() {
        let temp = TempDir::new().unwrap();
        seed(&temp);

        run(
            Some(temp.path()),
            "app-0001",
            None,
            Some("Staff Engineer".to_string()),
            None,
        )
        .unwrap();

        let app = fs::read_application(temp.path(), "app-0001").unwrap();
        assert_eq!(app.company, "Acme");
        assert_eq!(app.role, "Staff Engineer");
        assert_eq!(app.notes, Some("first round".to_string()));
    }

    #[test]
    fn test_edit_clears_notes_with_empty_string() {
        let temp = TempDir::new().unwrap();
        seed(&temp);

        run(Some(temp.path()), "app-0001", None, None, Some(String::new())).unwrap();

        let app = fs::read_application(temp.path(), "app-0001").unwrap();
        assert!(app.notes.is_none());
    }

    #[test]
    fn test_edit_with_no_changes_is_a_noop() {
        let temp = TempDir::new().unwrap();
        seed(&temp);
        let before = fs::read_application(temp.path(), "app-0001").unwrap();

        run(Some(temp.path()), "app-0001", None, None, None).unwrap();

        let after = fs::read_application(temp.path(), "app-0001").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_edit_missing_application() {
        let temp = TempDir::new().unwrap();

        let result = run(
            Some(temp.path()),
            "app-0042",
            Some("Acme".to_string()),
            None,
            None,
        );
        assert_eq!(result.unwrap_err().code(), "APPLICATION_NOT_FOUND");
    }
}
