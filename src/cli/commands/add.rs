//! Add command - Record a new application

use std::path::Path;

use crate::config::load_config;
use crate::domain::{initial_status, START_STATUS};
use crate::errors::{Result, TrackerError};
use crate::fs;
use crate::schemas::{Application, History, TransitionEvent};

/// Create an application in the initial status and record its first transition
pub fn run(
    data_dir: Option<&Path>,
    company: String,
    role: String,
    notes: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let dir = fs::locate_data_dir(data_dir)?;
    let config = load_config(&dir)?;

    let date_applied = match date {
        Some(d) => chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .map_err(|_| {
                TrackerError::InvalidArgument(format!(
                    "invalid date {:?} (expected YYYY-MM-DD)",
                    d
                ))
            })?
            .to_string(),
        None => chrono::Utc::now().date_naive().to_string(),
    };

    let status = initial_status(&config.stages)
        .ok_or_else(|| {
            TrackerError::ConfigError("status vocabulary has no assignable stages".to_string())
        })?
        .to_string();

    let id = fs::next_application_id(&dir)?;
    let mut app = Application::new(id.clone(), company, role, status, date_applied);
    app.notes = notes.filter(|n| !n.is_empty());

    let mut history = History::new();
    history
        .events
        .push(TransitionEvent::new(START_STATUS, app.status.clone()));

    fs::write_application(&dir, &id, &app)?;
    fs::write_history(&dir, &id, &history)?;

    tracing::info!(id = %id, "application added");
    println!("Added {}: {} at {} [{}]", id, app.role, app.company, app.status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_creates_record_and_history() {
        let temp = TempDir::new().unwrap();

        run(
            Some(temp.path()),
            "Acme".to_string(),
            "Platform Engineer".to_string(),
            Some("referred by Dana".to_string()),
            Some("2026-08-01".to_string()),
        )
        .unwrap();

        let app = fs::read_application(temp.path(), "app-0001").unwrap();
        assert_eq!(app.company, "Acme");
        assert_eq!(app.status, "Applied");
        assert_eq!(app.date_applied, "2026-08-01");
        assert_eq!(app.notes, Some("referred by Dana".to_string()));

        let history = fs::read_history(temp.path(), "app-0001").unwrap();
        assert_eq!(history.events.len(), 1);
        assert_eq!(history.events[0].from_status, START_STATUS);
        assert_eq!(history.events[0].to_status, "Applied");
    }

    #[test]
    fn test_add_allocates_sequential_ids() {
        let temp = TempDir::new().unwrap();

        for company in ["Acme", "Borealis"] {
            run(
                Some(temp.path()),
                company.to_string(),
                "Engineer".to_string(),
                None,
                None,
            )
            .unwrap();
        }

        let ids = fs::list_application_ids(temp.path()).unwrap();
        assert_eq!(ids, vec!["app-0001", "app-0002"]);
    }

    #[test]
    fn test_add_rejects_malformed_date() {
        let temp = TempDir::new().unwrap();

        let result = run(
            Some(temp.path()),
            "Acme".to_string(),
            "Engineer".to_string(),
            None,
            Some("08/01/2026".to_string()),
        );

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_add_drops_empty_notes() {
        let temp = TempDir::new().unwrap();

        run(
            Some(temp.path()),
            "Acme".to_string(),
            "Engineer".to_string(),
            Some(String::new()),
            None,
        )
        .unwrap();

        let app = fs::read_application(temp.path(), "app-0001").unwrap();
        assert!(app.notes.is_none());
    }
}
