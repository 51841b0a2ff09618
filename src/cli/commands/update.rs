//! Update command - Move an application to a new status

use std::path::Path;

use crate::config::load_config;
use crate::domain::{apply_status_change, assignable_stages, is_assignable, TransitionOutcome};
use crate::errors::{Result, TrackerError};
use crate::fs;

/// Set a new status, recording the transition in the history
pub fn run(data_dir: Option<&Path>, id: &str, status: &str) -> Result<()> {
    let dir = fs::locate_data_dir(data_dir)?;
    let config = load_config(&dir)?;

    if !is_assignable(&config.stages, status) {
        return Err(TrackerError::UnknownStatus(format!(
            "{} (expected one of: {})",
            status,
            assignable_stages(&config.stages).join(", ")
        )));
    }

    let app = fs::read_application(&dir, id)?;

    match apply_status_change(&app, status, &config.stages)? {
        TransitionOutcome::Unchanged => {
            println!("{} is already {}", id, status);
        }
        TransitionOutcome::Changed { next_app, event } => {
            let mut history = fs::read_history(&dir, id)?;
            history.events.push(event.clone());

            fs::write_application(&dir, id, &next_app)?;
            fs::write_history(&dir, id, &history)?;

            tracing::info!(id = %id, from = %event.from_status, to = %event.to_status, "status updated");
            println!("{}: {} -> {}", id, event.from_status, event.to_status);
        }
    }
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
            None,
            None,
        )
        .unwrap();
    }

    #[test]
    fn test_update_records_transition() {
        let temp = TempDir::new().unwrap();
        seed(&temp);

        run(Some(temp.path()), "app-0001", "Technical Screen").unwrap();

        let app = fs::read_application(temp.path(), "app-0001").unwrap();
        assert_eq!(app.status, "Technical Screen");

        let history = fs::read_history(temp.path(), "app-0001").unwrap();
        assert_eq!(history.events.len(), 2);
        assert_eq!(history.events[1].from_status, "Applied");
        assert_eq!(history.events[1].to_status, "Technical Screen");
    }

    #[test]
    fn test_update_same_status_records_nothing() {
        let temp = TempDir::new().unwrap();
        seed(&temp);

        run(Some(temp.path()), "app-0001", "Applied").unwrap();

        let history = fs::read_history(temp.path(), "app-0001").unwrap();
        assert_eq!(history.events.len(), 1);
    }

    #[test]
    fn test_update_rejects_unknown_status() {
        let temp = TempDir::new().unwrap();
        seed(&temp);

        let result = run(Some(temp.path()), "app-0001", "Ghosted");
        let err = result.unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_STATUS");
        // The message lists the valid stages
        assert!(err.to_string().contains("Applied"));
    }

    #[test]
    fn test_update_rejects_start_sentinel() {
        let temp = TempDir::new().unwrap();
        seed(&temp);

        let result = run(Some(temp.path()), "app-0001", "Start");
        assert_eq!(result.unwrap_err().code(), "UNKNOWN_STATUS");
    }

    #[test]
    fn test_update_missing_application() {
        let temp = TempDir::new().unwrap();

        let result = run(Some(temp.path()), "app-0042", "Applied");
        assert_eq!(result.unwrap_err().code(), "APPLICATION_NOT_FOUND");
    }
}
