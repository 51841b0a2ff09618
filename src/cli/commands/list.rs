//! List command - List applications with optional filtering

use std::path::Path;

use crate::config::load_config;
use crate::domain::{filter_and_sort, QueryOptions, SortKey};
use crate::errors::{Result, TrackerError};
use crate::fs;

/// List applications, filtered and sorted
pub fn run(
    data_dir: Option<&Path>,
    json: bool,
    search: Option<String>,
    status: Option<String>,
    sort: Option<String>,
) -> Result<()> {
    let dir = fs::locate_data_dir(data_dir)?;
    let config = load_config(&dir)?;

    if let Some(status) = &status {
        if !config.stages.iter().any(|s| s == status) {
            return Err(TrackerError::UnknownStatus(status.clone()));
        }
    }

    let sort = match sort.as_deref() {
        Some(s) => s.parse()?,
        None => SortKey::default(),
    };

    let mut apps = Vec::new();
    for id in fs::list_application_ids(&dir)? {
        apps.push(fs::read_application(&dir, &id)?);
    }

    let opts = QueryOptions {
        search,
        status,
        sort,
    };
    let results = filter_and_sort(apps, &opts, &config.stages);

    if json {
        let output = serde_json::to_string_pretty(&results)
            .map_err(|e| TrackerError::InvalidJson(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    if results.is_empty() {
        println!("No applications found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<22} {:<26} {:<18} {}",
        "ID", "COMPANY", "ROLE", "STATUS", "APPLIED"
    );
    for app in &results {
        println!(
            "{:<10} {:<22} {:<26} {:<18} {}",
            app.id, app.company, app.role, app.status, app.date_applied
        );
    }
    println!("{} application(s)", results.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed_store(temp: &TempDir) {
        for (company, role) in [("Acme", "Platform Engineer"), ("Borealis", "SRE")] {
            crate::cli::commands::add::run(
                Some(temp.path()),
                company.to_string(),
                role.to_string(),
                None,
                None,
            )
            .unwrap();
        }
    }

    #[test]
    fn test_list_runs_over_seeded_store() {
        let temp = TempDir::new().unwrap();
        seed_store(&temp);

        run(Some(temp.path()), false, None, None, None).unwrap();
        run(Some(temp.path()), true, None, None, None).unwrap();
    }

    #[test]
    fn test_list_rejects_unknown_status_filter() {
        let temp = TempDir::new().unwrap();
        seed_store(&temp);

        let result = run(
            Some(temp.path()),
            false,
            None,
            Some("Ghosted".to_string()),
            None,
        );
        assert_eq!(result.unwrap_err().code(), "UNKNOWN_STATUS");
    }

    #[test]
    fn test_list_rejects_unknown_sort_key() {
        let temp = TempDir::new().unwrap();
        seed_store(&temp);

        let result = run(
            Some(temp.path()),
            false,
            None,
            None,
            Some("salary".to_string()),
        );
        assert_eq!(result.unwrap_err().code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_list_empty_store() {
        let temp = TempDir::new().unwrap();
        run(Some(temp.path()), false, None, None, None).unwrap();
    }
}
