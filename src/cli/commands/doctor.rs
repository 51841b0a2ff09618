//! Doctor command - Validate the store and optionally fix recoverable issues

use std::path::Path;

use crate::config::load_config;
use crate::domain::validate_application;
use crate::errors::Result;
use crate::fs;

/// Check every application against the store invariants
pub fn run(data_dir: Option<&Path>, fix: bool) -> Result<()> {
    let dir = fs::locate_data_dir(data_dir)?;
    let config = load_config(&dir)?;

    let ids = fs::list_application_ids(&dir)?;
    let mut issue_count = 0;

    for id in &ids {
        let app = fs::read_application(&dir, id)?;
        let history = fs::read_history(&dir, id)?;

        let issues = validate_application(&app, &history, &config.stages);
        for issue in &issues {
            println!("{}: {}", id, issue);
        }
        issue_count += issues.len();

        // The one recoverable issue: a stored status that drifted from the
        // history head
        if fix {
            if let Some(last) = history.events.last() {
                if app.status != last.to_status {
                    let to = last.to_status.clone();
                    let fixed = app.with_status(to.clone());
                    fs::write_application(&dir, id, &fixed)?;
                    println!("{}: status re-synced to {}", id, to);
                }
            }
        }
    }

    if issue_count == 0 {
        println!("All {} application(s) OK", ids.len());
    } else {
        println!("{} issue(s) across {} application(s)", issue_count, ids.len());
        if !fix {
            println!("Run with --fix to re-sync statuses to history.");
        }
    }
    Ok(())
}
