//! Show command - Show an application and its transition history

use std::path::Path;

use serde::Serialize;

use crate::errors::{Result, TrackerError};
use crate::fs;
use crate::schemas::{Application, TransitionEvent};

#[derive(Serialize)]
struct ShowOutput<'a> {
    application: &'a Application,
    history: &'a [TransitionEvent],
}

/// Show one application's details and transition history
pub fn run(data_dir: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let dir = fs::locate_data_dir(data_dir)?;
    let app = fs::read_application(&dir, id)?;
    let history = fs::read_history(&dir, id)?;

    if json {
        let output = ShowOutput {
            application: &app,
            history: &history.events,
        };
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| TrackerError::InvalidJson(e.to_string()))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}: {} at {}", app.id, app.role, app.company);
    println!("  Status:  {}", app.status);
    println!("  Applied: {}", app.date_applied);
    if let Some(notes) = &app.notes {
        println!("  Notes:   {}", notes);
    }
    println!("  History:");
    if history.events.is_empty() {
        println!("    (none)");
    }
    for event in &history.events {
        println!(
            "    {}  {} -> {}",
            event.changed_at, event.from_status, event.to_status
        );
    }
    Ok(())
}
