//! Delete command - Remove an application and its history

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::errors::Result;
use crate::fs;

/// Delete an application after confirmation, cascading its history
pub fn run(data_dir: Option<&Path>, id: &str, yes: bool) -> Result<()> {
    let dir = fs::locate_data_dir(data_dir)?;
    let app = fs::read_application(&dir, id)?;

    if !yes {
        print!("Delete {} ({} at {})? [y/N] ", id, app.role, app.company);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    fs::delete_application(&dir, id)?;

    tracing::info!(id = %id, "application deleted");
    println!("Deleted {}", id);
    Ok(())
}
