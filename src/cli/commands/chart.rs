//! Chart command - Emit the Sankey flow payload

use std::path::Path;

use crate::config::load_config;
use crate::errors::{Result, TrackerError};
use crate::fs;
use crate::sankey::{build_sankey, ColorPalette};

/// Aggregate every application's transitions and emit the flow payload
pub fn run(data_dir: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let dir = fs::locate_data_dir(data_dir)?;
    let config = load_config(&dir)?;

    let mut events = Vec::new();
    for id in fs::list_application_ids(&dir)? {
        events.extend(fs::read_history(&dir, &id)?.events);
    }

    let palette = ColorPalette::new(config.colors.clone());
    let payload = build_sankey(&events, &config.stages, &palette);

    let json = match &payload {
        Some(diagram) => serde_json::to_string_pretty(diagram)
            .map_err(|e| TrackerError::InvalidJson(e.to_string()))?,
        None => {
            // Neutral empty state for the renderer
            tracing::warn!("no transitions recorded; emitting empty payload");
            "{}".to_string()
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))?;
            println!("Wrote chart data to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
