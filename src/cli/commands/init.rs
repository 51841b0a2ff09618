//! Init command - Initialize a new application store

use std::path::Path;

use crate::errors::{Result, TrackerError};
use crate::fs;
use crate::schemas::Config;

/// Initialize the data directory and write the default config
pub fn run(data_dir: Option<&Path>, force: bool) -> Result<()> {
    let dir = fs::init_target_dir(data_dir)?;
    let config_path = fs::get_config_path(&dir);

    if config_path.exists() && !force {
        return Err(TrackerError::ConfigError(format!(
            "{} is already initialized (use --force to reset the config)",
            dir.display()
        )));
    }

    std::fs::create_dir_all(fs::get_applications_dir(&dir))?;
    fs::write_config(&dir, &Config::default())?;

    tracing::info!(dir = %dir.display(), "store initialized");
    println!("Initialized application store at {}", dir.display());
    Ok(())
}
