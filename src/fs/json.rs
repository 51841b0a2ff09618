//! JSON file operations for the application store
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{Result, TrackerError};
use crate::schemas::{Application, Config, History};

use super::paths::{
    get_application_dir, get_application_json_path, get_applications_dir, get_config_path,
    get_history_path,
};

/// Load and validate one JSON document from the store.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the content fails to parse or validate
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(TrackerError::FileNotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&raw)
        .map_err(|e| TrackerError::InvalidJson(format!("{}: {}", path.display(), e)))
}

/// Serialize a value and persist it as a pretty-printed, newline-terminated
/// JSON document.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let mut doc = serde_json::to_string_pretty(data)
        .map_err(|e| TrackerError::InvalidJson(e.to_string()))?;
    doc.push('\n');
    persist(path, doc.as_bytes())
}

/// Stage the bytes next to the destination and move them into place once
/// flushed, so an interrupted write never leaves a half-written record. Any
/// missing parent directories are created on the way.
fn persist(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let staging = path.with_extension("tmp");
    {
        let mut file = fs::File::create(&staging)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    fs::rename(&staging, path)?;
    Ok(())
}

/// Read the config.json file, or defaults if it doesn't exist.
pub fn read_config(data_dir: &Path) -> Result<Config> {
    let path = get_config_path(data_dir);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Write the config.json file.
pub fn write_config(data_dir: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(data_dir), config)
}

/// Read an application.json file.
///
/// # Errors
/// * `ApplicationNotFound` - If no record exists for the id
pub fn read_application(data_dir: &Path, id: &str) -> Result<Application> {
    let path = get_application_json_path(data_dir, id);
    match read_json(&path) {
        Err(TrackerError::FileNotFound(_)) => {
            Err(TrackerError::ApplicationNotFound(id.to_string()))
        }
        other => other,
    }
}

/// Write an application.json file.
pub fn write_application(data_dir: &Path, id: &str, app: &Application) -> Result<()> {
    write_json(&get_application_json_path(data_dir, id), app)
}

/// Read an application's history.json, or an empty history if missing.
pub fn read_history(data_dir: &Path, id: &str) -> Result<History> {
    let path = get_history_path(data_dir, id);
    if !path.exists() {
        return Ok(History::new());
    }
    read_json(&path)
}

/// Write an application's history.json.
pub fn write_history(data_dir: &Path, id: &str, history: &History) -> Result<()> {
    write_json(&get_history_path(data_dir, id), history)
}

/// List all application ids in the store, sorted.
pub fn list_application_ids(data_dir: &Path) -> Result<Vec<String>> {
    let dir = get_applications_dir(data_dir);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut ids = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                ids.push(name.to_string());
            }
        }
    }
    ids.sort();
    Ok(ids)
}

/// Delete an application's directory, cascading its history.
///
/// # Errors
/// * `ApplicationNotFound` - If no record exists for the id
pub fn delete_application(data_dir: &Path, id: &str) -> Result<()> {
    let dir = get_application_dir(data_dir, id);
    if !dir.exists() {
        return Err(TrackerError::ApplicationNotFound(id.to_string()));
    }
    fs::remove_dir_all(&dir)?;
    Ok(())
}

/// Allocate the next sequential application id (app-0001, app-0002, ...).
pub fn next_application_id(data_dir: &Path) -> Result<String> {
    let max = list_application_ids(data_dir)?
        .iter()
        .filter_map(|id| id.strip_prefix("app-"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    Ok(format!("app-{:04}", max + 1))
}
