//! Path resolution utilities for jobtrack
//!
//! Provides functions to locate the data directory and construct paths to
//! the files inside it.

use std::path::{Path, PathBuf};

use crate::errors::{Result, TrackerError};

/// Name of the data directory.
pub const DATA_DIR_NAME: &str = ".jobtrack";

/// Environment variable overriding the data directory location.
pub const DATA_DIR_ENV: &str = "JOBTRACK_DIR";

/// Find the data directory by walking up from the starting directory.
///
/// # Errors
/// * `DataDirNotFound` - If no ancestor contains a .jobtrack directory
pub fn find_data_dir(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| TrackerError::DataDirNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        let candidate = current.join(DATA_DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(TrackerError::DataDirNotFound(format!(
                    "No {} directory found; run 'jobtrack init' first",
                    DATA_DIR_NAME
                )));
            }
        }
    }
}

/// Resolve the data directory for a command.
///
/// Resolution order: explicit override, then the JOBTRACK_DIR environment
/// variable, then an upward walk from the current directory.
pub fn locate_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        if !dir.is_dir() {
            return Err(TrackerError::DataDirNotFound(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        return Ok(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            let dir = PathBuf::from(dir);
            if !dir.is_dir() {
                return Err(TrackerError::DataDirNotFound(format!(
                    "{} ({}) is not a directory",
                    dir.display(),
                    DATA_DIR_ENV
                )));
            }
            return Ok(dir);
        }
    }

    find_data_dir(&std::env::current_dir()?)
}

/// Resolve the directory that `init` should create.
///
/// Uses the explicit override or JOBTRACK_DIR when given, otherwise a
/// .jobtrack directory under the current directory.
pub fn init_target_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    Ok(std::env::current_dir()?.join(DATA_DIR_NAME))
}

/// Get the path to the config.json file.
pub fn get_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.json")
}

/// Get the path to the applications directory.
pub fn get_applications_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("applications")
}

/// Get the path to a specific application's directory.
pub fn get_application_dir(data_dir: &Path, id: &str) -> PathBuf {
    get_applications_dir(data_dir).join(id)
}

/// Get the path to an application's application.json file.
pub fn get_application_json_path(data_dir: &Path, id: &str) -> PathBuf {
    get_application_dir(data_dir, id).join("application.json")
}

/// Get the path to an application's history.json file.
pub fn get_history_path(data_dir: &Path, id: &str) -> PathBuf {
    get_application_dir(data_dir, id).join("history.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(DATA_DIR_NAME)).unwrap();
        temp
    }

    #[test]
    fn test_find_data_dir_from_root() {
        let temp = setup_store();
        let dir = find_data_dir(temp.path()).unwrap();
        assert_eq!(
            dir.canonicalize().unwrap(),
            temp.path().join(DATA_DIR_NAME).canonicalize().unwrap()
        );
    }

    #[test]
    fn test_find_data_dir_from_subdir() {
        let temp = setup_store();
        let subdir = temp.path().join("projects").join("deep");
        std::fs::create_dir_all(&subdir).unwrap();

        let dir = find_data_dir(&subdir).unwrap();
        assert_eq!(
            dir.canonicalize().unwrap(),
            temp.path().join(DATA_DIR_NAME).canonicalize().unwrap()
        );
    }

    #[test]
    fn test_find_data_dir_not_found() {
        let temp = TempDir::new().unwrap();

        let result = find_data_dir(temp.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("jobtrack init"));
    }

    #[test]
    fn test_locate_data_dir_with_override() {
        let temp = setup_store();
        let data_dir = temp.path().join(DATA_DIR_NAME);

        let resolved = locate_data_dir(Some(&data_dir)).unwrap();
        assert_eq!(resolved, data_dir);
    }

    #[test]
    fn test_locate_data_dir_override_must_exist() {
        let result = locate_data_dir(Some(Path::new("/nonexistent/jobtrack")));
        assert!(result.is_err());
    }

    #[test]
    fn test_init_target_dir_with_override() {
        let target = init_target_dir(Some(Path::new("/tmp/custom-store"))).unwrap();
        assert_eq!(target, PathBuf::from("/tmp/custom-store"));
    }

    #[test]
    fn test_store_paths() {
        let data_dir = PathBuf::from("/home/me/.jobtrack");
        let id = "app-0001";

        assert_eq!(
            get_config_path(&data_dir),
            PathBuf::from("/home/me/.jobtrack/config.json")
        );
        assert_eq!(
            get_application_dir(&data_dir, id),
            PathBuf::from("/home/me/.jobtrack/applications/app-0001")
        );
        assert_eq!(
            get_application_json_path(&data_dir, id),
            PathBuf::from("/home/me/.jobtrack/applications/app-0001/application.json")
        );
        assert_eq!(
            get_history_path(&data_dir, id),
            PathBuf::from("/home/me/.jobtrack/applications/app-0001/history.json")
        );
    }
}
