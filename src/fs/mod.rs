//! File system utilities for jobtrack
//!
//! Provides path resolution and JSON file operations for the store.

mod json;
mod paths;

pub use json::{
    delete_application, list_application_ids, next_application_id, read_application, read_config,
    read_history, read_json, write_application, write_config, write_history, write_json,
};
pub use paths::{
    find_data_dir, get_application_dir, get_application_json_path, get_applications_dir,
    get_config_path, get_history_path, init_target_dir, locate_data_dir, DATA_DIR_ENV,
    DATA_DIR_NAME,
};
