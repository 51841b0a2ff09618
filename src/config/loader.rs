//! Config access for commands

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Resolve the effective configuration for a store.
///
/// A missing config.json is not an error: commands run against the built-in
/// vocabulary and palette until `init` (or the user) writes one. Fields left
/// out of the file keep their built-in values.
pub fn load_config(data_dir: &Path) -> Result<Config> {
    fs::read_config(data_dir)
}
