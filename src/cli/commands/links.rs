//! Links command - Show the personal links from config

use std::path::Path;

use crate::config::load_config;
use crate::errors::Result;
use crate::fs;

/// Print the configured personal links
pub fn run(data_dir: Option<&Path>) -> Result<()> {
    let dir = fs::locate_data_dir(data_dir)?;
    let config = load_config(&dir)?;

    if config.links.is_empty() {
        println!("No personal links configured.");
        return Ok(());
    }

    for link in &config.links {
        println!("{}: {}", link.label, link.url);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Config, PersonalLink};
    use tempfile::TempDir;

    #[test]
    fn test_links_with_config() {
        let temp = TempDir::new().unwrap();

        let mut config = Config::default();
        config.links.push(PersonalLink {
            label: "Resume".to_string(),
            url: "https://example.com/resume.pdf".to_string(),
        });
        fs::write_config(temp.path(), &config).unwrap();

        run(Some(temp.path())).unwrap();
    }

    #[test]
    fn test_links_without_config() {
        let temp = TempDir::new().unwrap();
        run(Some(temp.path())).unwrap();
    }
}
