//! Search, filter and sort over the loaded application list
//!
//! The whole store fits in memory, so queries are plain functions over a Vec
//! rather than anything resembling a query engine.

use std::cmp::Ordering;

use crate::errors::{Result, TrackerError};
use crate::schemas::Application;

use super::statuses::stage_index;

/// Sort order for application listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recent date_applied first
    #[default]
    DateDesc,
    /// Company name, case-insensitive ascending
    Company,
    /// Vocabulary stage order
    Status,
}

impl std::str::FromStr for SortKey {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "date" => Ok(SortKey::DateDesc),
            "company" => Ok(SortKey::Company),
            "status" => Ok(SortKey::Status),
            _ => Err(TrackerError::InvalidArgument(format!(
                "unknown sort key {:?} (expected date, company, or status)",
                s
            ))),
        }
    }
}

/// Filter and sort criteria for a listing
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Case-insensitive substring over company, role and notes
    pub search: Option<String>,

    /// Keep only applications with this exact status
    pub status: Option<String>,

    /// Sort order
    pub sort: SortKey,
}

/// Check whether an application matches a case-insensitive search needle.
pub fn matches_search(app: &Application, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    app.company.to_lowercase().contains(&needle)
        || app.role.to_lowercase().contains(&needle)
        || app
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(&needle))
}

/// Apply filter, search and sort to a loaded application list.
pub fn filter_and_sort(
    mut apps: Vec<Application>,
    opts: &QueryOptions,
    stages: &[String],
) -> Vec<Application> {
    if let Some(status) = &opts.status {
        apps.retain(|app| &app.status == status);
    }

    if let Some(needle) = opts.search.as_deref() {
        let needle = needle.trim();
        if !needle.is_empty() {
            apps.retain(|app| matches_search(app, needle));
        }
    }

    match opts.sort {
        SortKey::DateDesc => {
            apps.sort_by(|a, b| match b.date_applied.cmp(&a.date_applied) {
                Ordering::Equal => b.created_at.cmp(&a.created_at),
                other => other,
            });
        }
        SortKey::Company => {
            apps.sort_by(|a, b| a.company.to_lowercase().cmp(&b.company.to_lowercase()));
        }
        SortKey::Status => {
            apps.sort_by_key(|app| stage_index(stages, &app.status));
        }
    }

    apps
}
