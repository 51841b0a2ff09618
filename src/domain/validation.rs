//! Validation rules for stored applications
//!
//! The doctor command runs these checks over every application in the store.

use crate::schemas::{Application, History};

use super::statuses::{is_assignable, START_STATUS};

/// Result of a validation check
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Check that the application's current status is an assignable stage.
pub fn check_status_known(app: &Application, stages: &[String]) -> ValidationResult {
    if !is_assignable(stages, &app.status) {
        return ValidationResult::failure(format!(
            "status {:?} is not in the vocabulary",
            app.status
        ));
    }
    ValidationResult::success()
}

/// Check that the history opens with a transition out of the Start sentinel.
pub fn check_chain_start(history: &History) -> ValidationResult {
    match history.events.first() {
        None => ValidationResult::failure("no transition history"),
        Some(first) if first.from_status != START_STATUS => ValidationResult::failure(format!(
            "history begins at {:?} instead of {:?}",
            first.from_status, START_STATUS
        )),
        Some(_) => ValidationResult::success(),
    }
}

/// Check that consecutive events are contiguous: each from_status must equal
/// the previous event's to_status.
pub fn check_chain_contiguous(history: &History) -> ValidationResult {
    for pair in history.events.windows(2) {
        if pair[1].from_status != pair[0].to_status {
            return ValidationResult::failure(format!(
                "history breaks between {:?} and {:?}",
                pair[0].to_status, pair[1].from_status
            ));
        }
    }
    ValidationResult::success()
}

/// Check that the last recorded to_status matches the stored current status.
pub fn check_head_matches(app: &Application, history: &History) -> ValidationResult {
    match history.events.last() {
        None => ValidationResult::success(), // reported by check_chain_start
        Some(last) if last.to_status != app.status => ValidationResult::failure(format!(
            "stored status {:?} does not match history head {:?}",
            app.status, last.to_status
        )),
        Some(_) => ValidationResult::success(),
    }
}

/// Run every check for one application, collecting the failure reasons.
pub fn validate_application(
    app: &Application,
    history: &History,
    stages: &[String],
) -> Vec<String> {
    [
        check_status_known(app, stages),
        check_chain_start(history),
        check_chain_contiguous(history),
        check_head_matches(app, history),
    ]
    .into_iter()
    .filter_map(|result| result.reason)
    .collect()
}
