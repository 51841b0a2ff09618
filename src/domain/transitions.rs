//! Status transition logic
//!
//! Pure functions for applying status changes to applications.

use crate::errors::{Result, TrackerError};
use crate::schemas::{Application, TransitionEvent};

use super::statuses::is_assignable;

/// Outcome of a status change request
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The status changed; the caller persists both parts
    Changed {
        /// The application with updated status and timestamp
        next_app: Application,
        /// The event to append to the application's history
        event: TransitionEvent,
    },
    /// The requested status equals the current status; nothing to record
    Unchanged,
}

impl TransitionOutcome {
    /// Check if the request resulted in a change
    pub fn is_changed(&self) -> bool {
        matches!(self, TransitionOutcome::Changed { .. })
    }
}

/// Pure function that applies a status change to an application.
///
/// This function:
/// - Never mutates the input application
/// - Rejects statuses outside the assignable vocabulary
/// - Records no event when the requested status equals the current one
/// - Returns a new Application plus the transition event otherwise
///
/// # Errors
/// * `UnknownStatus` - If `requested` is not an assignable vocabulary member
pub fn apply_status_change(
    app: &Application,
    requested: &str,
    stages: &[String],
) -> Result<TransitionOutcome> {
    if !is_assignable(stages, requested) {
        return Err(TrackerError::UnknownStatus(requested.to_string()));
    }

    if app.status == requested {
        return Ok(TransitionOutcome::Unchanged);
    }

    let event = TransitionEvent::new(app.status.clone(), requested);
    let next_app = app.clone().with_status(requested);

    Ok(TransitionOutcome::Changed { next_app, event })
}
