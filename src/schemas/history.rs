//! History schema - The per-application status transition log

use serde::{Deserialize, Serialize};

/// A recorded status change. Immutable once written; deleted only as a
/// cascade when the owning application is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// Status the application moved from ("Start" for the initial event)
    pub from_status: String,

    /// Status the application moved to
    pub to_status: String,

    /// ISO 8601 timestamp of the change
    pub changed_at: String,
}

impl TransitionEvent {
    /// Create a new transition event timestamped now
    pub fn new(from_status: impl Into<String>, to_status: impl Into<String>) -> Self {
        TransitionEvent {
            from_status: from_status.into(),
            to_status: to_status.into(),
            changed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Transition log for one application, in recording order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Recorded transitions, oldest first
    pub events: Vec<TransitionEvent>,
}

impl History {
    /// Create a new empty history
    pub fn new() -> Self {
        History {
            schema_version: 1,
            events: Vec::new(),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
