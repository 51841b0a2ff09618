//! Status vocabulary definitions
//!
//! Every application moves through a fixed set of lifecycle stages. The
//! synthetic "Start" stage is the origin of each application's first
//! transition and is never an assignable status itself.

/// Synthetic origin status, the source of every application's first transition.
pub const START_STATUS: &str = "Start";

/// The canonical ordering of lifecycle stages.
///
/// IMPORTANT: This is the source of truth for stage ordering. Status-ordered
/// sorting and the flow diagram's node completion both follow it.
pub const STATUS_STAGES: &[&str] = &[
    "Start",
    "Applied",
    "Online Assessment",
    "Technical Screen",
    "Final Round",
    "Offer",
    "Offer Accepted",
    "Offer Declined",
    "Rejected",
    "Withdrew",
];

/// The canonical vocabulary as owned strings, for use as a config default.
pub fn default_stages() -> Vec<String> {
    STATUS_STAGES.iter().map(|s| s.to_string()).collect()
}

/// Get the 0-based index of a status in the vocabulary ordering.
///
/// Returns the position in `stages`, or usize::MAX if not found, so unknown
/// statuses sort after every known stage.
pub fn stage_index(stages: &[String], status: &str) -> usize {
    stages
        .iter()
        .position(|s| s == status)
        .unwrap_or(usize::MAX)
}

/// Check whether a status may be assigned to an application.
///
/// A status is assignable when it is a vocabulary member other than the
/// "Start" sentinel.
pub fn is_assignable(stages: &[String], status: &str) -> bool {
    status != START_STATUS && stages.iter().any(|s| s == status)
}

/// The assignable stages, in vocabulary order.
pub fn assignable_stages(stages: &[String]) -> Vec<&str> {
    stages
        .iter()
        .map(String::as_str)
        .filter(|s| *s != START_STATUS)
        .collect()
}

/// The status newly added applications receive: the first assignable stage.
///
/// Returns None for a vocabulary with no assignable stages.
pub fn initial_status(stages: &[String]) -> Option<&str> {
    stages
        .iter()
        .map(String::as_str)
        .find(|s| *s != START_STATUS)
}
