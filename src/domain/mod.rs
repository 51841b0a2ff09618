//! Domain logic for statuses, transitions and queries

mod query;
mod statuses;
mod transitions;
mod validation;

pub use query::{filter_and_sort, matches_search, QueryOptions, SortKey};
pub use statuses::{
    assignable_stages, default_stages, initial_status, is_assignable, stage_index, START_STATUS,
    STATUS_STAGES,
};
pub use transitions::{apply_status_change, TransitionOutcome};
pub use validation::{
    check_chain_contiguous, check_chain_start, check_head_matches, check_status_known,
    validate_application, ValidationResult,
};
