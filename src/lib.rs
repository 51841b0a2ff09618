//! Jobtrack - A personal job application tracker with a Sankey view of status flow
//!
//! This library provides the core functionality for the jobtrack CLI, including:
//! - Schema definitions for applications, transition history, and config
//! - Domain logic for the status vocabulary, transitions, and list queries
//! - Aggregation of the transition log into a flow-diagram payload
//! - File system utilities for the JSON application store

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod sankey;
pub mod schemas;

// Re-export commonly used types
pub use errors::{Result, TrackerError};
pub use sankey::{build_sankey, ColorPalette, SankeyDiagram};
pub use schemas::{Application, Config, History, PersonalLink, TransitionEvent};
