//! CLI module for jobtrack
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jobtrack - A personal job application tracker with a Sankey view of status flow
#[derive(Parser, Debug)]
#[command(name = "jobtrack")]
#[command(version)]
#[command(about = "Track job applications and visualize their status flow")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the data directory (default: nearest .jobtrack, or $JOBTRACK_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new application store
    Init {
        /// Overwrite an existing config with defaults
        #[arg(long)]
        force: bool,
    },

    /// Add a new application
    Add {
        /// Company name
        company: String,

        /// Role or position title
        role: String,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Date applied (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List applications with optional filtering
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Case-insensitive search over company, role and notes
        #[arg(long)]
        search: Option<String>,

        /// Filter by exact status
        #[arg(long)]
        status: Option<String>,

        /// Sort order: date (default), company, or status
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show an application and its transition history
    Show {
        /// Application ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an application's details
    Edit {
        /// Application ID
        id: String,

        /// New company name
        #[arg(long)]
        company: Option<String>,

        /// New role title
        #[arg(long)]
        role: Option<String>,

        /// New notes (empty string clears them)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Move an application to a new status, recording the transition
    Update {
        /// Application ID
        id: String,

        /// New status (must be a vocabulary stage)
        status: String,
    },

    /// Delete an application and its history
    Delete {
        /// Application ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Emit the Sankey flow payload aggregated from all transitions
    Chart {
        /// Write the payload to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the personal links from config
    Links,

    /// Validate the store and optionally fix recoverable issues
    Doctor {
        /// Re-sync stored statuses to the history head
        #[arg(long)]
        fix: bool,
    },
}
