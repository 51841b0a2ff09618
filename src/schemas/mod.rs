//! Schema types for jobtrack
//!
//! All types serialize to the JSON documents stored under .jobtrack/.

mod application;
mod config;
mod history;

pub use application::Application;
pub use config::{Config, PersonalLink};
pub use history::{History, TransitionEvent};
