//! Configuration loading for jobtrack

mod loader;

pub use loader::load_config;
