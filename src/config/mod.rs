//! Configuration for the expense tracker
//!
//! - Path resolution for the data directory and its files
//! - User settings persisted in `config.json`

pub mod paths;
pub mod settings;

pub use paths::{ExpensePaths, DATA_DIR_ENV};
pub use settings::Settings;
