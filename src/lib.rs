//! Expense Tracker - terminal-based personal expense tracking
//!
//! Records dated expenses in six fixed categories and answers questions about
//! them: which expenses match a filter, in what order, grouped how, and what
//! the totals and averages are.
//!
//! # Architecture
//!
//! - `models`: expenses, money, categories, IDs, filter/sort/group specs, presets
//! - `calendar`: date arithmetic (Sunday weeks, inclusive ranges) and the `Clock`
//! - `engine`: pure filter, sort, group and summary functions over snapshots
//! - `export`: CSV, JSON and YAML writers
//! - `config`: path resolution and user settings
//! - `storage`: atomic JSON repositories
//! - `audit`: append-only JSONL log of every change
//! - `services`: validated create/edit/delete and preset management
//! - `display`: table rendering for the terminal
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
