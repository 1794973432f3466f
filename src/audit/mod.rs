//! Audit log for the expense tracker
//!
//! Every create, update and delete of an expense or filter preset is appended
//! to `audit.log` as one JSON line, with the record before and after the change.
//!
//! - `AuditEntry`: a single logged operation
//! - `AuditLogger`: appends entries to the log and reads them back
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Expense,
//!     expense.id.to_string(),
//!     Some(expense.description.clone()),
//!     &expense,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
