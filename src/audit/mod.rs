//! Audit logging for Birthwatch
//!
//! Every persisted change (setting keys, checklist tasks, the wizard gate)
//! is appended to `audit.log` as one JSON line, so the family can see when
//! a phone number or the labor start time was changed.
//!
//! - `AuditEntry`: timestamp, operation, entity, and before/after values.
//! - `AuditLogger`: appends and reads the JSONL file.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
