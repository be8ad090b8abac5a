//! Domain models for coding parental occupations
//!
//! Survey rows as read, per-parent coding outcomes, and the flat record
//! persisted for the downstream merge.

pub mod parent;
pub mod respondent;

pub use parent::{EntryStatus, ParentOutcome, ParentRole};
pub use respondent::{CodedEntry, RawEntry, RespondentRecord};
