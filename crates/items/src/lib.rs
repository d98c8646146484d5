//! Items domain module (static catalog + feedback submissions).
//!
//! This crate contains the business rules for the item catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod item;
pub mod submission;

pub use catalog::Catalog;
pub use item::Item;
pub use submission::{
    is_valid_email, Submission, SubmissionRecord, MESSAGE_MAX_CHARS,
};
