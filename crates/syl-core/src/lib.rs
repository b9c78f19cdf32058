//! # syl-core
//!
//! Core types and error types for Syllabus.
//!
//! This crate provides the foundational types shared across all Syllabus crates:
//! - The intent enum produced by the external classifier
//! - Slot values and the full intent classification
//! - Citations and cited answers
//! - The tri-state resolution returned by every structured resolver
//! - Response types surfaced to callers of the question pipeline
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod resolution;
pub mod responses;

pub use entities::{Answer, Citation, IntentClassification, Slots};
pub use enums::{Intent, QueryOutcome};
pub use errors::CoreError;
pub use resolution::Resolution;
pub use responses::QueryResponse;
