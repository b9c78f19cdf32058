//! # syl-facts
//!
//! The structured side of the lookup pipeline:
//! - [`CourseRegistry`] maps course display names to their facts and rules files
//! - [`CourseFacts`] loads one facts store and applies its `_schema` block
//! - [`FieldNormalizer`] reconciles divergent record field names per intent
//! - [`FactResolver`] turns normalized records plus slots into a
//!   [`syl_core::Resolution`]
//!
//! Facts are read-only here. Nothing in this crate writes to a store.

pub mod aliases;
pub mod error;
pub mod normalizer;
pub mod record;
pub mod registry;
pub mod resolvers;
pub mod schema;

pub use aliases::AssessmentAliases;
pub use error::FactsError;
pub use normalizer::{FieldAliases, FieldNormalizer};
pub use record::Record;
pub use registry::{CourseFiles, CourseRegistry};
pub use resolvers::FactResolver;
pub use schema::{CourseFacts, SchemaDefaults};
