//! # syl-query
//!
//! The question pipeline. A [`Classifier`] turns the question into an intent
//! with slots; its raw output is validated strictly by
//! [`parse_classification`]. [`QueryService`] then applies the refusal
//! taxonomy and answers from course data through `syl-lookup`.
//!
//! The classifier only routes. Facts always come from stored course data.

pub mod chitchat;
pub mod classifier;
pub mod error;
pub mod service;
pub mod validate;

pub use chitchat::ChitchatReplies;
pub use classifier::{Classifier, RawOutputClassifier};
pub use error::ClassifierError;
pub use service::{DEFAULT_MIN_CONFIDENCE, QueryService};
pub use validate::parse_classification;
