//! Response types returned by the question pipeline.
//!
//! `QueryResponse` is the shape an outer transport (HTTP, CLI) serializes
//! for a single question.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Citation;
use crate::enums::{Intent, QueryOutcome};

/// Answer to one question, with mandatory citations for factual answers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QueryResponse {
    pub answer: String,
    pub citations: Vec<Citation>,
    pub intent: Intent,
    pub slots_used: BTreeMap<String, String>,
    pub outcome: QueryOutcome,
    pub refused: bool,
    pub refusal_reason: Option<String>,
}

impl QueryResponse {
    /// A refusal with a self-describing reason suitable for direct display.
    #[must_use]
    pub fn refusal(intent: Intent, slots_used: BTreeMap<String, String>, reason: impl Into<String>) -> Self {
        Self {
            answer: String::new(),
            citations: Vec::new(),
            intent,
            slots_used,
            outcome: QueryOutcome::Refused,
            refused: true,
            refusal_reason: Some(reason.into()),
        }
    }

    /// A non-refused reply of the given outcome.
    #[must_use]
    pub fn reply(
        intent: Intent,
        slots_used: BTreeMap<String, String>,
        outcome: QueryOutcome,
        answer: impl Into<String>,
        citations: Vec<Citation>,
    ) -> Self {
        Self {
            answer: answer.into(),
            citations,
            intent,
            slots_used,
            outcome,
            refused: false,
            refusal_reason: None,
        }
    }
}
