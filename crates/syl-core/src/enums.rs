//! Intent labels and query outcomes for Syllabus.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The string forms double as the default facts-store category keys and the
//! labels the external classifier must emit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

/// The classified purpose of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    DueDate,
    InstructorInfo,
    Coordinator,
    TaList,
    Links,
    GeneralPolicy,
    LectureSchedule,
    ReferenceMaterial,
    Greeting,
    Thanks,
    Goodbye,
    Help,
    OutOfScope,
}

impl Intent {
    /// Every intent the classifier may emit, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::DueDate,
        Self::InstructorInfo,
        Self::Coordinator,
        Self::TaList,
        Self::Links,
        Self::GeneralPolicy,
        Self::LectureSchedule,
        Self::ReferenceMaterial,
        Self::Greeting,
        Self::Thanks,
        Self::Goodbye,
        Self::Help,
        Self::OutOfScope,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "due_date",
            Self::InstructorInfo => "instructor_info",
            Self::Coordinator => "coordinator",
            Self::TaList => "ta_list",
            Self::Links => "links",
            Self::GeneralPolicy => "general_policy",
            Self::LectureSchedule => "lecture_schedule",
            Self::ReferenceMaterial => "reference_material",
            Self::Greeting => "greeting",
            Self::Thanks => "thanks",
            Self::Goodbye => "goodbye",
            Self::Help => "help",
            Self::OutOfScope => "out_of_scope",
        }
    }

    /// Whether the markdown fallback search has an implementation for this intent.
    #[must_use]
    pub const fn supports_fallback(self) -> bool {
        matches!(
            self,
            Self::DueDate
                | Self::InstructorInfo
                | Self::Coordinator
                | Self::TaList
                | Self::Links
                | Self::GeneralPolicy
        )
    }

    /// Conversational intents answered from canned replies, never from facts.
    #[must_use]
    pub const fn is_chitchat(self) -> bool {
        matches!(self, Self::Greeting | Self::Thanks | Self::Goodbye | Self::Help)
    }

    /// Intents whose answers point at the raw policy document instead of records.
    #[must_use]
    pub const fn is_pointer(self) -> bool {
        matches!(self, Self::LectureSchedule | Self::ReferenceMaterial)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == needle)
            .ok_or_else(|| CoreError::UnknownIntent(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// QueryOutcome
// ---------------------------------------------------------------------------

/// How the question pipeline disposed of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Answered from stored facts, with citations.
    Answered,
    /// Answered with a canned conversational reply.
    Chitchat,
    /// Nothing qualified; the generic contact message was returned.
    Fallback,
    /// Refused outright (unparseable input, missing course data, ...).
    Refused,
}

impl QueryOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Answered => "answered",
            Self::Chitchat => "chitchat",
            Self::Fallback => "fallback",
            Self::Refused => "refused",
        }
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_string_forms_roundtrip() {
        for intent in Intent::ALL {
            let parsed: Intent = intent.as_str().parse().expect("known intent");
            assert_eq!(parsed, intent);

            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.as_str()));
        }
    }

    #[test]
    fn unknown_intent_is_rejected() {
        let err = "weather".parse::<Intent>().unwrap_err();
        assert_eq!(err, CoreError::UnknownIntent("weather".to_string()));
    }

    #[test]
    fn fallback_support_excludes_pointer_and_refusal_intents() {
        assert!(Intent::DueDate.supports_fallback());
        assert!(Intent::GeneralPolicy.supports_fallback());
        assert!(!Intent::LectureSchedule.supports_fallback());
        assert!(!Intent::OutOfScope.supports_fallback());
        assert!(!Intent::Greeting.supports_fallback());
    }

    #[test]
    fn chitchat_family() {
        let chitchat: Vec<_> = Intent::ALL.into_iter().filter(|i| i.is_chitchat()).collect();
        assert_eq!(
            chitchat,
            vec![Intent::Greeting, Intent::Thanks, Intent::Goodbye, Intent::Help]
        );
    }
}
