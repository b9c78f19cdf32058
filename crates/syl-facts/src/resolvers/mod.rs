//! Structured fact resolvers, one per intent.
//!
//! Every resolver is a pure function over normalized records and returns a
//! [`Resolution`]. Among structured candidates the first match in stored
//! order wins; nothing is ranked.

mod coordinator;
mod due_date;
mod instructor;
mod links;
mod policy;
mod pointer;
mod ta_list;

pub use coordinator::resolve_coordinator;
pub use due_date::resolve_due_date;
pub use instructor::resolve_instructor;
pub use links::resolve_links;
pub use policy::resolve_general_policy;
pub use pointer::resolve_pointer;
pub use ta_list::resolve_ta_list;

use syl_core::{Answer, Intent, Resolution, Slots};

use crate::aliases::AssessmentAliases;
use crate::schema::CourseFacts;

/// Dispatches an intent to its resolver.
#[derive(Debug, Clone, Default)]
pub struct FactResolver {
    aliases: AssessmentAliases,
}

impl FactResolver {
    #[must_use]
    pub const fn new(aliases: AssessmentAliases) -> Self {
        Self { aliases }
    }

    #[must_use]
    pub const fn aliases(&self) -> &AssessmentAliases {
        &self.aliases
    }

    /// Resolve `intent` against a course's facts.
    ///
    /// Chitchat and `out_of_scope` carry no facts and resolve to an empty
    /// answer.
    #[must_use]
    pub fn resolve(&self, intent: Intent, facts: &CourseFacts, slots: &Slots) -> Resolution {
        let records = facts.records(intent);
        match intent {
            Intent::DueDate => resolve_due_date(&records, slots.assessment(), &self.aliases),
            Intent::InstructorInfo => resolve_instructor(&records, slots.section()),
            Intent::Coordinator => resolve_coordinator(&records),
            Intent::TaList => resolve_ta_list(&records, facts.facts_name()),
            Intent::Links => resolve_links(&records, slots.link_type()),
            Intent::GeneralPolicy => resolve_general_policy(&records, slots.topic()),
            Intent::LectureSchedule | Intent::ReferenceMaterial => {
                resolve_pointer(facts.document_name())
            }
            Intent::Greeting
            | Intent::Thanks
            | Intent::Goodbye
            | Intent::Help
            | Intent::OutOfScope => Resolution::Empty(Answer::empty()),
        }
    }
}

/// Case-insensitive substring test where `_` and `-` in the needle also
/// match spaces (`ed_discussion` finds "Ed Discussion").
#[must_use]
pub fn loosely_contains(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.to_lowercase();
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return false;
    }
    if haystack.contains(&needle) {
        return true;
    }
    let spaced: String = needle
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();
    spaced != needle && haystack.contains(&spaced)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;

    use super::*;
    use crate::registry::CourseFiles;
    use crate::schema::SchemaDefaults;

    #[test]
    fn loose_containment() {
        assert!(loosely_contains("Canvas", "canvas"));
        assert!(loosely_contains("Ed Discussion forum", "ed_discussion"));
        assert!(!loosely_contains("Gradescope", "canvas"));
        assert!(!loosely_contains("anything", "  "));
    }

    #[test]
    fn conversational_intents_resolve_empty() {
        let files = CourseFiles::from_facts_path("X", PathBuf::from("x_facts.json"));
        let facts = CourseFacts::from_value(&files, json!({}), &SchemaDefaults::default()).unwrap();
        let resolver = FactResolver::default();
        for intent in [Intent::Greeting, Intent::OutOfScope] {
            let resolution = resolver.resolve(intent, &facts, &Slots::default());
            assert!(resolution.answer().is_empty());
        }
    }

    #[test]
    fn padded_section_slot_does_not_match() {
        let files = CourseFiles::from_facts_path("X", PathBuf::from("x_facts.json"));
        let facts = CourseFacts::from_value(
            &files,
            json!({"instructors": [{"section": "201", "instructor": "Ada"}]}),
            &SchemaDefaults::default(),
        )
        .unwrap();
        let resolver = FactResolver::default();
        let slots = |section: &str| Slots {
            section: Some(section.to_string()),
            ..Slots::default()
        };

        let exact = resolver.resolve(Intent::InstructorInfo, &facts, &slots("201"));
        assert!(!exact.needs_fallback());
        let padded = resolver.resolve(Intent::InstructorInfo, &facts, &slots(" 201"));
        assert!(padded.needs_fallback());
    }
}
