use syl_core::{Answer, Resolution};

use crate::record::Record;

const EMPTY_MESSAGE: &str = "No coordinator info in database for this course yet.";

/// Resolve the course coordinator. Courses have a single coordinator, so only
/// the first record is used.
#[must_use]
pub fn resolve_coordinator(records: &[Record]) -> Resolution {
    let Some(record) = records.first() else {
        return Resolution::Empty(Answer::uncited(EMPTY_MESSAGE));
    };

    let name = record.get("name");
    let mut text = format!("Course coordinator: {} ({}).", name, record.get("email"));
    let purpose = record.get("purpose").trim();
    if !purpose.is_empty() {
        text = format!("{text} Contact for: {purpose}.");
    }
    Resolution::Found(Answer::new(text, vec![record.citation(name)]))
}
