use syl_core::{Answer, Resolution};

use crate::record::Record;

const EMPTY_MESSAGE: &str = "No instructor info in database for this course yet.";

/// Resolve the instructor for one section (exact string match), or list all.
#[must_use]
pub fn resolve_instructor(records: &[Record], section: Option<&str>) -> Resolution {
    if records.is_empty() {
        return Resolution::Empty(Answer::uncited(EMPTY_MESSAGE));
    }

    let Some(section) = section else {
        return Resolution::Found(listing(records));
    };

    match records.iter().find(|record| record.get("section") == section) {
        Some(record) => {
            let instructor = record.get("instructor");
            let text = format!(
                "Section {}: {} \u{2014} {} at {}. Contact: {}.",
                record.get("section"),
                instructor,
                record.get("when"),
                record.get("where"),
                record.get("contact"),
            );
            Resolution::Found(Answer::new(text, vec![record.citation(instructor)]))
        }
        None => Resolution::NotFound(listing(records)),
    }
}

fn listing(records: &[Record]) -> Answer {
    let mut lines = Vec::with_capacity(records.len());
    let mut citations = Vec::with_capacity(records.len());
    for record in records {
        let instructor = record.get("instructor");
        lines.push(format!(
            "Section {}: {} ({}, {})",
            record.get("section"),
            instructor,
            record.get("when"),
            record.get("where"),
        ));
        citations.push(record.citation(instructor));
    }
    Answer::new(format!("Instructors:\n{}", lines.join("\n")), citations)
}
