use syl_core::{Answer, Resolution};

use crate::aliases::AssessmentAliases;
use crate::record::Record;

const EMPTY_MESSAGE: &str = "No due dates in database for this course yet.";

/// Resolve a due date for one assessment, or list every deliverable.
#[must_use]
pub fn resolve_due_date(
    records: &[Record],
    assessment: Option<&str>,
    aliases: &AssessmentAliases,
) -> Resolution {
    if records.is_empty() {
        return Resolution::Empty(Answer::uncited(EMPTY_MESSAGE));
    }

    let Some(assessment) = assessment else {
        return Resolution::Found(listing(records));
    };

    let wanted = aliases.normalize(assessment);
    let matched = records
        .iter()
        .find(|record| aliases.normalize(record.get("assessment")) == wanted);

    match matched {
        Some(record) => Resolution::Found(single(record)),
        None => Resolution::NotFound(listing(records)),
    }
}

fn single(record: &Record) -> Answer {
    let due = record.get("due_date");
    let mut text = format!(
        "{} is due {}. Find it: {}. Submit: {}.",
        record.get("assessment"),
        due,
        record.get("where_find"),
        record.get("where_submit"),
    );
    let note = record.get("note").trim();
    if !note.is_empty() {
        text = format!("{text} Note: {note}.");
    }
    Answer::new(text, vec![record.citation(due)])
}

fn listing(records: &[Record]) -> Answer {
    let mut lines = Vec::with_capacity(records.len());
    let mut citations = Vec::with_capacity(records.len());
    for record in records {
        let due = record.get_or("due_date", "?");
        lines.push(format!(
            "{}: {} ({})",
            record.get_or("assessment", "?"),
            due,
            record.get_or("where_submit", "?"),
        ));
        citations.push(record.citation(due));
    }
    Answer::new(format!("Deliverable due dates:\n{}", lines.join("\n")), citations)
}
