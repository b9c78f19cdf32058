use syl_core::{Answer, Resolution};

use super::loosely_contains;
use crate::record::Record;

const EMPTY_MESSAGE: &str = "No links in database for this course yet.";

/// Resolve a link by type (substring of name or URL), or list all links.
#[must_use]
pub fn resolve_links(records: &[Record], link_type: Option<&str>) -> Resolution {
    if records.is_empty() {
        return Resolution::Empty(Answer::uncited(EMPTY_MESSAGE));
    }

    let Some(link_type) = link_type else {
        return Resolution::Found(listing(records));
    };

    let matched = records.iter().find(|record| {
        loosely_contains(record.get("name"), link_type) || loosely_contains(record.get("url"), link_type)
    });

    match matched {
        Some(record) => {
            let name = record.get("name");
            Resolution::Found(Answer::new(
                format!("{name}: {}", record.get("url")),
                vec![record.citation(name)],
            ))
        }
        None => Resolution::NotFound(listing(records)),
    }
}

fn listing(records: &[Record]) -> Answer {
    let lines: Vec<String> = records
        .iter()
        .map(|record| format!("{}: {}", record.get("name"), record.get("url")))
        .collect();
    let citations = records
        .iter()
        .map(|record| record.citation(record.get("name")))
        .collect();
    Answer::new(format!("Important links:\n{}", lines.join("\n")), citations)
}
