use syl_core::{Answer, Citation, Resolution};

use crate::record::Record;

const EMPTY_MESSAGE: &str = "No TA list in database for this course yet.";

/// Resolve the TA list as a single citation over every name.
///
/// An empty store is an [`Resolution::Empty`] outcome with an uncited
/// message, never an error.
#[must_use]
pub fn resolve_ta_list(records: &[Record], default_source: &str) -> Resolution {
    let names: Vec<&str> = records
        .iter()
        .map(|record| record.get("name").trim())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Resolution::Empty(Answer::uncited(EMPTY_MESSAGE));
    }

    let joined = names.join(", ");
    let source = records
        .first()
        .map(|record| record.get_or("source", default_source))
        .unwrap_or(default_source);
    Resolution::Found(Answer::new(
        format!("TAs: {joined}"),
        vec![Citation::new("TA list", joined, source)],
    ))
}
