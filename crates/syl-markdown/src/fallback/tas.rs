use syl_core::{Answer, Citation};
use syl_facts::Record;

use super::FallbackHit;
use crate::parser::{MarkdownDoc, Section};

const CONFIDENCE: f64 = 0.9;
const QUOTED_NAMES: usize = 5;

fn is_ta_section(section: &Section) -> bool {
    section.title.to_lowercase().contains("teaching assistant")
        || section
            .title_words()
            .iter()
            .any(|word| word == "ta" || word == "tas")
}

/// List items of the first TA section, trusted only with at least
/// `min_items` names.
pub(super) fn search(doc: &MarkdownDoc, min_items: usize) -> Option<FallbackHit> {
    let section = doc.sections().iter().find(|s| is_ta_section(s))?;

    let names: Vec<String> = section
        .list_items()
        .iter()
        .filter(|item| !item.starts_with("http"))
        .map(|item| item.split('(').next().unwrap_or_default().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if names.len() < min_items {
        tracing::debug!(
            found = names.len(),
            required = min_items,
            "too few TA list items to trust"
        );
        return None;
    }

    let mut quote = names
        .iter()
        .take(QUOTED_NAMES)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() > QUOTED_NAMES {
        quote.push_str("...");
    }

    let records = names
        .iter()
        .map(|name| {
            [("name", name.as_str()), ("source", doc.source())]
                .into_iter()
                .collect::<Record>()
        })
        .collect();
    let answer = Answer::new(
        format!("TAs: {}", names.join(", ")),
        vec![Citation::new("TA list", quote, doc.source())],
    );
    Some(FallbackHit::new(answer, CONFIDENCE, records))
}
