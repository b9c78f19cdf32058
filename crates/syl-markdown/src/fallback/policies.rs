use syl_core::Answer;
use syl_facts::Record;
use syl_facts::resolvers::loosely_contains;

use super::FallbackHit;
use crate::helpers::truncate_chars;
use crate::parser::MarkdownDoc;

const CONFIDENCE: f64 = 0.85;
const MAX_SUMMARY_CHARS: usize = 400;

/// First section (any level) whose title names the topic, summarized by its
/// first paragraph. There is no untargeted policy extraction.
pub(super) fn search(doc: &MarkdownDoc, topic: Option<&str>) -> Option<FallbackHit> {
    let topic = topic?;
    let (section, paragraph) = doc
        .sections()
        .iter()
        .filter(|s| loosely_contains(&s.title, topic))
        .find_map(|s| s.first_paragraph().map(|p| (s, p)))?;

    let summary = truncate_chars(&paragraph, MAX_SUMMARY_CHARS);
    let record: Record = [
        ("title", section.title.as_str()),
        ("summary", summary.as_str()),
        ("quote", summary.as_str()),
        ("source", doc.source()),
    ]
    .into_iter()
    .collect();
    let answer = Answer::new(
        format!("{}: {summary}", section.title),
        vec![record.citation(&section.title)],
    );
    Some(FallbackHit::new(answer, CONFIDENCE, vec![record]))
}
