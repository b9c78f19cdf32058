//! Confidence-scored extraction from a parsed policy document.
//!
//! Each search is a pure function over a [`MarkdownDoc`]. A search that finds
//! nothing returns `None`; callers decide whether a hit's confidence is high
//! enough to trust.

mod coordinator;
mod due_dates;
mod instructors;
mod links;
mod policies;
mod tas;

use serde_json::{Map, Value};
use syl_core::{Answer, Intent, Slots};
use syl_facts::{AssessmentAliases, FieldNormalizer, Record};

use crate::parser::{MarkdownDoc, Table};

/// Default minimum number of list items before a TA section is trusted.
pub const DEFAULT_MIN_TA_ITEMS: usize = 3;

/// Default cap on links returned by an unfiltered links search.
pub const DEFAULT_MAX_LINKS: usize = 15;

/// One fallback extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackHit {
    pub answer: Answer,
    /// How far the extraction can be trusted, in `[0, 1]`.
    pub confidence: f64,
    /// Canonical records behind the answer, for write-back to a facts store.
    pub records: Vec<Record>,
}

impl FallbackHit {
    #[must_use]
    pub const fn new(answer: Answer, confidence: f64, records: Vec<Record>) -> Self {
        Self {
            answer,
            confidence,
            records,
        }
    }
}

/// Markdown fallback search, parameterized at construction.
#[derive(Debug, Clone)]
pub struct FallbackSearch {
    aliases: AssessmentAliases,
    normalizer: FieldNormalizer,
    min_ta_items: usize,
    max_links: usize,
}

impl Default for FallbackSearch {
    fn default() -> Self {
        Self::new(AssessmentAliases::default())
    }
}

impl FallbackSearch {
    #[must_use]
    pub fn new(aliases: AssessmentAliases) -> Self {
        Self {
            aliases,
            normalizer: FieldNormalizer::default(),
            min_ta_items: DEFAULT_MIN_TA_ITEMS,
            max_links: DEFAULT_MAX_LINKS,
        }
    }

    #[must_use]
    pub const fn with_min_ta_items(mut self, min: usize) -> Self {
        self.min_ta_items = min;
        self
    }

    #[must_use]
    pub const fn with_max_links(mut self, max: usize) -> Self {
        self.max_links = max;
        self
    }

    /// Search `doc` for `intent`. Intents without a markdown extraction
    /// always return `None`.
    #[must_use]
    pub fn search(&self, doc: &MarkdownDoc, intent: Intent, slots: &Slots) -> Option<FallbackHit> {
        let hit = match intent {
            Intent::DueDate => due_dates::search(self, doc, slots.assessment()),
            Intent::InstructorInfo => instructors::search(self, doc, slots.section()),
            Intent::Coordinator => coordinator::search(doc),
            Intent::TaList => tas::search(doc, self.min_ta_items),
            Intent::Links => links::search(doc, slots.link_type(), self.max_links),
            Intent::GeneralPolicy => policies::search(doc, slots.topic()),
            _ => None,
        };

        match &hit {
            Some(hit) => tracing::debug!(
                intent = %intent,
                source = doc.source(),
                confidence = hit.confidence,
                "markdown fallback produced a candidate"
            ),
            None => tracing::debug!(intent = %intent, source = doc.source(), "markdown fallback found nothing"),
        }
        hit
    }

    /// Turn a table row into a canonical record through the default field
    /// aliases, tagged with its pipe-joined quote and the document source.
    fn row_record(&self, intent: Intent, table: &Table, row: &[String], source: &str) -> Record {
        let raw: Map<String, Value> = table
            .normalized_headers()
            .into_iter()
            .zip(row)
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header, Value::String(cell.clone())))
            .collect();
        let mut record = self.normalizer.normalize_record(intent, &raw);
        record.insert("quote", Table::quote(row));
        record.insert("source", source);
        record
    }
}
