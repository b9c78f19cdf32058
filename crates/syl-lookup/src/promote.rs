//! Write-back of confident markdown extractions into a facts store.
//!
//! Promotion is never part of a read path. It runs only when explicitly
//! invoked and only when enabled at construction.

use std::fs;
use std::io::Write;

use serde_json::{Map, Value};
use syl_core::{Intent, Slots};
use syl_facts::{CourseFacts, CourseFiles, FieldAliases, Record};

use crate::error::LookupError;
use crate::orchestrator::Lookup;

/// What a promotion attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionOutcome {
    /// Promotion is switched off.
    Disabled,
    /// Nothing was written.
    Skipped { reason: String },
    /// `added` records were appended to the facts store.
    Promoted { added: usize },
}

impl PromotionOutcome {
    fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }
}

/// Only table extractions have a record shape faithful enough to store.
const fn promotable(intent: Intent) -> bool {
    matches!(intent, Intent::DueDate | Intent::InstructorInfo)
}

impl Lookup {
    /// Re-run the markdown fallback for `(intent, slots, course)` and append
    /// its records to the course's facts store when the extraction is a
    /// table match at or above the promotion threshold.
    pub fn promote(
        &self,
        intent: Intent,
        slots: &Slots,
        course: Option<&str>,
    ) -> Result<PromotionOutcome, LookupError> {
        if !self.promotion.enabled {
            return Ok(PromotionOutcome::Disabled);
        }
        if !promotable(intent) {
            return Ok(PromotionOutcome::skipped(format!(
                "{intent} has no table extraction to promote"
            )));
        }

        let files = self.registry.resolve_or_default(course)?;
        let Some(hit) = self.fallback.search(&files, intent, slots) else {
            return Ok(PromotionOutcome::skipped("policy document has no matching extraction"));
        };
        if hit.confidence < self.promotion.min_confidence {
            return Ok(PromotionOutcome::skipped(format!(
                "confidence {:.2} is below {:.2}",
                hit.confidence, self.promotion.min_confidence
            )));
        }
        if hit.records.is_empty() {
            return Ok(PromotionOutcome::skipped("extraction carried no records"));
        }

        let facts = self.load_facts(&files)?;
        let fresh = self.unseen_records(&facts, intent, hit.records);
        if fresh.is_empty() {
            return Ok(PromotionOutcome::skipped("records are already in the facts store"));
        }
        let added = append_records(&files, &facts, intent, &fresh, &self.schema.field_aliases)?;

        tracing::info!(
            course = %files.display_name,
            intent = %intent,
            added,
            "promoted policy document records to facts store"
        );
        Ok(PromotionOutcome::Promoted { added })
    }

    /// Candidates whose fact the store (or an earlier candidate) does not
    /// already hold.
    fn unseen_records(
        &self,
        facts: &CourseFacts,
        intent: Intent,
        candidates: Vec<Record>,
    ) -> Vec<Record> {
        let mut known = facts.records(intent);
        let mut fresh = Vec::new();
        for candidate in candidates {
            if known.iter().any(|stored| self.same_fact(intent, stored, &candidate)) {
                tracing::debug!(intent = %intent, quote = candidate.get("quote"), "fact already stored");
                continue;
            }
            known.push(candidate.clone());
            fresh.push(candidate);
        }
        fresh
    }

    /// Due dates are identified by assessment (through the alias table),
    /// instructors by literal section. An identical quote always matches.
    fn same_fact(&self, intent: Intent, stored: &Record, candidate: &Record) -> bool {
        let quote = candidate.get("quote");
        if !quote.is_empty() && stored.get("quote") == quote {
            return true;
        }
        match intent {
            Intent::DueDate => self
                .resolver
                .aliases()
                .same(stored.get("assessment"), candidate.get("assessment")),
            Intent::InstructorInfo => {
                let section = candidate.get("section");
                !section.is_empty() && stored.get("section") == section
            }
            _ => false,
        }
    }
}

/// Append `records` under the intent's category, writing canonical fields
/// through the course `field_map`. Header names the alias table already
/// folded into a canonical field are not written twice.
fn append_records(
    files: &CourseFiles,
    facts: &CourseFacts,
    intent: Intent,
    records: &[Record],
    aliases: &FieldAliases,
) -> Result<usize, LookupError> {
    let content = fs::read_to_string(&files.facts_path).map_err(|source| {
        syl_facts::FactsError::Io {
            path: files.facts_path.clone(),
            source,
        }
    })?;
    let mut document: Value = serde_json::from_str(&content)?;
    let Some(root) = document.as_object_mut() else {
        return Err(syl_facts::FactsError::Malformed {
            file: files.facts_name(),
            reason: "top-level value is not an object".to_string(),
        }
        .into());
    };

    let field_map = facts.normalizer().field_map(intent);
    let source_name = |canonical: &str| -> String {
        field_map
            .and_then(|map| map.get(canonical))
            .cloned()
            .unwrap_or_else(|| canonical.to_string())
    };

    let category = root
        .entry(facts.category_key(intent))
        .or_insert_with(|| Value::Array(Vec::new()));
    let Value::Array(entries) = category else {
        return Err(syl_facts::FactsError::Malformed {
            file: files.facts_name(),
            reason: format!("category '{}' is not a list", facts.category_key(intent)),
        }
        .into());
    };

    let promoted_at = chrono::Utc::now().to_rfc3339();
    for record in records {
        let mut entry: Map<String, Value> = record
            .iter()
            .filter(|(field, _)| {
                !aliases
                    .canonical_for(intent, field)
                    .is_some_and(|canonical| record.contains(canonical))
            })
            .map(|(field, value)| (source_name(field), Value::String(value.to_string())))
            .collect();
        entry.insert("promoted_at".to_string(), Value::String(promoted_at.clone()));
        entries.push(Value::Object(entry));
    }

    if !records.is_empty() {
        write_atomically(files, &document)?;
    }
    Ok(records.len())
}

/// Write through a temp file in the same directory, then rename over the
/// original.
fn write_atomically(files: &CourseFiles, document: &Value) -> Result<(), LookupError> {
    let path = &files.facts_path;
    let write_error = |source: std::io::Error| LookupError::Write {
        path: path.clone(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    let mut body = serde_json::to_string_pretty(document)?;
    body.push('\n');
    temp.write_all(body.as_bytes()).map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_table_intents_are_promotable() {
        assert!(promotable(Intent::DueDate));
        assert!(promotable(Intent::InstructorInfo));
        assert!(!promotable(Intent::TaList));
        assert!(!promotable(Intent::Links));
    }
}
