//! Field normalization: source record shapes -> canonical record shapes.
//!
//! Two layers apply, in order:
//! 1. the course's explicit `field_map[intent]` (`canonical -> source`), which
//!    renames source fields and consumes them;
//! 2. the built-in [`FieldAliases`] table, which fills canonical fields that
//!    are still missing from well-known alternative names, leaving the
//!    alternative in place.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use syl_core::Intent;

use crate::record::{Record, scalar_to_string};

/// Per-intent `canonical -> [alternative source names]`, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    table: BTreeMap<Intent, Vec<(String, Vec<String>)>>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self::from_entries([
            (Intent::DueDate, "assessment", &["item"][..]),
            (Intent::DueDate, "due_date", &["deadline", "due"][..]),
            (Intent::DueDate, "where_find", &["instructions", "where_to_find"][..]),
            (Intent::DueDate, "where_submit", &["submit_to", "where_to_submit"][..]),
            (Intent::InstructorInfo, "instructor", &["name"][..]),
            (Intent::InstructorInfo, "when", &["time"][..]),
            (Intent::InstructorInfo, "where", &["location"][..]),
            (Intent::InstructorInfo, "contact", &["email"][..]),
            (Intent::TaList, "name", &["ta"][..]),
            (Intent::Links, "name", &["title"][..]),
            (Intent::Links, "url", &["href"][..]),
        ])
    }
}

impl FieldAliases {
    /// A table with no aliases at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Intent, &'a str, &'a [&'a str])>,
    {
        let mut table: BTreeMap<Intent, Vec<(String, Vec<String>)>> = BTreeMap::new();
        for (intent, canonical, alternatives) in entries {
            table.entry(intent).or_default().push((
                canonical.to_string(),
                alternatives.iter().map(|a| (*a).to_string()).collect(),
            ));
        }
        Self { table }
    }

    /// The canonical field that `field` is a known alternative name for.
    #[must_use]
    pub fn canonical_for(&self, intent: Intent, field: &str) -> Option<&str> {
        self.for_intent(intent)
            .iter()
            .find(|(_, alternatives)| alternatives.iter().any(|alt| alt == field))
            .map(|(canonical, _)| canonical.as_str())
    }

    fn for_intent(&self, intent: Intent) -> &[(String, Vec<String>)] {
        self.table.get(&intent).map_or(&[], Vec::as_slice)
    }
}

/// Applies a course's `field_map` plus the built-in aliases to raw records.
#[derive(Debug, Clone, Default)]
pub struct FieldNormalizer {
    field_map: BTreeMap<String, BTreeMap<String, String>>,
    aliases: FieldAliases,
}

impl FieldNormalizer {
    #[must_use]
    pub const fn new(
        field_map: BTreeMap<String, BTreeMap<String, String>>,
        aliases: FieldAliases,
    ) -> Self {
        Self { field_map, aliases }
    }

    /// The course's explicit `canonical -> source` map for an intent.
    #[must_use]
    pub fn field_map(&self, intent: Intent) -> Option<&BTreeMap<String, String>> {
        self.field_map.get(intent.as_str()).filter(|m| !m.is_empty())
    }

    /// Normalize a raw category value. Anything but an array is treated as
    /// empty, and non-object entries are dropped.
    #[must_use]
    pub fn normalize(&self, intent: Intent, raw: &Value) -> Vec<Record> {
        let Value::Array(entries) = raw else {
            if !raw.is_null() {
                tracing::warn!(intent = %intent, "facts category is not a list; treating as empty");
            }
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| match entry {
                Value::Object(fields) => Some(self.normalize_record(intent, fields)),
                _ => {
                    tracing::debug!(intent = %intent, "dropping non-object facts record");
                    None
                }
            })
            .collect()
    }

    /// Normalize one raw record.
    #[must_use]
    pub fn normalize_record(&self, intent: Intent, raw: &Map<String, Value>) -> Record {
        let mut record = Record::new();

        match self.field_map(intent) {
            Some(map) => {
                for (canonical, source) in map {
                    if let Some(value) = raw.get(source).and_then(scalar_to_string) {
                        record.insert(canonical.clone(), value);
                    }
                }
                for (key, value) in raw {
                    let consumed = map.values().any(|source| source == key);
                    if consumed || record.contains(key) {
                        continue;
                    }
                    if let Some(value) = scalar_to_string(value) {
                        record.insert(key.clone(), value);
                    }
                }
            }
            None => {
                for (key, value) in raw {
                    if let Some(value) = scalar_to_string(value) {
                        record.insert(key.clone(), value);
                    }
                }
            }
        }

        for (canonical, alternatives) in self.aliases.for_intent(intent) {
            if record.contains(canonical) {
                continue;
            }
            let found = alternatives
                .iter()
                .find_map(|alt| raw.get(alt).and_then(scalar_to_string));
            if let Some(value) = found {
                record.insert(canonical.clone(), value);
            }
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn field_map(intent: &str, pairs: &[(&str, &str)]) -> BTreeMap<String, BTreeMap<String, String>> {
        let inner = pairs
            .iter()
            .map(|(c, s)| ((*c).to_string(), (*s).to_string()))
            .collect();
        BTreeMap::from([(intent.to_string(), inner)])
    }

    #[test]
    fn field_map_renames_without_duplicating_source() {
        let normalizer = FieldNormalizer::new(
            field_map("due_date", &[("due_date", "deadline")]),
            FieldAliases::none(),
        );
        let raw = json!([{"assessment": "hw1", "deadline": "Jan 12"}]);

        let records = normalizer.normalize(Intent::DueDate, &raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("due_date"), "Jan 12");
        assert!(!records[0].contains("deadline"));
        assert_eq!(records[0].get("assessment"), "hw1");
    }

    #[test]
    fn unmapped_keys_do_not_overwrite_canonical_fields() {
        let normalizer = FieldNormalizer::new(
            field_map("due_date", &[("due_date", "deadline")]),
            FieldAliases::none(),
        );
        let raw = json!([{"deadline": "Jan 12", "due_date": "stale"}]);

        let records = normalizer.normalize(Intent::DueDate, &raw);
        assert_eq!(records[0].get("due_date"), "Jan 12");
        assert_eq!(records[0].len(), 1);
    }

    #[test]
    fn field_map_for_other_intent_is_ignored() {
        let normalizer = FieldNormalizer::new(
            field_map("links", &[("url", "href")]),
            FieldAliases::none(),
        );
        let raw = json!([{"deadline": "Jan 12"}]);

        let records = normalizer.normalize(Intent::DueDate, &raw);
        assert_eq!(records[0].get("deadline"), "Jan 12");
    }

    #[test]
    fn non_list_category_is_empty() {
        let normalizer = FieldNormalizer::default();
        assert!(normalizer.normalize(Intent::Links, &json!({"name": "x"})).is_empty());
        assert!(normalizer.normalize(Intent::Links, &json!(null)).is_empty());
    }

    #[test]
    fn non_object_records_are_dropped() {
        let normalizer = FieldNormalizer::default();
        let raw = json!(["stray", 3, {"name": "Canvas"}]);
        let records = normalizer.normalize(Intent::Links, &raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("name"), "Canvas");
    }

    #[test]
    fn wrong_typed_fields_degrade_to_empty() {
        let normalizer = FieldNormalizer::default();
        let raw = json!([{"section": 201, "instructor": ["not", "a", "string"], "when": null}]);
        let records = normalizer.normalize(Intent::InstructorInfo, &raw);
        assert_eq!(records[0].get("section"), "201");
        assert_eq!(records[0].get("instructor"), "");
        assert_eq!(records[0].get("when"), "");
    }

    #[test]
    fn default_aliases_fill_missing_canonical_fields() {
        let normalizer = FieldNormalizer::default();
        let raw = json!([{"item": "hw2", "deadline": "Jan 19", "submit_to": "Gradescope"}]);
        let records = normalizer.normalize(Intent::DueDate, &raw);

        assert_eq!(records[0].get("assessment"), "hw2");
        assert_eq!(records[0].get("due_date"), "Jan 19");
        assert_eq!(records[0].get("where_submit"), "Gradescope");
        // alternatives stay in place; only canonical reads are guaranteed
        assert_eq!(records[0].get("deadline"), "Jan 19");
    }

    #[test]
    fn alternatives_name_their_canonical_field() {
        let aliases = FieldAliases::default();
        assert_eq!(aliases.canonical_for(Intent::DueDate, "where_to_submit"), Some("where_submit"));
        assert_eq!(aliases.canonical_for(Intent::DueDate, "due_date"), None);
        assert_eq!(aliases.canonical_for(Intent::Links, "where_to_submit"), None);
    }

    #[test]
    fn explicit_canonical_field_beats_alias() {
        let normalizer = FieldNormalizer::default();
        let raw = json!([{"name": "Canvas", "title": "Old title"}]);
        let records = normalizer.normalize(Intent::Links, &raw);
        assert_eq!(records[0].get("name"), "Canvas");
    }
}
