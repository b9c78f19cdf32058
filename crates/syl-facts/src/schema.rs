//! Schema loader: one course's facts store plus its `_schema` overrides.
//!
//! A facts file is a JSON object of `category -> [record, ...]`. It may carry
//! a `_schema` block:
//!
//! ```json
//! {
//!   "_schema": {
//!     "course_name": "CPSC 330",
//!     "key_map":   { "due_date": "assignments" },
//!     "field_map": { "due_date": { "due_date": "deadline" } }
//!   },
//!   "assignments": [ { "assessment": "hw1", "deadline": "Jan 12" } ]
//! }
//! ```
//!
//! Keys beginning with `_` are metadata and never reach resolvers.

use std::collections::BTreeMap;
use std::fs;

use serde::Deserialize;
use serde_json::{Map, Value};
use syl_core::Intent;

use crate::error::FactsError;
use crate::normalizer::{FieldAliases, FieldNormalizer};
use crate::record::Record;
use crate::registry::CourseFiles;

/// Baseline schema data shared by every course, passed in at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDefaults {
    /// Intent name -> category key.
    pub key_map: BTreeMap<String, String>,
    pub field_aliases: FieldAliases,
}

impl Default for SchemaDefaults {
    fn default() -> Self {
        let key_map = [
            (Intent::DueDate, "due_dates"),
            (Intent::InstructorInfo, "instructors"),
            (Intent::Coordinator, "coordinator"),
            (Intent::TaList, "tas"),
            (Intent::Links, "links"),
            (Intent::GeneralPolicy, "general_policies"),
        ]
        .into_iter()
        .map(|(intent, key)| (intent.as_str().to_string(), key.to_string()))
        .collect();

        Self {
            key_map,
            field_aliases: FieldAliases::default(),
        }
    }
}

impl SchemaDefaults {
    /// Layer extra baseline key-map entries (e.g. from configuration) over
    /// the built-in ones.
    #[must_use]
    pub fn with_key_map_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        self.key_map
            .extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct SchemaBlock {
    #[serde(default)]
    key_map: BTreeMap<String, String>,
    #[serde(default)]
    field_map: BTreeMap<String, BTreeMap<String, String>>,
}

/// A loaded, schema-aware facts store for one course.
#[derive(Debug, Clone)]
pub struct CourseFacts {
    course: String,
    facts_name: String,
    document_name: String,
    categories: Map<String, Value>,
    key_map: BTreeMap<String, String>,
    normalizer: FieldNormalizer,
}

impl CourseFacts {
    /// Read and parse the facts file for `files`.
    pub fn load(files: &CourseFiles, defaults: &SchemaDefaults) -> Result<Self, FactsError> {
        let content = fs::read_to_string(&files.facts_path).map_err(|source| FactsError::Io {
            path: files.facts_path.clone(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|error| FactsError::Malformed {
                file: files.facts_name(),
                reason: error.to_string(),
            })?;

        Self::from_value(files, value, defaults)
    }

    /// Build from an already-parsed facts document.
    pub fn from_value(
        files: &CourseFiles,
        value: Value,
        defaults: &SchemaDefaults,
    ) -> Result<Self, FactsError> {
        let Value::Object(data) = value else {
            return Err(FactsError::Malformed {
                file: files.facts_name(),
                reason: "top-level value is not an object".to_string(),
            });
        };

        let schema = match data.get("_schema") {
            None | Some(Value::Null) => SchemaBlock::default(),
            Some(raw) => serde_json::from_value(raw.clone()).unwrap_or_else(|error| {
                tracing::warn!(
                    course = %files.display_name,
                    %error,
                    "ignoring malformed _schema block"
                );
                SchemaBlock::default()
            }),
        };

        let mut key_map = defaults.key_map.clone();
        key_map.extend(schema.key_map);

        let categories = data
            .into_iter()
            .filter(|(key, _)| !key.starts_with('_'))
            .collect();

        Ok(Self {
            course: files.display_name.clone(),
            facts_name: files.facts_name(),
            document_name: files.rules_name(),
            categories,
            key_map,
            normalizer: FieldNormalizer::new(schema.field_map, defaults.field_aliases.clone()),
        })
    }

    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    /// File name of the structured store.
    #[must_use]
    pub fn facts_name(&self) -> &str {
        &self.facts_name
    }

    /// File name of the companion prose document.
    #[must_use]
    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    /// The category key holding records for `intent`.
    #[must_use]
    pub fn category_key(&self, intent: Intent) -> &str {
        self.key_map
            .get(intent.as_str())
            .map_or(intent.as_str(), String::as_str)
    }

    /// Data category names (metadata keys excluded).
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    #[must_use]
    pub const fn normalizer(&self) -> &FieldNormalizer {
        &self.normalizer
    }

    /// Normalized records for `intent`, in stored order. Absent categories
    /// are empty. Records that name no `source` are attributed to the facts
    /// file itself.
    #[must_use]
    pub fn records(&self, intent: Intent) -> Vec<Record> {
        let Some(raw) = self.categories.get(self.category_key(intent)) else {
            return Vec::new();
        };

        let mut records = self.normalizer.normalize(intent, raw);
        for record in &mut records {
            if record.get("source").trim().is_empty() {
                record.insert("source", self.facts_name.clone());
            }
        }
        records
    }
}
