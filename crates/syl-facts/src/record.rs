//! A single normalized fact record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use syl_core::Citation;

/// Field name -> string value. Missing fields read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field. Missing fields are `""`.
    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map_or("", String::as_str)
    }

    /// Read a field, substituting `default` when it is missing or blank.
    #[must_use]
    pub fn get_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        match self.get(field).trim() {
            "" => default,
            value => value,
        }
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Cite this record: `text` is the displayed fact, the quote falls back to
    /// `text` when the record carries none.
    #[must_use]
    pub fn citation(&self, text: &str) -> Citation {
        Citation::new(text, self.get_or("quote", text), self.get("source"))
    }

    /// Convert back into a JSON object, e.g. for write-back.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Map<String, Value> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Render a stored scalar as a field value. Strings pass through, numbers and
/// booleans are stringified, anything else carries no usable value.
#[must_use]
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_fields_read_empty() {
        let record: Record = [("name", "Canvas")].into_iter().collect();
        assert_eq!(record.get("name"), "Canvas");
        assert_eq!(record.get("url"), "");
        assert_eq!(record.get_or("url", "?"), "?");
    }

    #[test]
    fn citation_quote_falls_back_to_text() {
        let record: Record = [("source", "x.md")].into_iter().collect();
        let citation = record.citation("Jan 12");
        assert_eq!(citation, Citation::new("Jan 12", "Jan 12", "x.md"));
    }

    #[test]
    fn scalars_stringify_and_containers_drop() {
        assert_eq!(scalar_to_string(&json!(201)), Some("201".to_string()));
        assert_eq!(scalar_to_string(&json!(true)), Some("true".to_string()));
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!(["a"])), None);
    }
}
