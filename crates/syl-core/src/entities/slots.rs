use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named parameters extracted from a question. Every slot is optional and is
/// only ever used as a lookup key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Slots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl Slots {
    #[must_use]
    pub fn assessment(&self) -> Option<&str> {
        non_blank(self.assessment.as_deref())
    }

    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        non_blank(self.topic.as_deref())
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }

    /// Section numbers are compared literally, so the value is not trimmed.
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref().filter(|v| !v.trim().is_empty())
    }

    #[must_use]
    pub fn link_type(&self) -> Option<&str> {
        non_blank(self.link_type.as_deref())
    }

    /// The slots that carry a value, keyed by slot name.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        [
            ("assessment", self.assessment()),
            ("topic", self.topic()),
            ("role", self.role()),
            ("section", self.section()),
            ("link_type", self.link_type()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.to_string())))
        .collect()
    }
}

/// Blank slot values carry no lookup key.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_slots_read_as_absent() {
        let slots = Slots {
            assessment: Some("   ".into()),
            topic: Some(" grading ".into()),
            section: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(slots.assessment(), None);
        assert_eq!(slots.topic(), Some("grading"));
        assert_eq!(slots.section(), None);
    }

    #[test]
    fn section_is_kept_verbatim() {
        let slots = Slots {
            section: Some(" 201".into()),
            ..Default::default()
        };
        assert_eq!(slots.section(), Some(" 201"));
    }

    #[test]
    fn to_map_skips_missing_slots() {
        let slots = Slots {
            link_type: Some("canvas".into()),
            ..Default::default()
        };
        let map = slots.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("link_type").map(String::as_str), Some("canvas"));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let slots: Slots = serde_json::from_str(r#"{"assessment":"hw1"}"#).unwrap();
        assert_eq!(
            slots,
            Slots {
                assessment: Some("hw1".into()),
                ..Default::default()
            }
        );
    }
}
