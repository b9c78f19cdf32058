//! Strict validation of raw classifier output.
//!
//! Model output is untrusted text. It is accepted only when it contains a
//! JSON object with a known intent, an object of slots, and a confidence in
//! `[0, 1]`. Anything else is rejected rather than repaired.

use serde_json::{Map, Value};
use syl_core::{Intent, IntentClassification, Slots};

const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Parse and validate classifier output. `None` means "refuse to guess".
#[must_use]
pub fn parse_classification(raw: &str) -> Option<IntentClassification> {
    let data = extract_object(raw)?;

    let intent: Intent = data.get("intent")?.as_str()?.trim().parse().ok()?;
    let slots = match data.get("slots") {
        None | Some(Value::Null) => Slots::default(),
        Some(Value::Object(raw_slots)) => slots_from(raw_slots),
        Some(_) => return None,
    };
    let confidence = match data.get("confidence") {
        None | Some(Value::Null) => DEFAULT_CONFIDENCE,
        Some(Value::Number(n)) => n.as_f64()?,
        Some(Value::String(s)) => s.trim().parse().ok()?,
        Some(_) => return None,
    };

    IntentClassification::new(intent, slots, confidence).ok()
}

/// Non-string slot values are dropped rather than coerced.
fn slots_from(raw: &Map<String, Value>) -> Slots {
    let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);
    Slots {
        assessment: text("assessment"),
        topic: text("topic"),
        role: text("role"),
        section: text("section"),
        link_type: text("link_type"),
    }
}

/// The first balanced `{...}` in the text that parses as a JSON object, else
/// the body of the first fenced code block.
fn extract_object(raw: &str) -> Option<Map<String, Value>> {
    [first_object(raw), fenced_block(raw)]
        .into_iter()
        .flatten()
        .find_map(|json| match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(data)) => Some(data),
            _ => None,
        })
}

fn first_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after = &text[open + 3..];
    let after = after.strip_prefix("json").unwrap_or(after);
    let close = after.find("```")?;
    let body = after[..close].trim();
    (!body.is_empty()).then_some(body)
}
