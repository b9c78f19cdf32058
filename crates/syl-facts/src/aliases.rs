//! Assessment name normalization.

use std::collections::BTreeMap;

/// Maps loose assessment names (`Homework 1`, `midterm-2`, `quiz`) onto the
/// canonical identifiers used in facts stores.
///
/// Keys are stored in normalized form (lowercase, spaces and hyphens folded
/// to underscores), and every canonical value maps to itself, so
/// normalization is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentAliases {
    table: BTreeMap<String, String>,
}

impl Default for AssessmentAliases {
    fn default() -> Self {
        let mut table = BTreeMap::new();
        for n in 1..=9 {
            let canonical = format!("hw{n}");
            for alias in [
                format!("hw{n}"),
                format!("hw_{n}"),
                format!("homework{n}"),
                format!("homework_{n}"),
            ] {
                table.insert(alias, canonical.clone());
            }
        }
        for (alias, canonical) in [
            ("midterm1", "midterm_1"),
            ("midterm_1", "midterm_1"),
            ("midterm2", "midterm_2"),
            ("midterm_2", "midterm_2"),
            ("quiz", "syllabus_quiz"),
            ("syllabus_quiz", "syllabus_quiz"),
            ("final", "final_exam"),
            ("final_exam", "final_exam"),
        ] {
            table.insert(alias.to_string(), canonical.to_string());
        }
        Self { table }
    }
}

impl AssessmentAliases {
    /// Build from an explicit alias -> canonical table. Keys are folded the
    /// same way lookups are, and canonical names are added as their own
    /// aliases.
    #[must_use]
    pub fn from_table<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = BTreeMap::new();
        for (alias, canonical) in entries {
            let canonical = fold(canonical.as_ref());
            table.insert(fold(alias.as_ref()), canonical.clone());
            table.insert(canonical.clone(), canonical);
        }
        Self { table }
    }

    /// Normalize an assessment name. Blank input has no normal form.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let folded = fold(raw);
        if folded.is_empty() {
            return None;
        }
        Some(self.table.get(&folded).cloned().unwrap_or(folded))
    }

    /// Whether two assessment names normalize to the same identifier.
    #[must_use]
    pub fn same(&self, a: &str, b: &str) -> bool {
        match (self.normalize(a), self.normalize(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Lowercase, trim, and fold spaces and hyphens to underscores.
fn fold(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}
