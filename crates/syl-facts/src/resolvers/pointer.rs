use syl_core::{Answer, Citation, Resolution};

/// Lecture schedules and reference material are not stored as records; point
/// at the course's raw policy document instead.
#[must_use]
pub fn resolve_pointer(document: &str) -> Resolution {
    Resolution::Found(Answer::new(
        format!("See the full lecture schedule and reference material in {document}."),
        vec![Citation::new(document, "Lecture schedule (tentative)", document)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_document_as_source() {
        let answer = resolve_pointer("cpsc_330_rules.md").into_answer();
        assert!(answer.text.contains("cpsc_330_rules.md"));
        assert_eq!(answer.citations[0].source, "cpsc_330_rules.md");
    }
}
