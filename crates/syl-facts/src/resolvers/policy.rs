use syl_core::{Answer, Resolution};

use super::loosely_contains;
use crate::record::Record;

const EMPTY_MESSAGE: &str = "No general policies in database for this course yet.";

/// Resolve a general policy by topic (substring of title or summary), or
/// list every policy title.
#[must_use]
pub fn resolve_general_policy(records: &[Record], topic: Option<&str>) -> Resolution {
    if records.is_empty() {
        return Resolution::Empty(Answer::uncited(EMPTY_MESSAGE));
    }

    let Some(topic) = topic else {
        return Resolution::Found(listing(records));
    };

    let matched = records.iter().find(|record| {
        loosely_contains(record.get("title"), topic) || loosely_contains(record.get("summary"), topic)
    });

    match matched {
        Some(record) => {
            let title = record.get("title");
            Resolution::Found(Answer::new(
                format!("{title}: {}", record.get("summary")),
                vec![record.citation(title)],
            ))
        }
        None => Resolution::NotFound(listing(records)),
    }
}

fn listing(records: &[Record]) -> Answer {
    let lines: Vec<String> = records
        .iter()
        .map(|record| format!("- {}", record.get("title")))
        .collect();
    let citations = records
        .iter()
        .map(|record| record.citation(record.get("title")))
        .collect();
    Answer::new(format!("Course policies:\n{}", lines.join("\n")), citations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policies() -> Vec<Record> {
        vec![
            [
                ("title", "Academic Concession"),
                ("summary", "Request a concession through the advising office."),
                ("quote", "Request a concession"),
                ("source", "mds_rules.md"),
            ]
            .into_iter()
            .collect(),
            [
                ("title", "Late Submissions"),
                ("summary", "Late work is not accepted without a concession."),
                ("source", "mds_rules.md"),
            ]
            .into_iter()
            .collect(),
        ]
    }

    #[test]
    fn topic_matches_title_first() {
        let answer = resolve_general_policy(&policies(), Some("academic_concession")).into_answer();
        assert!(answer.text.starts_with("Academic Concession: Request"));
        assert_eq!(answer.citations[0].quote, "Request a concession");
    }

    #[test]
    fn topic_matches_summary() {
        let answer = resolve_general_policy(&policies(), Some("late work")).into_answer();
        assert!(answer.text.starts_with("Late Submissions:"));
        // no quote stored: the title stands in
        assert_eq!(answer.citations[0].quote, "Late Submissions");
    }

    #[test]
    fn no_topic_lists_titles_with_one_citation_each() {
        let answer = resolve_general_policy(&policies(), None).into_answer();
        assert_eq!(
            answer.text,
            "Course policies:\n- Academic Concession\n- Late Submissions"
        );
        assert_eq!(answer.citations.len(), 2);
    }
}
