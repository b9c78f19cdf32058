use syl_core::{Answer, Intent};
use syl_facts::Record;

use super::{FallbackHit, FallbackSearch};
use crate::parser::{MarkdownDoc, Table};

const SECTION_KEYWORDS: &[&str] = &["due", "deliverable", "assessment"];
const EXACT_CONFIDENCE: f64 = 0.95;
const LISTING_CONFIDENCE: f64 = 0.9;

struct Columns {
    assessment: usize,
    due: usize,
}

fn columns(table: &Table) -> Option<Columns> {
    let assessment = table.column(|h| {
        h.contains("assessment") || h.contains("hw") || h.contains("quiz") || h.contains("item")
    })?;
    let due = table.column(|h| h.contains("due") || h.contains("date") || h.contains("deadline"))?;
    (assessment != due).then_some(Columns { assessment, due })
}

fn candidate_tables(doc: &MarkdownDoc) -> impl Iterator<Item = (&Table, Columns)> {
    doc.tables()
        .iter()
        .filter(|table| table.section_contains_any(SECTION_KEYWORDS))
        .filter_map(|table| columns(table).map(|cols| (table, cols)))
}

pub(super) fn search(
    search: &FallbackSearch,
    doc: &MarkdownDoc,
    assessment: Option<&str>,
) -> Option<FallbackHit> {
    match assessment {
        Some(assessment) => exact(search, doc, assessment),
        None => listing(search, doc),
    }
}

/// Normalized equality is tried across every candidate row before substring
/// matching, so `hw1` never lands on `hw10`.
fn exact(search: &FallbackSearch, doc: &MarkdownDoc, assessment: &str) -> Option<FallbackHit> {
    let wanted = assessment.to_lowercase();
    let equal = |cell: &str| search.aliases.same(cell, assessment);
    let contains = |cell: &str| cell.to_lowercase().contains(&wanted);

    let matchers: [&dyn Fn(&str) -> bool; 2] = [&equal, &contains];
    for matcher in matchers {
        for (table, cols) in candidate_tables(doc) {
            let Some(row) = table.rows.iter().find(|row| matcher(&row[cols.assessment])) else {
                continue;
            };
            let record = row_record(search, table, &cols, row, doc.source());
            let due = record.get("due_date");
            let answer = Answer::new(
                format!("{} is due {due}. (from course rules)", record.get("assessment")),
                vec![record.citation(due)],
            );
            return Some(FallbackHit::new(answer, EXACT_CONFIDENCE, vec![record]));
        }
    }
    None
}

fn listing(search: &FallbackSearch, doc: &MarkdownDoc) -> Option<FallbackHit> {
    let (table, cols) = candidate_tables(doc).next()?;

    let records: Vec<Record> = table
        .rows
        .iter()
        .map(|row| row_record(search, table, &cols, row, doc.source()))
        .collect();
    let lines: Vec<String> = records
        .iter()
        .map(|r| format!("{}: {}", r.get("assessment"), r.get("due_date")))
        .collect();
    let citations = records.iter().map(|r| r.citation(r.get("due_date"))).collect();

    Some(FallbackHit::new(
        Answer::new(format!("Deliverable due dates:\n{}", lines.join("\n")), citations),
        LISTING_CONFIDENCE,
        records,
    ))
}

/// The detected columns win over whatever the header aliases produced.
fn row_record(
    search: &FallbackSearch,
    table: &Table,
    cols: &Columns,
    row: &[String],
    source: &str,
) -> Record {
    let mut record = search.row_record(Intent::DueDate, table, row, source);
    record.insert("assessment", row[cols.assessment].clone());
    record.insert("due_date", row[cols.due].clone());
    record
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DOC: &str = "\
## Deliverable due dates

| Assessment | Due date | Where to find | Where to submit |
|---|---|---|---|
| hw10 | Apr 2 | GitHub | Gradescope |
| hw1 | Jan 12, 11:59 pm | GitHub | Gradescope |
| Midterm 1 | Feb 10 | Canvas | In person |

## Grading

| Component | Weight |
|---|---|
| hw | 50% |
";

    fn doc() -> MarkdownDoc {
        MarkdownDoc::parse("cpsc_330_rules.md", DOC)
    }

    #[test]
    fn exact_match_prefers_normalized_equality() {
        let hit = search(&FallbackSearch::default(), &doc(), Some("hw1")).unwrap();
        assert_eq!(hit.answer.text, "hw1 is due Jan 12, 11:59 pm. (from course rules)");
        assert!((hit.confidence - 0.95).abs() < f64::EPSILON);
        assert_eq!(hit.answer.citations[0].quote, "hw1 | Jan 12, 11:59 pm | GitHub | Gradescope");
        assert_eq!(hit.answer.citations[0].source, "cpsc_330_rules.md");
    }

    #[test]
    fn aliases_bridge_spelling() {
        let hit = search(&FallbackSearch::default(), &doc(), Some("midterm1")).unwrap();
        assert!(hit.answer.text.starts_with("Midterm 1 is due Feb 10."));
        let record = &hit.records[0];
        assert_eq!(record.get("where_submit"), "In person");
        assert_eq!(record.get("where_find"), "Canvas");
    }

    #[test]
    fn substring_match_is_the_second_pass() {
        let hit = search(&FallbackSearch::default(), &doc(), Some("midterm")).unwrap();
        assert!(hit.answer.text.starts_with("Midterm 1"));
    }

    #[test]
    fn unmatched_slot_finds_nothing() {
        assert!(search(&FallbackSearch::default(), &doc(), Some("hw7")).is_none());
    }

    #[test]
    fn listing_cites_every_row() {
        let hit = search(&FallbackSearch::default(), &doc(), None).unwrap();
        assert_eq!(
            hit.answer.text,
            "Deliverable due dates:\nhw10: Apr 2\nhw1: Jan 12, 11:59 pm\nMidterm 1: Feb 10"
        );
        assert_eq!(hit.answer.citations.len(), 3);
        assert!((hit.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn tables_outside_due_sections_are_ignored() {
        let doc = MarkdownDoc::parse("x.md", "## Grading\n| Assessment | Due |\n|---|---|\n| hw1 | Jan 1 |\n");
        assert!(search(&FallbackSearch::default(), &doc, Some("hw1")).is_none());
    }
}
