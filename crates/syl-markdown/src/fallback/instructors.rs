use syl_core::{Answer, Intent};
use syl_facts::Record;

use super::{FallbackHit, FallbackSearch};
use crate::parser::{MarkdownDoc, Table};

const SECTION_KEYWORDS: &[&str] = &["instructor", "teaching"];
const EXACT_CONFIDENCE: f64 = 0.95;
const LISTING_CONFIDENCE: f64 = 0.9;

pub(super) fn search(
    search: &FallbackSearch,
    doc: &MarkdownDoc,
    section: Option<&str>,
) -> Option<FallbackHit> {
    let mut tables = doc
        .tables()
        .iter()
        .filter(|table| table.section_contains_any(SECTION_KEYWORDS));

    let Some(section) = section else {
        return tables.next().map(|table| listing(search, table, doc.source()));
    };

    tables.find_map(|table| {
        let column = table.column_named(&["section"])?;
        let row = table.rows.iter().find(|row| row[column] == section)?;
        let record = search.row_record(Intent::InstructorInfo, table, row, doc.source());
        let instructor = record.get("instructor");
        let text = format!(
            "Section {}: {} \u{2014} {} at {}. Contact: {}.",
            record.get("section"),
            instructor,
            record.get("when"),
            record.get("where"),
            record.get("contact"),
        );
        let answer = Answer::new(text, vec![record.citation(instructor)]);
        Some(FallbackHit::new(answer, EXACT_CONFIDENCE, vec![record]))
    })
}

fn listing(search: &FallbackSearch, table: &Table, source: &str) -> FallbackHit {
    let records: Vec<Record> = table
        .rows
        .iter()
        .map(|row| search.row_record(Intent::InstructorInfo, table, row, source))
        .collect();
    let lines: Vec<String> = records
        .iter()
        .map(|r| {
            format!(
                "Section {}: {}",
                r.get_or("section", "?"),
                r.get_or("instructor", "?")
            )
        })
        .collect();
    let citations = records
        .iter()
        .map(|r| r.citation(r.get_or("instructor", &table.section)))
        .collect();

    FallbackHit::new(
        Answer::new(format!("Instructors:\n{}", lines.join("\n")), citations),
        LISTING_CONFIDENCE,
        records,
    )
}
