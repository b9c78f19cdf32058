use syl_core::Answer;
use syl_facts::Record;

use super::FallbackHit;
use crate::helpers::{extract_emails, strip_links};
use crate::parser::MarkdownDoc;

const CONFIDENCE: f64 = 0.9;

/// First section titled with "coordinator"; within it, the first line naming
/// an email that reads as `Name (email)`.
pub(super) fn search(doc: &MarkdownDoc) -> Option<FallbackHit> {
    let section = doc
        .sections()
        .iter()
        .find(|s| s.title.to_lowercase().contains("coordinator"))?;

    section
        .lines
        .iter()
        .filter(|line| line.contains('@') || line.to_lowercase().contains("email"))
        .find_map(|line| {
            let (name, email) = name_and_email(line)?;
            let quote = line.trim();
            let record: Record = [
                ("name", name.as_str()),
                ("email", email.as_str()),
                ("quote", quote),
                ("source", doc.source()),
            ]
            .into_iter()
            .collect();
            let answer = Answer::new(
                format!("Course coordinator: {name} ({email})."),
                vec![record.citation(&name)],
            );
            Some(FallbackHit::new(answer, CONFIDENCE, vec![record]))
        })
}

/// Loose `Name (someone@example.org)` reading: the name is the run of
/// letters and spaces right before the parenthesis.
fn name_and_email(line: &str) -> Option<(String, String)> {
    let plain: String = strip_links(line)
        .chars()
        .filter(|c| !matches!(c, '*' | '`'))
        .collect();

    let mut rest = plain.as_str();
    while let Some(open) = rest.find('(') {
        let close = open + rest[open..].find(')')?;
        let email = extract_emails(&rest[open + 1..close]).into_iter().next();
        let name: String = rest[..open]
            .chars()
            .rev()
            .take_while(|c| c.is_alphabetic() || c.is_whitespace())
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        let name = name.trim();
        if let Some(email) = email {
            if !name.is_empty() {
                return Some((name.to_string(), email));
            }
        }
        rest = &rest[close + 1..];
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Contact: Jo Park (jo.park@ubc.ca)", Some(("Jo Park", "jo.park@ubc.ca")))]
    #[case("- **Jo Park** (cpsc330-admin@cs.ubc.ca)", Some(("Jo Park", "cpsc330-admin@cs.ubc.ca")))]
    #[case("Email the coordinator at jo@ubc.ca", None)]
    #[case("Jo Park (office ICCS 123)", None)]
    fn reads_loose_name_email_pairs(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
        let expected = expected.map(|(n, e)| (n.to_string(), e.to_string()));
        assert_eq!(name_and_email(line), expected);
    }

    #[test]
    fn finds_coordinator_in_its_section() {
        let doc = MarkdownDoc::parse(
            "cpsc_330_rules.md",
            "## Course coordinator\n\nReach out for extensions.\n\nEmail: Jo Park (jo@cs.ubc.ca)\n\n## Other\nAl Smith (al@ubc.ca)\n",
        );
        let hit = search(&doc).unwrap();
        assert_eq!(hit.answer.text, "Course coordinator: Jo Park (jo@cs.ubc.ca).");
        assert_eq!(hit.answer.citations[0].quote, "Email: Jo Park (jo@cs.ubc.ca)");
        assert_eq!(hit.answer.citations[0].source, "cpsc_330_rules.md");
        assert!((hit.confidence - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn no_coordinator_heading_means_no_result() {
        let doc = MarkdownDoc::parse("x.md", "## Staff\nJo Park (jo@ubc.ca)\n");
        assert!(search(&doc).is_none());
    }
}
