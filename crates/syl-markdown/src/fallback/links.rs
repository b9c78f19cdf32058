use syl_core::{Answer, Citation};
use syl_facts::Record;
use syl_facts::resolvers::loosely_contains;

use super::FallbackHit;
use crate::parser::{Link, MarkdownDoc};

const MATCH_CONFIDENCE: f64 = 0.85;
const LISTING_CONFIDENCE: f64 = 0.8;

pub(super) fn search(doc: &MarkdownDoc, link_type: Option<&str>, max_links: usize) -> Option<FallbackHit> {
    let links = doc.links();
    if links.is_empty() || max_links == 0 {
        return None;
    }

    if let Some(link_type) = link_type {
        let matched = links
            .iter()
            .find(|l| loosely_contains(&l.text, link_type) || loosely_contains(&l.url, link_type));
        if let Some(link) = matched {
            let answer = Answer::new(
                format!("{}: {}", link.text, link.url),
                vec![citation(link, doc.source())],
            );
            return Some(FallbackHit::new(
                answer,
                MATCH_CONFIDENCE,
                vec![record(link, doc.source())],
            ));
        }
    }

    let listed = &links[..links.len().min(max_links)];
    let lines: Vec<String> = listed.iter().map(|l| format!("{}: {}", l.text, l.url)).collect();
    let answer = Answer::new(
        format!("Important links:\n{}", lines.join("\n")),
        listed.iter().map(|l| citation(l, doc.source())).collect(),
    );
    Some(FallbackHit::new(
        answer,
        LISTING_CONFIDENCE,
        listed.iter().map(|l| record(l, doc.source())).collect(),
    ))
}

fn citation(link: &Link, source: &str) -> Citation {
    Citation::new(&link.text, format!("[{}]({})", link.text, link.url), source)
}

fn record(link: &Link, source: &str) -> Record {
    [
        ("name", link.text.clone()),
        ("url", link.url.clone()),
        ("quote", format!("[{}]({})", link.text, link.url)),
        ("source", source.to_string()),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DOC: &str = "\
## Links

* [Canvas](https://canvas.ubc.ca)
* [Ed Discussion](https://edstem.org/ca/courses/1)
* [Gradescope](https://www.gradescope.ca)
";

    #[test]
    fn typed_search_returns_first_match() {
        let doc = MarkdownDoc::parse("x_rules.md", DOC);
        let hit = search(&doc, Some("ed_discussion"), 15).unwrap();
        assert_eq!(hit.answer.text, "Ed Discussion: https://edstem.org/ca/courses/1");
        assert_eq!(
            hit.answer.citations[0].quote,
            "[Ed Discussion](https://edstem.org/ca/courses/1)"
        );
        assert!((hit.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn unmatched_type_falls_back_to_listing() {
        let doc = MarkdownDoc::parse("x_rules.md", DOC);
        let hit = search(&doc, Some("piazza"), 15).unwrap();
        assert!(hit.answer.text.starts_with("Important links:\n"));
        assert!((hit.confidence - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn listing_is_capped() {
        let doc = MarkdownDoc::parse("x_rules.md", DOC);
        let hit = search(&doc, None, 2).unwrap();
        assert_eq!(
            hit.answer.text,
            "Important links:\nCanvas: https://canvas.ubc.ca\nEd Discussion: https://edstem.org/ca/courses/1"
        );
        assert_eq!(hit.records.len(), 2);
    }

    #[test]
    fn no_links_no_result() {
        let doc = MarkdownDoc::parse("x_rules.md", "## Links\nNone yet.\n");
        assert!(search(&doc, None, 15).is_none());
    }
}
