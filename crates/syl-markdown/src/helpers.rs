//! Line-level scanners shared by the parser and the fallback searches.

/// ATX heading level (`#` to `######` followed by a space or end of line).
pub(crate) fn heading_level(line: &str) -> Option<u8> {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    match trimmed[hashes..].chars().next() {
        None | Some(' ' | '\t') => u8::try_from(hashes).ok(),
        Some(_) => None,
    }
}

/// Heading text without its markers. A closing `#` run is a marker only
/// when whitespace separates it from the text (`## C#` keeps its `#`).
pub(crate) fn heading_text(line: &str) -> String {
    let text = line.trim().trim_start_matches('#').trim();
    let body = text.trim_end_matches('#');
    if body.is_empty() || body.ends_with(char::is_whitespace) {
        body.trim_end().to_string()
    } else {
        text.to_string()
    }
}

/// Text of a `- ` / `* ` / `+ ` list item, or `None` for any other line.
pub(crate) fn list_item_text(line: &str) -> Option<&str> {
    let t = line.trim_start();
    t.strip_prefix("- ")
        .or_else(|| t.strip_prefix("* "))
        .or_else(|| t.strip_prefix("+ "))
        .map(str::trim)
}

pub(crate) fn is_fence(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with("```") || t.starts_with("~~~")
}

/// Lowercase a table header and fold whitespace to `_` ("Due Date" -> `due_date`).
pub(crate) fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Split a `| a | b |` row into trimmed cells.
pub(crate) fn split_row(line: &str) -> Vec<String> {
    let t = line.trim();
    let t = t.strip_prefix('|').unwrap_or(t);
    let t = t.strip_suffix('|').unwrap_or(t);
    t.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// `|---|:---:|` style delimiter row.
pub(crate) fn is_delimiter_row(line: &str) -> bool {
    let t = line.trim();
    t.contains('-') && t.chars().all(|c| matches!(c, '|' | '-' | ':' | ' ' | '\t'))
}

/// Inline `[label](url)` links, images excluded.
pub(crate) fn extract_inline_links(line: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let bytes = line.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        if i > 0 && bytes[i - 1] == b'!' {
            i += 1;
            continue;
        }

        let Some(close_bracket) = line[i + 1..].find(']') else {
            break;
        };
        let close_bracket = i + 1 + close_bracket;
        if close_bracket + 1 >= bytes.len() || bytes[close_bracket + 1] != b'(' {
            i += 1;
            continue;
        }

        let Some(close_paren_rel) = line[close_bracket + 2..].find(')') else {
            i += 1;
            continue;
        };
        let close_paren = close_bracket + 2 + close_paren_rel;

        let label = line[i + 1..close_bracket].trim().to_string();
        let url = line[close_bracket + 2..close_paren].trim().to_string();
        if !label.is_empty() && !url.is_empty() {
            out.push((label, url));
        }
        i = close_paren + 1;
    }
    out
}

/// Replace `[label](url)` with `label`. Images are left untouched.
pub(crate) fn strip_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let is_image = open > 0 && rest.as_bytes()[open - 1] == b'!';
        let link = rest[open + 1..].find("](").and_then(|close| {
            let close = open + 1 + close;
            rest[close + 2..]
                .find(')')
                .map(|paren| (close, close + 2 + paren))
        });
        match link {
            Some((close, paren)) if !is_image && !rest[open + 1..close].contains('[') => {
                out.push_str(&rest[..open]);
                out.push_str(&rest[open + 1..close]);
                rest = &rest[paren + 1..];
            }
            _ => {
                out.push_str(&rest[..=open]);
                rest = &rest[open + 1..];
            }
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

/// Email addresses in `text`, in order of appearance. `mailto:` prefixes are
/// not part of the local part, so they fall out naturally.
pub(crate) fn extract_emails(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (at, _) in text.match_indices('@') {
        let local_start = text[..at]
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_local_char(*c))
            .last()
            .map_or(at, |(i, _)| i);
        let domain_end = text[at + 1..]
            .char_indices()
            .take_while(|(_, c)| is_domain_char(*c))
            .last()
            .map_or(at + 1, |(i, c)| at + 1 + i + c.len_utf8());

        let local = text[local_start..at].trim_start_matches('.');
        let domain = text[at + 1..domain_end].trim_end_matches(['.', '-']);
        if local.is_empty() || !valid_domain(domain) {
            continue;
        }
        out.push(format!("{local}@{domain}"));
    }
    out
}

fn valid_domain(domain: &str) -> bool {
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Truncate to at most `max` characters on a char boundary, marking the cut.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("## Due dates", Some(2))]
    #[case("# Title", Some(1))]
    #[case("###### deep", Some(6))]
    #[case("#hashtag", None)]
    #[case("####### seven", None)]
    #[case("plain", None)]
    fn heading_levels(#[case] line: &str, #[case] expected: Option<u8>) {
        assert_eq!(heading_level(line), expected);
    }

    #[test]
    fn heading_text_drops_markers() {
        assert_eq!(heading_text("## Teaching Team ##"), "Teaching Team");
    }

    #[rstest]
    #[case("## C#", "C#")]
    #[case("### F# and C# ###", "F# and C#")]
    #[case("## Notes #", "Notes")]
    #[case("## ##", "")]
    fn heading_text_keeps_hashes_inside_titles(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(heading_text(line), expected);
    }

    #[test]
    fn headers_fold_case_and_spacing() {
        assert_eq!(normalize_header("  Due   Date "), "due_date");
        assert_eq!(normalize_header("Assessment"), "assessment");
    }

    #[test]
    fn rows_split_into_cells() {
        assert_eq!(split_row("| hw1 | Jan 12 |"), vec!["hw1", "Jan 12"]);
        assert_eq!(split_row("a | | c"), vec!["a", "", "c"]);
        assert!(is_delimiter_row("|---|:---:|"));
        assert!(!is_delimiter_row("| hw1 | Jan 12 |"));
    }

    #[test]
    fn links_skip_images() {
        let line = "See ![logo](a.png) and [Canvas](https://canvas.ubc.ca) or [Ed](https://edstem.org).";
        assert_eq!(
            extract_inline_links(line),
            vec![
                ("Canvas".to_string(), "https://canvas.ubc.ca".to_string()),
                ("Ed".to_string(), "https://edstem.org".to_string()),
            ]
        );
    }

    #[test]
    fn strip_links_keeps_labels() {
        assert_eq!(
            strip_links("Submit on [Gradescope](https://gradescope.ca) by Friday."),
            "Submit on Gradescope by Friday."
        );
        assert_eq!(strip_links("[broken](no close"), "[broken](no close");
    }

    #[test]
    fn emails_from_plain_text_and_mailto() {
        let text = "Write to cpsc330-admin@cs.ubc.ca or [us](mailto:info-mds@stat.ubc.ca). Not: a@b, @x.com.";
        assert_eq!(
            extract_emails(text),
            vec!["cpsc330-admin@cs.ubc.ca", "info-mds@stat.ubc.ca"]
        );
    }

    #[test]
    fn truncation_respects_limit() {
        assert_eq!(truncate_chars("short", 10), "short");
        let long = "word ".repeat(20);
        assert!(truncate_chars(&long, 20).chars().count() <= 20);
        assert!(truncate_chars(&long, 20).ends_with("..."));
    }
}
