//! Markdown policy document parser.
//!
//! Parsing happens once per document and produces plain data: sections,
//! pipe tables, and inline links. The fallback searches in
//! [`crate::fallback`] are pure functions over this intermediate form and
//! never look at raw lines.

use std::fs;
use std::path::Path;

use crate::error::MarkdownError;
use crate::helpers::{
    extract_inline_links, heading_level, heading_text, is_delimiter_row, is_fence, list_item_text,
    normalize_header, split_row, strip_links,
};

/// Heading level whose title labels the tables beneath it.
const TABLE_LABEL_LEVEL: u8 = 2;

/// A heading plus every line up to the next heading of the same or a
/// higher level (subsections included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub level: u8,
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    /// List item texts in this section, links reduced to their labels.
    #[must_use]
    pub fn list_items(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|line| list_item_text(line))
            .map(strip_links)
            .filter(|item| !item.is_empty())
            .collect()
    }

    /// The first block of prose: consecutive non-blank lines that are not
    /// headings or table rows, joined with spaces and stripped of links.
    #[must_use]
    pub fn first_paragraph(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        for line in &self.lines {
            let t = line.trim();
            let is_prose = !t.is_empty() && heading_level(t).is_none() && !t.starts_with('|');
            if is_prose {
                parts.push(strip_links(list_item_text(t).unwrap_or(t)));
            } else if !parts.is_empty() {
                break;
            }
        }
        let joined = parts.join(" ");
        (!joined.trim().is_empty()).then_some(joined)
    }

    /// Lowercased title words, punctuation trimmed.
    #[must_use]
    pub fn title_words(&self) -> Vec<String> {
        self.title
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect()
    }
}

/// A pipe table and the level-2 section label active where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub section: String,
    pub headers: Vec<String>,
    /// Data rows, each padded or truncated to `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Headers folded for matching (`Due Date` -> `due_date`).
    #[must_use]
    pub fn normalized_headers(&self) -> Vec<String> {
        self.headers.iter().map(|h| normalize_header(h)).collect()
    }

    /// Index of the first column whose normalized header satisfies `pred`.
    pub fn column(&self, pred: impl Fn(&str) -> bool) -> Option<usize> {
        self.normalized_headers().iter().position(|h| pred(h))
    }

    /// Index of the column whose normalized header is exactly one of `names`,
    /// preferring earlier names.
    #[must_use]
    pub fn column_named(&self, names: &[&str]) -> Option<usize> {
        let headers = self.normalized_headers();
        names
            .iter()
            .find_map(|name| headers.iter().position(|h| h == name))
    }

    #[must_use]
    pub fn section_contains_any(&self, keywords: &[&str]) -> bool {
        let label = self.section.to_lowercase();
        keywords.iter().any(|k| label.contains(k))
    }

    /// The full row, pipe-joined, as cited.
    #[must_use]
    pub fn quote(row: &[String]) -> String {
        row.join(" | ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

/// A parsed course policy document.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDoc {
    source: String,
    content: String,
    sections: Vec<Section>,
    tables: Vec<Table>,
    links: Vec<Link>,
}

impl MarkdownDoc {
    /// Read and parse a document; its file name becomes the citation source.
    pub fn load(path: &Path) -> Result<Self, MarkdownError> {
        let content = fs::read_to_string(path).map_err(|source| MarkdownError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self::parse(source, content))
    }

    #[must_use]
    pub fn parse(source: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines: Vec<&str> = content.lines().collect();
        let in_code = code_mask(&lines);

        let sections = split_sections(&lines, &in_code);
        let tables = extract_tables(&lines, &in_code);
        let links = lines
            .iter()
            .zip(&in_code)
            .filter(|(_, code)| !**code)
            .flat_map(|(line, _)| extract_inline_links(line))
            .map(|(text, url)| Link { text, url })
            .collect();

        Self {
            source: source.into(),
            content,
            sections,
            tables,
            links,
        }
    }

    /// Citation source for anything extracted from this document.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

/// `true` for lines inside (or delimiting) fenced code blocks.
fn code_mask(lines: &[&str]) -> Vec<bool> {
    let mut inside = false;
    lines
        .iter()
        .map(|line| {
            if is_fence(line) {
                inside = !inside;
                true
            } else {
                inside
            }
        })
        .collect()
}

fn split_sections(lines: &[&str], in_code: &[bool]) -> Vec<Section> {
    let headings: Vec<(usize, u8)> = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| !in_code[*i])
        .filter_map(|(i, line)| heading_level(line).map(|level| (i, level)))
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(n, &(start, level))| {
            let end = headings[n + 1..]
                .iter()
                .find(|(_, next_level)| *next_level <= level)
                .map_or(lines.len(), |(i, _)| *i);
            Section {
                level,
                title: heading_text(lines[start]),
                lines: lines[start + 1..end]
                    .iter()
                    .map(|l| (*l).to_string())
                    .collect(),
            }
        })
        .collect()
}

fn extract_tables(lines: &[&str], in_code: &[bool]) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut label = String::new();
    let mut i = 0usize;

    while i < lines.len() {
        let line = lines[i];
        if in_code[i] {
            i += 1;
            continue;
        }
        if heading_level(line) == Some(TABLE_LABEL_LEVEL) {
            label = heading_text(line);
        }
        if !line.trim_start().starts_with('|') {
            i += 1;
            continue;
        }

        let start = i;
        while i < lines.len() && !in_code[i] && lines[i].trim_start().starts_with('|') {
            i += 1;
        }
        if let Some(table) = parse_table(&label, &lines[start..i]) {
            tables.push(table);
        }
    }
    tables
}

fn parse_table(section: &str, block: &[&str]) -> Option<Table> {
    let (header, rest) = block.split_first()?;
    let (delimiter, body) = rest.split_first()?;
    if !is_delimiter_row(delimiter) {
        return None;
    }

    let headers: Vec<String> = split_row(header).iter().map(|h| strip_links(h)).collect();
    if headers.len() < 2 {
        return None;
    }

    let rows: Vec<Vec<String>> = body
        .iter()
        .map(|line| {
            let mut cells: Vec<String> = split_row(line).iter().map(|c| strip_links(c)).collect();
            cells.resize(headers.len(), String::new());
            cells
        })
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(Table {
        section: section.to_string(),
        headers,
        rows,
    })
}
