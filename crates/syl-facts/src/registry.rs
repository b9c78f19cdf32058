//! Course registry: display names -> facts and rules files.
//!
//! A course is stored as `<base>_facts.json` plus a companion prose document
//! `<base>_rules.md` in the data directory. Display names come from the
//! config's explicit registrations first, then from `_schema.course_name`
//! inside each discovered facts file, then from the file name itself
//! (`cpsc_330_facts.json` -> `CPSC 330`).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use syl_config::DataConfig;

use crate::error::FactsError;

const FACTS_SUFFIX: &str = "_facts.json";
const RULES_SUFFIX: &str = "_rules.md";

/// The files backing one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFiles {
    pub display_name: String,
    pub facts_path: PathBuf,
    pub rules_path: PathBuf,
}

impl CourseFiles {
    /// Derive the companion rules path from a facts path.
    #[must_use]
    pub fn from_facts_path(display_name: impl Into<String>, facts_path: PathBuf) -> Self {
        let rules_path = rules_path_for(&facts_path);
        Self {
            display_name: display_name.into(),
            facts_path,
            rules_path,
        }
    }

    /// File name of the facts store, used as a citation source.
    #[must_use]
    pub fn facts_name(&self) -> String {
        file_name(&self.facts_path)
    }

    /// File name of the prose policy document, used as a citation source.
    #[must_use]
    pub fn rules_name(&self) -> String {
        file_name(&self.rules_path)
    }
}

/// Registered courses for one data directory.
#[derive(Debug, Clone, Default)]
pub struct CourseRegistry {
    data_dir: PathBuf,
    courses: BTreeMap<String, String>,
    default_course: Option<String>,
}

impl CourseRegistry {
    /// An empty registry rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            courses: BTreeMap::new(),
            default_course: None,
        }
    }

    #[must_use]
    pub fn with_default_course(mut self, course: impl Into<String>) -> Self {
        self.default_course = Some(course.into());
        self
    }

    /// Register (or re-register) a course's facts file, relative to the data dir.
    pub fn register(&mut self, display_name: impl Into<String>, facts_file: impl Into<String>) {
        self.courses.insert(display_name.into(), facts_file.into());
    }

    /// Scan the configured data directory for `*_facts.json` files, then
    /// apply the config's explicit registrations on top.
    ///
    /// A missing data directory yields an empty registry rather than an error;
    /// every lookup then reports the course as unavailable.
    pub fn discover(config: &DataConfig) -> Result<Self, FactsError> {
        let mut registry = Self::new(config.dir.clone());
        if let Some(default) = config.default_course() {
            registry.default_course = Some(default.to_string());
        }

        match fs::read_dir(&config.dir) {
            Ok(entries) => {
                let mut files: Vec<String> = entries
                    .filter_map(Result::ok)
                    .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                    .filter(|name| name.ends_with(FACTS_SUFFIX))
                    .collect();
                files.sort();
                for file in files {
                    let display = declared_course_name(&config.dir.join(&file))
                        .unwrap_or_else(|| display_name_from_file(&file));
                    registry.courses.insert(display, file);
                }
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(dir = %config.dir.display(), "course data directory does not exist");
            }
            Err(source) => {
                return Err(FactsError::Io {
                    path: config.dir.clone(),
                    source,
                });
            }
        }

        for (display, file) in &config.courses {
            registry.courses.insert(display.clone(), file.clone());
        }

        tracing::debug!(courses = registry.courses.len(), "course registry built");
        Ok(registry)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Display names of every registered course, sorted.
    #[must_use]
    pub fn list_courses(&self) -> Vec<String> {
        self.courses.keys().cloned().collect()
    }

    /// Resolve a display name (case-insensitive, trimmed) to files whose
    /// facts store exists on disk.
    #[must_use]
    pub fn resolve_course_file(&self, display_name: &str) -> Option<CourseFiles> {
        let wanted = display_name.trim();
        let (name, file) = self
            .courses
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))?;

        let facts_path = self.data_dir.join(file);
        if !facts_path.is_file() {
            tracing::debug!(course = %name, path = %facts_path.display(), "registered facts file is missing");
            return None;
        }
        Some(CourseFiles::from_facts_path(name.clone(), facts_path))
    }

    /// Resolve a course, falling back to the default course when the
    /// requested one has no facts store.
    pub fn resolve_or_default(&self, course: Option<&str>) -> Result<CourseFiles, FactsError> {
        let requested = course.map(str::trim).filter(|c| !c.is_empty());

        if let Some(files) = requested.and_then(|c| self.resolve_course_file(c)) {
            return Ok(files);
        }

        if let Some(default) = self.default_course.as_deref() {
            if let Some(files) = self.resolve_course_file(default) {
                tracing::debug!(
                    requested = requested.unwrap_or("(none)"),
                    default = %files.display_name,
                    "falling back to default course"
                );
                return Ok(files);
            }
        }

        Err(FactsError::CourseUnavailable {
            course: requested.unwrap_or("(none)").to_string(),
        })
    }
}

/// `cpsc_330_facts.json` -> `cpsc_330_rules.md`; `mds.json` -> `mds_rules.md`.
fn rules_path_for(facts_path: &Path) -> PathBuf {
    let name = file_name(facts_path);
    let base = name
        .strip_suffix(FACTS_SUFFIX)
        .or_else(|| name.strip_suffix(".json"))
        .unwrap_or(&name);
    facts_path.with_file_name(format!("{base}{RULES_SUFFIX}"))
}

/// `cpsc_330_facts.json` -> `CPSC 330`.
fn display_name_from_file(file: &str) -> String {
    file.strip_suffix(FACTS_SUFFIX)
        .unwrap_or(file)
        .split('_')
        .filter(|part| !part.is_empty())
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The `_schema.course_name` a facts file declares for itself, if any.
fn declared_course_name(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&content).ok()?;
    value
        .get("_schema")?
        .get("course_name")?
        .as_str()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_names_derive_from_file_names() {
        assert_eq!(display_name_from_file("cpsc_330_facts.json"), "CPSC 330");
        assert_eq!(display_name_from_file("mds_facts.json"), "MDS");
    }

    #[test]
    fn rules_path_replaces_facts_suffix() {
        assert_eq!(
            rules_path_for(Path::new("data/cpsc_330_facts.json")),
            PathBuf::from("data/cpsc_330_rules.md")
        );
        assert_eq!(
            rules_path_for(Path::new("data/mds.json")),
            PathBuf::from("data/mds_rules.md")
        );
    }

    #[test]
    fn unknown_course_without_default_is_unavailable() {
        let registry = CourseRegistry::new("does-not-exist");
        let err = registry.resolve_or_default(Some("CPSC 330")).unwrap_err();
        assert!(err.is_course_unavailable());
        assert_eq!(err.to_string(), "no facts available for course 'CPSC 330'");
    }
}
