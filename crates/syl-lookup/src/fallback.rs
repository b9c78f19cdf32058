//! Where markdown fallback candidates come from.

use std::io::ErrorKind;

use syl_core::{Intent, Slots};
use syl_facts::CourseFiles;
use syl_markdown::{FallbackHit, FallbackSearch, MarkdownDoc, MarkdownError};

/// Produces a fallback candidate for a course, or nothing.
pub trait FallbackSource: Send + Sync {
    fn search(&self, course: &CourseFiles, intent: Intent, slots: &Slots) -> Option<FallbackHit>;
}

/// Reads the course's companion policy document on every call and runs the
/// markdown extractions over it.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFallback {
    search: FallbackSearch,
}

impl MarkdownFallback {
    #[must_use]
    pub const fn new(search: FallbackSearch) -> Self {
        Self { search }
    }
}

impl FallbackSource for MarkdownFallback {
    fn search(&self, course: &CourseFiles, intent: Intent, slots: &Slots) -> Option<FallbackHit> {
        match MarkdownDoc::load(&course.rules_path) {
            Ok(doc) => self.search.search(&doc, intent, slots),
            Err(MarkdownError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(course = %course.display_name, "no policy document for course");
                None
            }
            Err(error) => {
                tracing::warn!(course = %course.display_name, %error, "skipping unreadable policy document");
                None
            }
        }
    }
}
