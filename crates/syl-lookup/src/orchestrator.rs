//! The lookup state machine: structured resolution, then markdown fallback.

use syl_config::{PromotionConfig, SylConfig};
use syl_core::{Answer, Intent, Slots};
use syl_facts::{
    AssessmentAliases, CourseFacts, CourseFiles, CourseRegistry, FactResolver, SchemaDefaults,
};
use syl_markdown::{FallbackSearch, extract_contact_email, fallback_message};

use crate::error::LookupError;
use crate::fallback::{FallbackSource, MarkdownFallback};

/// Minimum confidence a fallback candidate needs to replace a structured
/// miss, unless configured otherwise.
pub const DEFAULT_MIN_FALLBACK_CONFIDENCE: f64 = 0.8;

/// Answers `(intent, slots, course)` from the course's facts store, falling
/// back to its policy document.
///
/// Holds no per-course state: every call re-reads the files it needs.
pub struct Lookup {
    pub(crate) registry: CourseRegistry,
    pub(crate) schema: SchemaDefaults,
    pub(crate) resolver: FactResolver,
    pub(crate) fallback: Box<dyn FallbackSource>,
    pub(crate) min_fallback_confidence: f64,
    pub(crate) promotion: PromotionConfig,
}

impl Lookup {
    /// A lookup over `registry` with built-in defaults throughout.
    #[must_use]
    pub fn new(registry: CourseRegistry) -> Self {
        Self {
            registry,
            schema: SchemaDefaults::default(),
            resolver: FactResolver::default(),
            fallback: Box::new(MarkdownFallback::default()),
            min_fallback_confidence: DEFAULT_MIN_FALLBACK_CONFIDENCE,
            promotion: PromotionConfig::default(),
        }
    }

    /// Discover courses and apply every lookup-related setting.
    pub fn from_config(config: &SylConfig) -> Result<Self, LookupError> {
        let registry = CourseRegistry::discover(&config.data)?;
        let fallback = FallbackSearch::new(AssessmentAliases::default())
            .with_min_ta_items(config.lookup.min_ta_items)
            .with_max_links(config.lookup.max_fallback_links);

        Ok(Self {
            schema: SchemaDefaults::default().with_key_map_overrides(&config.lookup.key_map),
            fallback: Box::new(MarkdownFallback::new(fallback)),
            min_fallback_confidence: config.lookup.min_fallback_confidence,
            promotion: config.promotion.clone(),
            ..Self::new(registry)
        })
    }

    /// Replace the assessment alias table used by both the structured
    /// resolver and the default markdown fallback.
    #[must_use]
    pub fn with_aliases(mut self, aliases: AssessmentAliases) -> Self {
        self.fallback = Box::new(MarkdownFallback::new(FallbackSearch::new(aliases.clone())));
        self.resolver = FactResolver::new(aliases);
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl FallbackSource + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    #[must_use]
    pub const fn with_min_fallback_confidence(mut self, min: f64) -> Self {
        self.min_fallback_confidence = min;
        self
    }

    #[must_use]
    pub fn with_promotion(mut self, promotion: PromotionConfig) -> Self {
        self.promotion = promotion;
        self
    }

    #[must_use]
    pub const fn registry(&self) -> &CourseRegistry {
        &self.registry
    }

    #[must_use]
    pub fn list_courses(&self) -> Vec<String> {
        self.registry.list_courses()
    }

    /// Answer with citations, or an uncited/empty answer when nothing
    /// qualified.
    ///
    /// `out_of_scope` and the conversational intents are always `("", [])`,
    /// whatever the course. A course with no facts store (and no default to
    /// stand in) is a [`LookupError::is_course_unavailable`] error.
    pub fn lookup_facts(
        &self,
        intent: Intent,
        slots: &Slots,
        course: Option<&str>,
    ) -> Result<Answer, LookupError> {
        if intent == Intent::OutOfScope || intent.is_chitchat() {
            return Ok(Answer::empty());
        }

        let files = self.registry.resolve_or_default(course)?;
        let facts = CourseFacts::load(&files, &self.schema)?;
        let resolution = self.resolver.resolve(intent, &facts, slots);
        tracing::debug!(
            course = %files.display_name,
            intent = %intent,
            resolution = resolution.kind(),
            "structured lookup finished"
        );

        if !resolution.needs_fallback() || !intent.supports_fallback() {
            return Ok(resolution.into_answer());
        }
        Ok(self
            .accepted_fallback(&files, intent, slots)
            .unwrap_or_else(|| resolution.into_answer()))
    }

    fn accepted_fallback(&self, files: &CourseFiles, intent: Intent, slots: &Slots) -> Option<Answer> {
        let hit = self.fallback.search(files, intent, slots)?;
        if hit.confidence >= self.min_fallback_confidence {
            tracing::info!(
                course = %files.display_name,
                intent = %intent,
                confidence = hit.confidence,
                "answered from policy document"
            );
            Some(hit.answer)
        } else {
            tracing::debug!(
                course = %files.display_name,
                intent = %intent,
                confidence = hit.confidence,
                threshold = self.min_fallback_confidence,
                "fallback candidate below threshold"
            );
            None
        }
    }

    /// The generic "couldn't find it" message, naming the best contact
    /// address in the course's policy document when there is one. Never
    /// fails: an unknown course or unreadable document just drops the
    /// address.
    #[must_use]
    pub fn get_fallback_message(&self, course: Option<&str>) -> String {
        let email = self
            .registry
            .resolve_or_default(course)
            .ok()
            .and_then(|files| std::fs::read_to_string(&files.rules_path).ok())
            .and_then(|content| extract_contact_email(&content));
        fallback_message(email.as_deref())
    }

    pub(crate) fn load_facts(&self, files: &CourseFiles) -> Result<CourseFacts, LookupError> {
        Ok(CourseFacts::load(files, &self.schema)?)
    }
}

impl std::fmt::Debug for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lookup")
            .field("courses", &self.registry.list_courses())
            .field("min_fallback_confidence", &self.min_fallback_confidence)
            .field("promotion", &self.promotion)
            .finish_non_exhaustive()
    }
}

