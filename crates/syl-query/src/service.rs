//! Question in, [`QueryResponse`] out.

use std::collections::BTreeMap;

use syl_config::SylConfig;
use syl_core::{Intent, QueryOutcome, QueryResponse};
use syl_lookup::{Lookup, LookupError};

use crate::chitchat::ChitchatReplies;
use crate::classifier::Classifier;

/// Default router confidence below which a classification is not trusted.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

const EMPTY_QUESTION: &str = "Empty question.";
const UNPARSEABLE: &str = "Could not understand the question classification. Refusing to guess.";
const OUT_OF_SCOPE: &str = "Question is out of scope for course policy.";
const UNREADABLE_COURSE: &str = "Course data could not be read.";

/// The full question pipeline: classify, then answer from course data or
/// refuse. Never fails; every failure is a self-describing refusal.
pub struct QueryService {
    lookup: Lookup,
    classifier: Box<dyn Classifier>,
    chitchat: ChitchatReplies,
    min_confidence: f64,
}

impl QueryService {
    #[must_use]
    pub fn new(lookup: Lookup, classifier: impl Classifier + 'static) -> Self {
        Self {
            lookup,
            classifier: Box::new(classifier),
            chitchat: ChitchatReplies::default(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    pub fn from_config(
        config: &SylConfig,
        classifier: impl Classifier + 'static,
    ) -> Result<Self, LookupError> {
        let lookup = Lookup::from_config(config)?;
        Ok(Self::new(lookup, classifier).with_min_confidence(config.router.min_confidence))
    }

    #[must_use]
    pub fn with_chitchat(mut self, chitchat: ChitchatReplies) -> Self {
        self.chitchat = chitchat;
        self
    }

    #[must_use]
    pub const fn with_min_confidence(mut self, min: f64) -> Self {
        self.min_confidence = min;
        self
    }

    #[must_use]
    pub const fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    /// Answer one question for an optional course context.
    #[must_use]
    pub fn answer(&self, question: &str, course: Option<&str>) -> QueryResponse {
        let question = question.trim();
        if question.is_empty() {
            return QueryResponse::refusal(Intent::OutOfScope, BTreeMap::new(), EMPTY_QUESTION);
        }
        let course = course.map(str::trim).filter(|c| !c.is_empty());

        let classification = match self.classifier.classify(question) {
            Ok(Some(classification)) => classification,
            Ok(None) => {
                tracing::warn!("classifier output failed validation");
                return QueryResponse::refusal(Intent::OutOfScope, BTreeMap::new(), UNPARSEABLE);
            }
            Err(error) => {
                tracing::warn!(%error, "classifier unavailable");
                return QueryResponse::refusal(
                    Intent::OutOfScope,
                    BTreeMap::new(),
                    format!("Router error: {error}"),
                );
            }
        };

        let intent = classification.intent;
        let slots_used = classification.slots.to_map();
        tracing::debug!(
            intent = %intent,
            confidence = classification.confidence,
            slots = ?slots_used,
            "question classified"
        );

        if classification.confidence < self.min_confidence {
            return self.fallback(intent, slots_used, course);
        }

        if let Some(reply) = self.chitchat.reply(intent) {
            return QueryResponse::reply(intent, slots_used, QueryOutcome::Chitchat, reply, Vec::new());
        }

        if intent == Intent::OutOfScope {
            return match course {
                Some(_) => self.fallback(intent, slots_used, course),
                None => QueryResponse::refusal(intent, slots_used, OUT_OF_SCOPE),
            };
        }

        match self.lookup.lookup_facts(intent, &classification.slots, course) {
            Ok(answer) if answer.citations.is_empty() => self.fallback(intent, slots_used, course),
            Ok(answer) => QueryResponse::reply(
                intent,
                slots_used,
                QueryOutcome::Answered,
                answer.text,
                answer.citations,
            ),
            Err(error) if error.is_course_unavailable() => {
                QueryResponse::refusal(intent, slots_used, format!("Course data unavailable: {error}."))
            }
            Err(error) => {
                tracing::error!(%error, "course data lookup failed");
                QueryResponse::refusal(intent, slots_used, UNREADABLE_COURSE)
            }
        }
    }

    fn fallback(
        &self,
        intent: Intent,
        slots_used: BTreeMap<String, String>,
        course: Option<&str>,
    ) -> QueryResponse {
        QueryResponse::reply(
            intent,
            slots_used,
            QueryOutcome::Fallback,
            self.lookup.get_fallback_message(course),
            Vec::new(),
        )
    }
}

impl std::fmt::Debug for QueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryService")
            .field("lookup", &self.lookup)
            .field("min_confidence", &self.min_confidence)
            .finish_non_exhaustive()
    }
}
