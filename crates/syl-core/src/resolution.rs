//! Tri-state outcome of a structured resolver.
//!
//! The orchestrator decides whether to escalate to markdown fallback by
//! matching on the variant, never by inspecting answer text.

use crate::entities::Answer;

/// Result of resolving one intent against a course's structured records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record matched the slots, or no slot was given and the full listing
    /// was produced.
    Found(Answer),
    /// A slot was given but no record matched it. Carries the best structured
    /// answer available (typically the full listing) for use when fallback
    /// also comes up empty.
    NotFound(Answer),
    /// The category holds no records at all. Carries an uncited
    /// "not available yet" message.
    Empty(Answer),
}

impl Resolution {
    /// Whether the orchestrator should try the markdown fallback.
    #[must_use]
    pub const fn needs_fallback(&self) -> bool {
        !matches!(self, Self::Found(_))
    }

    #[must_use]
    pub const fn answer(&self) -> &Answer {
        match self {
            Self::Found(answer) | Self::NotFound(answer) | Self::Empty(answer) => answer,
        }
    }

    #[must_use]
    pub fn into_answer(self) -> Answer {
        match self {
            Self::Found(answer) | Self::NotFound(answer) | Self::Empty(answer) => answer,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound(_) => "not_found",
            Self::Empty(_) => "empty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Citation;

    #[test]
    fn only_found_skips_fallback() {
        let cited = Answer::new("hw1 is due", vec![Citation::new("Jan 12", "Jan 12", "x.md")]);
        assert!(!Resolution::Found(cited.clone()).needs_fallback());
        assert!(Resolution::NotFound(cited).needs_fallback());
        assert!(Resolution::Empty(Answer::uncited("No due dates yet.")).needs_fallback());
    }

    #[test]
    fn a_found_answer_that_reads_like_a_refusal_is_still_found() {
        let answer = Answer::new(
            "No late submissions are accepted.",
            vec![Citation::new("Late policy", "No late submissions", "x.md")],
        );
        let resolution = Resolution::Found(answer.clone());
        assert!(!resolution.needs_fallback());
        assert_eq!(resolution.into_answer(), answer);
    }
}
