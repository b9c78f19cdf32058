use syl_core::Intent;

/// Canned replies for conversational intents. These never touch course data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChitchatReplies {
    pub greeting: String,
    pub thanks: String,
    pub goodbye: String,
    pub help: String,
}

impl Default for ChitchatReplies {
    fn default() -> Self {
        Self {
            greeting: "Hi! Ask me about due dates, instructors, TAs, course links, or course policies."
                .to_string(),
            thanks: "You're welcome! Let me know if you have another course question.".to_string(),
            goodbye: "Goodbye, and good luck with the course!".to_string(),
            help: "I answer course-policy questions from the course's own materials and cite \
                   where each answer came from. Try asking when hw1 is due, who teaches your \
                   section, or where the course links are."
                .to_string(),
        }
    }
}

impl ChitchatReplies {
    /// The reply for a conversational intent; `None` for anything else.
    #[must_use]
    pub fn reply(&self, intent: Intent) -> Option<&str> {
        match intent {
            Intent::Greeting => Some(&self.greeting),
            Intent::Thanks => Some(&self.thanks),
            Intent::Goodbye => Some(&self.goodbye),
            Intent::Help => Some(&self.help),
            _ => None,
        }
    }
}
