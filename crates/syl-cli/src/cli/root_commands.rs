use clap::{Args, Subcommand};
use syl_core::{Intent, Slots};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List registered courses.
    Courses,
    /// Answer an already-classified question from course data.
    Lookup(LookupArgs),
    /// Run the full question pipeline against a classifier's raw output.
    Ask(AskArgs),
    /// Print the "who to contact" message for a course.
    Contact(ContactArgs),
    /// Write a confident rules-document extraction back to the facts store.
    Promote(PromoteArgs),
}

/// Slot values shared by `lookup` and `promote`.
#[derive(Clone, Debug, Default, Args)]
pub struct SlotArgs {
    #[arg(long)]
    pub assessment: Option<String>,
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub section: Option<String>,
    #[arg(long)]
    pub link_type: Option<String>,
}

impl SlotArgs {
    #[must_use]
    pub fn to_slots(&self) -> Slots {
        Slots {
            assessment: self.assessment.clone(),
            topic: self.topic.clone(),
            role: self.role.clone(),
            section: self.section.clone(),
            link_type: self.link_type.clone(),
        }
    }
}

/// Arguments for `syl lookup`.
#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    #[arg(long)]
    pub course: Option<String>,
    #[arg(long)]
    pub intent: Intent,
    #[command(flatten)]
    pub slots: SlotArgs,
}

/// Arguments for `syl ask`.
#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    pub question: String,
    #[arg(long)]
    pub course: Option<String>,
    /// Classifier output (JSON, possibly wrapped in prose); `-` reads stdin.
    #[arg(long)]
    pub classification: String,
}

/// Arguments for `syl contact`.
#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub course: Option<String>,
}

/// Arguments for `syl promote`.
#[derive(Clone, Debug, Args)]
pub struct PromoteArgs {
    #[arg(long)]
    pub course: Option<String>,
    #[arg(long)]
    pub intent: Intent,
    #[command(flatten)]
    pub slots: SlotArgs,
}
