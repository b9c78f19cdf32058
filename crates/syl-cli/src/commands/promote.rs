use serde::Serialize;
use syl_lookup::PromotionOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PromoteArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum PromoteStatus {
    Disabled,
    Skipped,
    Promoted,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct PromoteResponse {
    status: PromoteStatus,
    added: usize,
    reason: Option<String>,
}

impl From<PromotionOutcome> for PromoteResponse {
    fn from(outcome: PromotionOutcome) -> Self {
        match outcome {
            PromotionOutcome::Disabled => Self {
                status: PromoteStatus::Disabled,
                added: 0,
                reason: Some("promotion is disabled (set promotion.enabled)".to_string()),
            },
            PromotionOutcome::Skipped { reason } => Self {
                status: PromoteStatus::Skipped,
                added: 0,
                reason: Some(reason),
            },
            PromotionOutcome::Promoted { added } => Self {
                status: PromoteStatus::Promoted,
                added,
                reason: None,
            },
        }
    }
}

/// Handle `syl promote`.
pub fn handle(args: &PromoteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lookup = ctx.lookup()?;
    let outcome = lookup.promote(args.intent, &args.slots.to_slots(), args.course.as_deref())?;
    output(&PromoteResponse::from(outcome), flags.format)
}
