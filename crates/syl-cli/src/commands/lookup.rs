use anyhow::Context;
use serde::Serialize;
use syl_core::{Citation, Intent};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LookupArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LookupResponse {
    intent: Intent,
    course: Option<String>,
    answer: String,
    citations: Vec<Citation>,
}

/// Handle `syl lookup`.
pub fn handle(args: &LookupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lookup = ctx.lookup()?;
    let slots = args.slots.to_slots();
    let answer = lookup
        .lookup_facts(args.intent, &slots, args.course.as_deref())
        .with_context(|| format!("lookup failed for intent '{}'", args.intent))?;

    output(
        &LookupResponse {
            intent: args.intent,
            course: args.course.clone(),
            answer: answer.text,
            citations: answer.citations,
        },
        flags.format,
    )
}
