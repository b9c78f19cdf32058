use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ContactArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ContactResponse {
    course: Option<String>,
    message: String,
}

/// Handle `syl contact`.
pub fn handle(args: &ContactArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lookup = ctx.lookup()?;
    let message = lookup.get_fallback_message(args.course.as_deref());
    output(
        &ContactResponse {
            course: args.course.clone(),
            message,
        },
        flags.format,
    )
}
