use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl courses`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lookup = ctx.lookup()?;
    output(&lookup.list_courses(), flags.format)
}
