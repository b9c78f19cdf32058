use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::debug!(?command, "dispatching command");
    match command {
        Commands::Courses => commands::courses::handle(ctx, flags),
        Commands::Lookup(args) => commands::lookup::handle(&args, ctx, flags),
        Commands::Ask(args) => commands::ask::handle(&args, ctx, flags),
        Commands::Contact(args) => commands::contact::handle(&args, ctx, flags),
        Commands::Promote(args) => commands::promote::handle(&args, ctx, flags),
    }
}
