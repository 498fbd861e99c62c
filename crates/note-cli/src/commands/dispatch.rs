use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a store-backed command to its handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Entry { action } => commands::entry::handle(&action, ctx, flags).await,
        Commands::Habit { action } => commands::habit::handle(&action, ctx, flags),
        Commands::User { action } => commands::user::handle(&action, ctx, flags),
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Reflect(_) | Commands::Info => {
            anyhow::bail!("reflect and info do not use the journal store")
        }
    }
}
