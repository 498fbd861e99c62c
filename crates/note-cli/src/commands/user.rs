use note_dashboard::HistorySource;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `neuralnote user`.
pub fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Add { username } => {
            let user = ctx.store.find_or_create_user(username)?;
            ctx.save()?;
            output(&user, flags.format)
        }
        UserCommands::Get { id: Some(id), .. } => {
            output(&ctx.store.require_user(id)?, flags.format)
        }
        UserCommands::Get {
            username: Some(username),
            ..
        } => output(&ctx.store.user_by_name(username)?, flags.format),
        UserCommands::Get { .. } => anyhow::bail!("a username or --id is required"),
    }
}
