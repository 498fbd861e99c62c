use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `neuralnote stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&note_dashboard::global_stats(&ctx.store)?, flags.format)
}
