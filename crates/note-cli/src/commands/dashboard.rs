use note_core::responses::DashboardRequest;
use note_dashboard::DashboardAggregator;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `neuralnote dashboard`.
pub fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.store.user_by_name(&args.user)?;
    let defaults = &ctx.config.dashboard;
    let request = DashboardRequest {
        user_id: user.id,
        window_days: args.window_days.unwrap_or(defaults.window_days),
        recent_limit: args.recent_limit.unwrap_or(defaults.recent_limit),
    };

    let aggregator = DashboardAggregator::from_config(defaults)?;
    output(&aggregator.aggregate(&ctx.store, &request)?, flags.format)
}
