use note_core::entities::Habit;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EntryCommands;
use crate::commands::shared::{Deleted, entry_content};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ToggleResult {
    completed: bool,
    habit: Habit,
}

/// Handle `neuralnote entry`.
pub async fn handle(
    action: &EntryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EntryCommands::Add { user, content } => {
            let content = entry_content(content.as_deref())?;
            let user = ctx.store.find_or_create_user(user)?;
            let habits = ctx.store.habit_refs(&user.id);
            let reflection = ctx.engine.reflect(&content, &habits).await;
            let created = ctx.store.create_entry(&user.id, &content, &reflection)?;
            ctx.save()?;
            output(&created, flags.format)
        }
        EntryCommands::Update { id, content } => {
            let content = entry_content(content.as_deref())?;
            let existing = ctx.store.entry(id)?;
            let habits = ctx.store.habit_refs(&existing.entry.user_id);
            let reflection = ctx.engine.reflect(&content, &habits).await;
            let updated = ctx.store.update_entry(id, &content, &reflection)?;
            ctx.save()?;
            output(&updated, flags.format)
        }
        EntryCommands::Delete { id } => {
            ctx.store.delete_entry(id)?;
            ctx.save()?;
            output(&Deleted { deleted: id }, flags.format)
        }
        EntryCommands::Toggle { id, habit_id } => {
            let (completed, habit) = ctx.store.toggle_completion(id, habit_id)?;
            ctx.save()?;
            output(&ToggleResult { completed, habit }, flags.format)
        }
        EntryCommands::Get { id } => output(&ctx.store.entry(id)?, flags.format),
        EntryCommands::List {
            user,
            limit,
            offset,
        } => {
            let user = ctx.store.user_by_name(user)?;
            let entries = ctx.store.list_entries(&user.id, *limit, *offset)?;
            output(&entries, flags.format)
        }
    }
}
