use note_dashboard::calendar::local_day_range;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HabitCommands;
use crate::commands::shared::Deleted;
use crate::context::AppContext;
use crate::output::output;

/// Handle `neuralnote habit`.
pub fn handle(
    action: &HabitCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HabitCommands::Add {
            user,
            name,
            description,
        } => {
            let user = ctx.store.user_by_name(user)?;
            let habit = ctx
                .store
                .add_habit(&user.id, name, description.as_deref())?;
            ctx.save()?;
            output(&habit, flags.format)
        }
        HabitCommands::List { user } => {
            let user = ctx.store.user_by_name(user)?;
            output(&ctx.store.list_habits(&user.id)?, flags.format)
        }
        HabitCommands::Get { id } => output(&ctx.store.habit(id)?, flags.format),
        HabitCommands::Update {
            id,
            name,
            description,
        } => {
            let habit = ctx.store.update_habit(id, name, description.as_deref())?;
            ctx.save()?;
            output(&habit, flags.format)
        }
        HabitCommands::Delete { id } => {
            ctx.store.delete_habit(id)?;
            ctx.save()?;
            output(&Deleted { deleted: id }, flags.format)
        }
        HabitCommands::Completions { user, from, to } => {
            let user = ctx.store.user_by_name(user)?;
            let tz = ctx.config.dashboard.tz()?;
            let Some((start, end)) = local_day_range(*from, *to, tz) else {
                anyhow::bail!("invalid date range: {from} to {to}");
            };
            let counts = ctx.store.completion_counts_between(&user.id, start, end)?;
            output(&counts, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use note_config::NoteConfig;
    use note_dashboard::MemoryStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(dir: &tempfile::TempDir) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            data: Some(dir.path().join("journal.json")),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn update_and_delete_persist() {
        let dir = tempfile::tempdir().unwrap();
        let flags = flags(&dir);
        let mut ctx = AppContext::open(NoteConfig::default(), &flags).unwrap();
        let user = ctx.store.find_or_create_user("alice").unwrap();
        let run = ctx.store.add_habit(&user.id, "Run", None).unwrap();
        let read = ctx.store.add_habit(&user.id, "Read", None).unwrap();

        let rename = HabitCommands::Update {
            id: run.id.clone(),
            name: "Running".into(),
            description: Some("5k".into()),
        };
        handle(&rename, &mut ctx, &flags).unwrap();
        handle(&HabitCommands::Delete { id: read.id.clone() }, &mut ctx, &flags).unwrap();

        let saved = MemoryStore::load(&ctx.data_path).unwrap();
        let renamed = saved.habit(&run.id).unwrap();
        assert_eq!(renamed.name, "Running");
        assert_eq!(renamed.description.as_deref(), Some("5k"));
        assert!(saved.habit(&read.id).is_err());
    }

    #[test]
    fn completions_reject_reversed_dates() {
        let dir = tempfile::tempdir().unwrap();
        let flags = flags(&dir);
        let mut ctx = AppContext::open(NoteConfig::default(), &flags).unwrap();
        ctx.store.find_or_create_user("alice").unwrap();

        let action = HabitCommands::Completions {
            user: "alice".into(),
            from: day(18),
            to: day(17),
        };
        let err = handle(&action, &mut ctx, &flags).unwrap_err();
        assert!(err.to_string().contains("invalid date range"));

        let action = HabitCommands::Completions {
            user: "alice".into(),
            from: day(17),
            to: day(18),
        };
        assert!(handle(&action, &mut ctx, &flags).is_ok());
    }
}
