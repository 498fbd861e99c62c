use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `neuralnote` binary.
#[derive(Debug, Parser)]
#[command(
    name = "neuralnote",
    version,
    about = "NeuralNote - journaling reflections and habit dashboards"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Journal store path (defaults to general.data_path)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            data: self.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{EntryCommands, HabitCommands, UserCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "neuralnote",
            "--format",
            "raw",
            "--data",
            "/tmp/j.json",
            "--verbose",
            "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/j.json")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["neuralnote", "info", "--quiet", "-f", "raw"])
            .expect("cli should parse");
        assert!(cli.quiet);
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(matches!(cli.command, Commands::Info));
    }

    #[test]
    fn reflect_collects_repeated_habits() {
        let cli = Cli::try_parse_from([
            "neuralnote",
            "reflect",
            "Went for a run",
            "--habit",
            "1:Running",
            "--habit",
            "Reading",
        ])
        .expect("cli should parse");

        let Commands::Reflect(args) = cli.command else {
            panic!("expected reflect");
        };
        assert_eq!(args.content.as_deref(), Some("Went for a run"));
        assert_eq!(args.habits, vec!["1:Running", "Reading"]);
    }

    #[test]
    fn entry_list_defaults() {
        let cli = Cli::try_parse_from(["neuralnote", "entry", "list", "--user", "alice"])
            .expect("cli should parse");
        let Commands::Entry {
            action: EntryCommands::List { user, limit, offset },
        } = cli.command
        else {
            panic!("expected entry list");
        };
        assert_eq!(user, "alice");
        assert_eq!(limit, 50);
        assert_eq!(offset, 0);
    }

    #[test]
    fn entry_toggle_takes_two_ids() {
        let cli = Cli::try_parse_from(["neuralnote", "entry", "toggle", "jrn-1", "hab-2"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Entry {
                action: EntryCommands::Toggle { .. }
            }
        ));
    }

    #[test]
    fn habit_add_with_description() {
        let cli = Cli::try_parse_from([
            "neuralnote",
            "habit",
            "add",
            "--user",
            "alice",
            "Meditation",
            "--description",
            "10 minutes",
        ])
        .expect("cli should parse");
        let Commands::Habit {
            action: HabitCommands::Add {
                name, description, ..
            },
        } = cli.command
        else {
            panic!("expected habit add");
        };
        assert_eq!(name, "Meditation");
        assert_eq!(description.as_deref(), Some("10 minutes"));
    }

    #[test]
    fn habit_completions_parse_dates() {
        let cli = Cli::try_parse_from([
            "neuralnote",
            "habit",
            "completions",
            "--user",
            "alice",
            "--from",
            "2026-10-01",
            "--to",
            "2026-10-18",
        ])
        .expect("cli should parse");
        let Commands::Habit {
            action: HabitCommands::Completions { from, to, .. },
        } = cli.command
        else {
            panic!("expected habit completions");
        };
        assert_eq!(from.to_string(), "2026-10-01");
        assert_eq!(to.to_string(), "2026-10-18");

        assert!(
            Cli::try_parse_from([
                "neuralnote", "habit", "completions", "--user", "alice", "--from", "yesterday",
                "--to", "2026-10-18",
            ])
            .is_err()
        );
    }

    #[test]
    fn user_get_by_name_or_id() {
        let cli = Cli::try_parse_from(["neuralnote", "user", "get", "--id", "usr-1"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::Get { username: None, id: Some(_) }
            }
        ));
        assert!(Cli::try_parse_from(["neuralnote", "user", "get"]).is_err());
        assert!(Cli::try_parse_from(["neuralnote", "user", "get", "bob", "--id", "usr-1"]).is_err());
    }

    #[test]
    fn dashboard_window_overrides_are_optional() {
        let cli = Cli::try_parse_from(["neuralnote", "dashboard", "--user", "alice"])
            .expect("cli should parse");
        let Commands::Dashboard(args) = cli.command else {
            panic!("expected dashboard");
        };
        assert_eq!(args.window_days, None);
        assert_eq!(args.recent_limit, None);
    }
}
