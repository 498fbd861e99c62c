use clap::{Args, Subcommand};

use crate::cli::subcommands::{EntryCommands, HabitCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Reflect on text without storing anything.
    Reflect(ReflectArgs),
    /// Journal entries.
    Entry {
        #[command(subcommand)]
        action: EntryCommands,
    },
    /// Tracked habits.
    Habit {
        #[command(subcommand)]
        action: HabitCommands,
    },
    /// Users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Per-user dashboard.
    Dashboard(DashboardArgs),
    /// Application-wide statistics.
    Stats,
    /// Active enrichment provider.
    Info,
}

/// Arguments for `neuralnote reflect`.
#[derive(Clone, Debug, Args)]
pub struct ReflectArgs {
    /// Entry text (read from stdin when omitted).
    pub content: Option<String>,
    /// Habit to match, as `ID:NAME` or just `NAME`. Repeatable.
    #[arg(long = "habit")]
    pub habits: Vec<String>,
}

/// Arguments for `neuralnote dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Username.
    #[arg(long)]
    pub user: String,
    /// Lookback window in days (defaults to dashboard.window_days).
    #[arg(long)]
    pub window_days: Option<u32>,
    /// Number of recent entries (defaults to dashboard.recent_limit).
    #[arg(long)]
    pub recent_limit: Option<usize>,
}
