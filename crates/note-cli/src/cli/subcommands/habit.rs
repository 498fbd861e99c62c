use chrono::NaiveDate;
use clap::Subcommand;

/// Habit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HabitCommands {
    /// Track a new habit.
    Add {
        #[arg(long)]
        user: String,
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List a user's habits, newest first.
    List {
        #[arg(long)]
        user: String,
    },
    /// Get a habit by ID.
    Get { id: String },
    /// Rename a habit. The description is replaced, or cleared when omitted.
    Update {
        id: String,
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a habit and its completions.
    Delete { id: String },
    /// Completions per habit between two local dates (inclusive).
    Completions {
        #[arg(long)]
        user: String,
        /// First day, YYYY-MM-DD.
        #[arg(long)]
        from: NaiveDate,
        /// Last day, YYYY-MM-DD.
        #[arg(long)]
        to: NaiveDate,
    },
}
