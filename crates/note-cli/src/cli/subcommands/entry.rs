use clap::Subcommand;

/// Journal entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EntryCommands {
    /// Write an entry and store its reflection. Creates the user if needed.
    Add {
        #[arg(long)]
        user: String,
        /// Entry text (read from stdin when omitted).
        content: Option<String>,
    },
    /// Rewrite an entry and recompute its reflection.
    Update {
        id: String,
        /// New text (read from stdin when omitted).
        content: Option<String>,
    },
    /// Delete an entry and its habit completions.
    Delete { id: String },
    /// Flip a habit's completion for an entry.
    Toggle { id: String, habit_id: String },
    /// Get an entry by ID.
    Get { id: String },
    /// List a user's entries, newest first.
    List {
        #[arg(long)]
        user: String,
        #[arg(long, default_value_t = 50)]
        limit: usize,
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },
}
