use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Get or create a user by name.
    Add { username: String },
    /// Get a user by name, or by ID with `--id`.
    Get {
        #[arg(required_unless_present = "id")]
        username: Option<String>,
        #[arg(long, conflicts_with = "username")]
        id: Option<String>,
    },
}
