pub mod entry;
pub mod habit;
pub mod user;

pub use entry::EntryCommands;
pub use habit::HabitCommands;
pub use user::UserCommands;
