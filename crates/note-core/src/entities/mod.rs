//! Entity structs for all persisted NeuralNote domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names serialize as camelCase to
//! match the external request/response contracts.

mod completion;
mod habit;
mod journal;
mod user;

pub use completion::HabitCompletion;
pub use habit::{Habit, HabitRef};
pub use journal::JournalEntry;
pub use user::User;
