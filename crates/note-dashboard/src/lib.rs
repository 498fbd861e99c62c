//! # note-dashboard
//!
//! Journal history and the statistics computed over it.
//!
//! - [`HistorySource`]: read access to users, entries, habits and completions.
//! - [`MemoryStore`]: the JSON-snapshot store behind the CLI, with the entry
//!   and habit mutations of the journaling workflow.
//! - [`DashboardAggregator`]: per-user streak, emotion histogram, habit counts
//!   and weekly activity in an explicit timezone.
//! - [`global_stats`]: application-wide counters.

pub mod aggregate;
pub mod calendar;
mod error;
pub mod memory;
pub mod source;
pub mod stats;
pub mod streak;

pub use aggregate::DashboardAggregator;
pub use error::DashboardError;
pub use memory::MemoryStore;
pub use source::HistorySource;
pub use stats::{global_stats, global_stats_at};
