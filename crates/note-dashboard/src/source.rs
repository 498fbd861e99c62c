//! Read access to persisted journal history.

use note_core::entities::{Habit, HabitCompletion, JournalEntry, User};

use crate::error::DashboardError;

/// Persisted users, entries, habits and completions.
///
/// Lists are returned in storage order; callers sort as needed.
pub trait HistorySource {
    /// All users.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] if the backing store cannot be read.
    fn users(&self) -> Result<Vec<User>, DashboardError>;

    /// One user, or `None` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] if the backing store cannot be read.
    fn user(&self, user_id: &str) -> Result<Option<User>, DashboardError>;

    /// Every journal entry owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] if the backing store cannot be read.
    fn entries_for_user(&self, user_id: &str) -> Result<Vec<JournalEntry>, DashboardError>;

    /// Every habit owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] if the backing store cannot be read.
    fn habits_for_user(&self, user_id: &str) -> Result<Vec<Habit>, DashboardError>;

    /// Completions of any habit owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] if the backing store cannot be read.
    fn completions_for_user(&self, user_id: &str)
    -> Result<Vec<HabitCompletion>, DashboardError>;

    /// The user, or [`DashboardError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or any error from [`Self::user`].
    fn require_user(&self, user_id: &str) -> Result<User, DashboardError> {
        self.user(user_id)?
            .ok_or_else(|| DashboardError::not_found("User", user_id))
    }
}
