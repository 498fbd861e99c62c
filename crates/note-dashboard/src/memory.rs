//! In-memory journal store with a JSON snapshot on disk.
//!
//! `MemoryStore` owns every user, habit, entry and completion. Mutations take
//! the reflection computed by the caller and keep completions consistent:
//! at most one per `(habit, entry)` pair, removed with their entry or habit.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use note_core::entities::{Habit, HabitCompletion, HabitRef, JournalEntry, User};
use note_core::responses::{EntryWithHabits, HabitCompletionCount, Reflection};

use crate::aggregate::completion_counts;
use crate::error::DashboardError;
use crate::source::HistorySource;

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_HABIT: &str = "hab";
pub const PREFIX_ENTRY: &str = "jrn";
pub const PREFIX_COMPLETION: &str = "hcp";

/// Generate a `{prefix}-{8 hex}` id from the OS random source.
///
/// # Errors
///
/// Returns [`DashboardError::Store`] if the random source fails.
pub fn generate_id(prefix: &str) -> Result<String, DashboardError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| DashboardError::Store(format!("random source unavailable: {e}")))?;
    let mut id = format!("{prefix}-");
    for b in bytes {
        let _ = write!(id, "{b:02x}");
    }
    Ok(id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStore {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    habits: Vec<Habit>,
    #[serde(default)]
    entries: Vec<JournalEntry>,
    #[serde(default)]
    completions: Vec<HabitCompletion>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] if the file exists but cannot be
    /// read or decoded.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no journal snapshot, starting empty");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DashboardError::Store(format!("read {}: {e}", path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| DashboardError::Store(format!("decode {}: {e}", path.display())))
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Store`] on any I/O or encoding failure.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| DashboardError::Store(format!("create {}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Store(format!("encode snapshot: {e}")))?;
        std::fs::write(path, json)
            .map_err(|e| DashboardError::Store(format!("write {}: {e}", path.display())))
    }

    // -----------------------------------------------------------------------
    // Users and habits
    // -----------------------------------------------------------------------

    /// Return the user named `username`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] for a blank username.
    pub fn find_or_create_user(&mut self, username: &str) -> Result<User, DashboardError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DashboardError::Validation("Username is required".into()));
        }
        if let Some(user) = self.users.iter().find(|u| u.username == username) {
            return Ok(user.clone());
        }

        let user = User {
            id: generate_id(PREFIX_USER)?,
            username: username.to_string(),
            created_at: Utc::now(),
        };
        tracing::info!(user = %user.id, username, "user created");
        self.users.push(user.clone());
        Ok(user)
    }

    /// Look up a user by username.
    ///
    /// # Errors
    ///
    /// `NotFound` if no user has that name.
    pub fn user_by_name(&self, username: &str) -> Result<User, DashboardError> {
        let username = username.trim();
        self.users
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| DashboardError::not_found("User", username))
    }

    /// Add a habit for an existing user. Blank descriptions are dropped.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank name, `NotFound` for an unknown user.
    pub fn add_habit(
        &mut self,
        user_id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Habit, DashboardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DashboardError::Validation("Habit name is required".into()));
        }
        self.require_user(user_id)?;

        let habit = Habit {
            id: generate_id(PREFIX_HABIT)?,
            user_id: user_id.to_string(),
            name: name.to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            created_at: Utc::now(),
        };
        tracing::info!(habit = %habit.id, user = user_id, name, "habit created");
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// One habit by id.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown habit.
    pub fn habit(&self, habit_id: &str) -> Result<Habit, DashboardError> {
        self.habits
            .iter()
            .find(|h| h.id == habit_id)
            .cloned()
            .ok_or_else(|| DashboardError::not_found("Habit", habit_id))
    }

    /// Replace a habit's name and description. A blank description clears it.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank name, `NotFound` for an unknown habit.
    pub fn update_habit(
        &mut self,
        habit_id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Habit, DashboardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DashboardError::Validation("Habit name is required".into()));
        }
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == habit_id)
            .ok_or_else(|| DashboardError::not_found("Habit", habit_id))?;

        habit.name = name.to_string();
        habit.description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        tracing::info!(habit = habit_id, name, "habit updated");
        Ok(habit.clone())
    }

    /// Delete a habit and every completion recorded for it.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown habit.
    pub fn delete_habit(&mut self, habit_id: &str) -> Result<(), DashboardError> {
        let index = self
            .habits
            .iter()
            .position(|h| h.id == habit_id)
            .ok_or_else(|| DashboardError::not_found("Habit", habit_id))?;
        self.habits.remove(index);

        let before = self.completions.len();
        self.completions.retain(|c| c.habit_id != habit_id);
        tracing::info!(
            habit = habit_id,
            removed = before - self.completions.len(),
            "habit deleted"
        );
        Ok(())
    }

    /// A user's habits, newest first.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn list_habits(&self, user_id: &str) -> Result<Vec<Habit>, DashboardError> {
        self.require_user(user_id)?;
        Ok(self.newest_habits(user_id).into_iter().cloned().collect())
    }

    /// The `{id, name}` list a reflection is matched against, newest habit
    /// first. Detected habit ids come back in this order.
    #[must_use]
    pub fn habit_refs(&self, user_id: &str) -> Vec<HabitRef> {
        self.newest_habits(user_id)
            .into_iter()
            .map(Habit::to_ref)
            .collect()
    }

    /// Completions per habit of `user_id` with `completedAt` in
    /// `[start, end]`. Every habit gets a row, zero counts included.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user, `Validation` when `start` is after
    /// `end`.
    pub fn completion_counts_between(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HabitCompletionCount>, DashboardError> {
        self.require_user(user_id)?;
        if start > end {
            return Err(DashboardError::Validation(
                "start date must not be after end date".into(),
            ));
        }
        let habits = self.habits_for_user(user_id)?;
        let completions = self.completions_for_user(user_id)?;
        Ok(completion_counts(&habits, &completions, start, end))
    }

    // -----------------------------------------------------------------------
    // Entries
    // -----------------------------------------------------------------------

    /// Store a new entry with its reflection, stamped now.
    ///
    /// # Errors
    ///
    /// See [`Self::create_entry_at`].
    pub fn create_entry(
        &mut self,
        user_id: &str,
        content: &str,
        reflection: &Reflection,
    ) -> Result<EntryWithHabits, DashboardError> {
        self.create_entry_at(user_id, content, reflection, Utc::now())
    }

    /// Store a new entry created at `at`, plus one completion per detected
    /// habit. Unknown or foreign habit ids are skipped.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn create_entry_at(
        &mut self,
        user_id: &str,
        content: &str,
        reflection: &Reflection,
        at: DateTime<Utc>,
    ) -> Result<EntryWithHabits, DashboardError> {
        self.require_user(user_id)?;

        let mut entry = JournalEntry {
            id: generate_id(PREFIX_ENTRY)?,
            user_id: user_id.to_string(),
            content: content.to_string(),
            summary: None,
            emotion: None,
            affirmation: None,
            created_at: at,
            updated_at: at,
        };
        entry.apply_reflection(reflection);
        let planned = self.plan_completions(&entry, &reflection.detected_habits, at)?;

        self.entries.push(entry.clone());
        self.completions.extend(planned);
        tracing::info!(entry = %entry.id, user = user_id, emotion = %reflection.emotion, "entry created");
        Ok(self.with_habits(entry))
    }

    /// Replace an entry's content and reflection, and rebuild its completions
    /// from the new detected habits.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown entry.
    pub fn update_entry(
        &mut self,
        entry_id: &str,
        content: &str,
        reflection: &Reflection,
    ) -> Result<EntryWithHabits, DashboardError> {
        let now = Utc::now();
        let index = self
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| DashboardError::not_found("Journal entry", entry_id))?;

        let mut entry = self.entries[index].clone();
        entry.content = content.to_string();
        entry.apply_reflection(reflection);
        entry.updated_at = now;
        let planned = self.plan_completions(&entry, &reflection.detected_habits, now)?;

        self.entries[index] = entry.clone();
        let before = self.completions.len();
        self.completions.retain(|c| c.journal_entry_id != entry_id);
        tracing::info!(
            entry = entry_id,
            removed = before - self.completions.len(),
            added = planned.len(),
            "entry updated"
        );
        self.completions.extend(planned);
        Ok(self.with_habits(entry))
    }

    /// Delete an entry and its completions.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown entry.
    pub fn delete_entry(&mut self, entry_id: &str) -> Result<(), DashboardError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(|| DashboardError::not_found("Journal entry", entry_id))?;
        self.entries.remove(index);
        self.completions.retain(|c| c.journal_entry_id != entry_id);
        tracing::info!(entry = entry_id, "entry deleted");
        Ok(())
    }

    /// Flip the completion of `habit_id` for `entry_id`. Returns the new
    /// state and the habit.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown entry or habit, `Validation` when the habit
    /// belongs to a different user than the entry.
    pub fn toggle_completion(
        &mut self,
        entry_id: &str,
        habit_id: &str,
    ) -> Result<(bool, Habit), DashboardError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| DashboardError::not_found("Journal entry", entry_id))?;
        let habit = self
            .habits
            .iter()
            .find(|h| h.id == habit_id)
            .ok_or_else(|| DashboardError::not_found("Habit", habit_id))?
            .clone();
        if habit.user_id != entry.user_id {
            return Err(DashboardError::Validation(format!(
                "habit {habit_id} does not belong to the owner of entry {entry_id}"
            )));
        }

        if let Some(index) = self
            .completions
            .iter()
            .position(|c| c.habit_id == habit_id && c.journal_entry_id == entry_id)
        {
            self.completions.remove(index);
            tracing::info!(entry = entry_id, habit = habit_id, "completion removed");
            return Ok((false, habit));
        }

        self.completions.push(HabitCompletion {
            id: generate_id(PREFIX_COMPLETION)?,
            habit_id: habit_id.to_string(),
            journal_entry_id: entry_id.to_string(),
            completed_at: Utc::now(),
        });
        tracing::info!(entry = entry_id, habit = habit_id, "completion added");
        Ok((true, habit))
    }

    /// One entry with its completed habits.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown entry.
    pub fn entry(&self, entry_id: &str) -> Result<EntryWithHabits, DashboardError> {
        self.entries
            .iter()
            .find(|e| e.id == entry_id)
            .cloned()
            .map(|entry| self.with_habits(entry))
            .ok_or_else(|| DashboardError::not_found("Journal entry", entry_id))
    }

    /// A user's entries, newest first, paged by `limit` and `offset`.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown user.
    pub fn list_entries(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<EntryWithHabits>, DashboardError> {
        self.require_user(user_id)?;
        let mut entries: Vec<&JournalEntry> =
            self.entries.iter().filter(|e| e.user_id == user_id).collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|e| self.with_habits(e.clone()))
            .collect())
    }

    /// Habits completed by `entry_id`, in habit creation order.
    #[must_use]
    pub fn completed_habits(&self, entry_id: &str) -> Vec<Habit> {
        completed_habits_of(entry_id, &self.habits, &self.completions)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn user_habits<'a, 'b>(
        &'a self,
        user_id: &'b str,
    ) -> impl Iterator<Item = &'a Habit> + use<'a, 'b> {
        self.habits.iter().filter(move |h| h.user_id == user_id)
    }

    /// Newest `created_at` first; equal timestamps keep the later insert first.
    fn newest_habits(&self, user_id: &str) -> Vec<&Habit> {
        let mut habits: Vec<&Habit> = self.user_habits(user_id).collect();
        habits.reverse();
        habits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        habits
    }

    fn with_habits(&self, entry: JournalEntry) -> EntryWithHabits {
        let completed_habits = self.completed_habits(&entry.id);
        EntryWithHabits {
            entry,
            completed_habits,
        }
    }

    /// Completions for `entry` built without touching the store, so a failed
    /// id draw leaves every collection as it was. Unknown, foreign and
    /// repeated habit ids are skipped.
    fn plan_completions(
        &self,
        entry: &JournalEntry,
        habit_ids: &[String],
        at: DateTime<Utc>,
    ) -> Result<Vec<HabitCompletion>, DashboardError> {
        let mut planned: Vec<HabitCompletion> = Vec::new();
        for habit_id in habit_ids {
            let owned = self
                .user_habits(&entry.user_id)
                .any(|h| &h.id == habit_id);
            if !owned {
                tracing::debug!(entry = %entry.id, habit = %habit_id, "skipping unknown habit");
                continue;
            }
            if planned.iter().any(|c| &c.habit_id == habit_id) {
                continue;
            }
            planned.push(HabitCompletion {
                id: generate_id(PREFIX_COMPLETION)?,
                habit_id: habit_id.clone(),
                journal_entry_id: entry.id.clone(),
                completed_at: at,
            });
        }
        Ok(planned)
    }
}

/// Habits (in the given order) that have a completion for `entry_id`.
pub(crate) fn completed_habits_of(
    entry_id: &str,
    habits: &[Habit],
    completions: &[HabitCompletion],
) -> Vec<Habit> {
    habits
        .iter()
        .filter(|h| {
            completions
                .iter()
                .any(|c| c.journal_entry_id == entry_id && c.habit_id == h.id)
        })
        .cloned()
        .collect()
}

impl HistorySource for MemoryStore {
    fn users(&self) -> Result<Vec<User>, DashboardError> {
        Ok(self.users.clone())
    }

    fn user(&self, user_id: &str) -> Result<Option<User>, DashboardError> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    fn entries_for_user(&self, user_id: &str) -> Result<Vec<JournalEntry>, DashboardError> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    fn habits_for_user(&self, user_id: &str) -> Result<Vec<Habit>, DashboardError> {
        Ok(self.user_habits(user_id).cloned().collect())
    }

    fn completions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<HabitCompletion>, DashboardError> {
        Ok(self
            .completions
            .iter()
            .filter(|c| self.user_habits(user_id).any(|h| h.id == c.habit_id))
            .cloned()
            .collect())
    }
}
