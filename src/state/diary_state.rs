//! DiaryState - Mood Diary Collection

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use tracing::debug;

use super::persisted::{LoadOrigin, PersistedCollection};
use crate::constants::DIARY_KEY;
use crate::domain::diary::{DiaryEntry, Mood};
use crate::storage::SafeStorage;

/// Diary entries, newest first
#[derive(Debug, Clone)]
pub struct DiaryState {
    entries: PersistedCollection<Vec<DiaryEntry>>,
}

impl DiaryState {
    pub fn load(storage: SafeStorage) -> Self {
        Self {
            entries: PersistedCollection::load(storage, DIARY_KEY),
        }
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        self.entries.get()
    }

    pub fn len(&self) -> usize {
        self.entries.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.get().is_empty()
    }

    pub fn origin(&self) -> LoadOrigin {
        self.entries.origin()
    }

    /// Prepend a new entry stamped now
    pub fn add_entry(&mut self, mood: Mood, content: &str) -> Option<DiaryEntry> {
        self.add_entry_at(mood, content, Utc::now())
    }

    /// Prepend a new entry stamped at `now`
    ///
    /// Blank content is rejected and nothing is written.
    pub fn add_entry_at(
        &mut self,
        mood: Mood,
        content: &str,
        now: DateTime<Utc>,
    ) -> Option<DiaryEntry> {
        let entry = DiaryEntry::new(mood, content, now)?;
        debug!(id = %entry.id, mood = ?mood, "Adding diary entry");
        self.entries.update(|entries| entries.insert(0, entry.clone()));
        Some(entry)
    }

    /// Remove the entry with `id`; unknown ids change nothing
    pub fn delete_entry(&mut self, id: &str) -> bool {
        let Some(index) = self.entries.get().iter().position(|entry| entry.id == id) else {
            return false;
        };
        self.entries.update(|entries| entries.remove(index));
        true
    }

    /// Newest entry written on the local calendar `day`
    pub fn entry_on(&self, day: NaiveDate) -> Option<&DiaryEntry> {
        self.entries.get().iter().find(|entry| entry.local_day() == day)
    }

    /// Entries written in the given local month, newest first
    pub fn entries_in_month(&self, year: i32, month: u32) -> Vec<&DiaryEntry> {
        self.entries
            .get()
            .iter()
            .filter(|entry| {
                let day = entry.local_day();
                day.year() == year && day.month() == month
            })
            .collect()
    }
}
