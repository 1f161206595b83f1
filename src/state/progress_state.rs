//! ProgressTracker - Progress Aggregate Reducer
//!
//! Every mutation re-serializes the whole aggregate. Writes from different
//! features are independent; nothing here is transactional.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::constants::PROGRESS_KEY;
use crate::domain::progress::ProgressData;
use crate::storage::SafeStorage;

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    data: ProgressData,
    storage: SafeStorage,
    trackable: u32,
}

impl ProgressTracker {
    /// Mount the aggregate; absent or malformed blobs start empty
    pub fn load(storage: SafeStorage, trackable: u32) -> Self {
        let data = storage.load_json(PROGRESS_KEY).unwrap_or_default();
        Self {
            data,
            storage,
            trackable,
        }
    }

    pub fn data(&self) -> &ProgressData {
        &self.data
    }

    pub fn trackable_activities(&self) -> u32 {
        self.trackable
    }

    pub fn mark_activity_complete(&mut self, activity_id: &str, score: Option<u32>) {
        self.mark_activity_complete_at(activity_id, score, Utc::now());
    }

    pub fn mark_activity_complete_at(
        &mut self,
        activity_id: &str,
        score: Option<u32>,
        now: DateTime<Utc>,
    ) {
        debug!(activity = activity_id, ?score, "Activity completed");
        self.data.mark_activity_complete(activity_id, score, now);
        self.persist();
    }

    /// Record the latest quiz attempt, replacing any earlier one
    pub fn mark_quiz_complete(&mut self, quiz_id: &str, score: u32, total: u32) {
        self.mark_quiz_complete_at(quiz_id, score, total, Utc::now());
    }

    pub fn mark_quiz_complete_at(
        &mut self,
        quiz_id: &str,
        score: u32,
        total: u32,
        now: DateTime<Utc>,
    ) {
        debug!(quiz = quiz_id, score, total, "Quiz completed");
        self.data.mark_quiz_complete(quiz_id, score, total, now);
        self.persist();
    }

    /// Bump the diary counter; deletions never decrement it
    pub fn add_diary_entry(&mut self) {
        self.data.record_diary_entry(Utc::now());
        self.persist();
    }

    /// Reset to empty and drop the stored blob
    pub fn clear_progress(&mut self) {
        info!("Clearing progress");
        self.data = ProgressData::empty_at(Utc::now());
        self.storage.remove_item(PROGRESS_KEY);
    }

    pub fn activity_progress(&self, activity_id: &str) -> bool {
        self.data.is_activity_complete(activity_id)
    }

    /// Completion percentage over the configured trackable activities
    pub fn overall_progress(&self) -> u32 {
        self.data.overall_percent(self.trackable)
    }

    fn persist(&self) {
        self.storage.save_json(PROGRESS_KEY, &self.data);
    }
}
