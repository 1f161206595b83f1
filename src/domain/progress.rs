//! Progress - Cross-Feature Progress Aggregate
//!
//! A best-effort summary. Counters are write-rate signals and are never
//! reconciled against the feature collections they describe.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion record of one activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Result of the latest attempt at one quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub score: u32,
    pub total: u32,
    pub completed_at: DateTime<Utc>,
}

/// The persisted progress blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressData {
    pub activities: BTreeMap<String, ActivityRecord>,
    pub quizzes: BTreeMap<String, QuizRecord>,
    pub diary_entries: u32,
    pub last_updated: DateTime<Utc>,
}

impl Default for ProgressData {
    fn default() -> Self {
        Self::empty_at(Utc::now())
    }
}

impl ProgressData {
    /// Empty aggregate stamped at `now`
    pub fn empty_at(now: DateTime<Utc>) -> Self {
        Self {
            activities: BTreeMap::new(),
            quizzes: BTreeMap::new(),
            diary_entries: 0,
            last_updated: now,
        }
    }

    /// Upsert an activity as completed; any prior record is replaced
    pub fn mark_activity_complete(
        &mut self,
        activity_id: &str,
        score: Option<u32>,
        now: DateTime<Utc>,
    ) {
        self.activities.insert(
            activity_id.to_string(),
            ActivityRecord {
                completed: true,
                score,
                completed_at: Some(now),
            },
        );
        self.last_updated = now;
    }

    /// Upsert a quiz result; the last attempt wins, no best score is kept
    pub fn mark_quiz_complete(
        &mut self,
        quiz_id: &str,
        score: u32,
        total: u32,
        now: DateTime<Utc>,
    ) {
        self.quizzes.insert(
            quiz_id.to_string(),
            QuizRecord {
                score,
                total,
                completed_at: now,
            },
        );
        self.last_updated = now;
    }

    pub fn record_diary_entry(&mut self, now: DateTime<Utc>) {
        self.diary_entries = self.diary_entries.saturating_add(1);
        self.last_updated = now;
    }

    pub fn is_activity_complete(&self, activity_id: &str) -> bool {
        self.activities
            .get(activity_id)
            .is_some_and(|record| record.completed)
    }

    pub fn completed_activity_count(&self) -> usize {
        self.activities.values().filter(|record| record.completed).count()
    }

    pub fn quiz_count(&self) -> usize {
        self.quizzes.len()
    }

    /// Rounded completion percentage against `trackable` activities
    ///
    /// A zero denominator yields 0; the result never exceeds 100.
    pub fn overall_percent(&self, trackable: u32) -> u32 {
        if trackable == 0 {
            return 0;
        }
        let ratio = self.completed_activity_count() as f64 / f64::from(trackable);
        ((ratio * 100.0).round() as u32).min(100)
    }
}
