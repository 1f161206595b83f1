//! Diary - Mood Diary Entries

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Mood picked for a diary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Neutral,
    Sad,
    Excited,
    Anxious,
}

impl Mood {
    /// Picker order
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Excited,
        Mood::Anxious,
    ];

    /// Translation key of the mood label
    pub fn label_key(self) -> &'static str {
        match self {
            Mood::Happy => "diary.moods.happy",
            Mood::Neutral => "diary.moods.neutral",
            Mood::Sad => "diary.moods.sad",
            Mood::Excited => "diary.moods.excited",
            Mood::Anxious => "diary.moods.anxious",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "😢",
            Mood::Excited => "🤩",
            Mood::Anxious => "😰",
        }
    }
}

/// A single diary entry
///
/// Entries are never edited; a changed mind means delete and write again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Time-ordered unique token
    pub id: String,
    /// Creation instant
    pub date: DateTime<Utc>,
    pub mood: Mood,
    /// Trimmed, never empty
    pub content: String,
}

impl DiaryEntry {
    /// Create an entry stamped at `now`
    ///
    /// Returns `None` when `content` is blank.
    pub fn new(mood: Mood, content: &str, now: DateTime<Utc>) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            id: uuid::Uuid::now_v7().to_string(),
            date: now,
            mood,
            content: content.to_string(),
        })
    }

    /// Calendar day of the entry in the local timezone
    pub fn local_day(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }
}
