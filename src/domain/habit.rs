//! Habit - Confidence Habit Tracking

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::HABIT_MILESTONE_DAYS;

/// A confidence habit and the days it was completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    /// Local calendar days, stored as `yyyy-MM-dd`
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
}

impl HabitRecord {
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Flip completion for `day`, returning the new state
    pub fn toggle(&mut self, day: NaiveDate) -> bool {
        if self.completed_dates.remove(&day) {
            false
        } else {
            self.completed_dates.insert(day);
            true
        }
    }

    /// Consecutive completed days ending at `today`
    ///
    /// Walks backwards from `today` and stops at the first missing day, so a
    /// habit not completed today has a streak of 0.
    pub fn streak(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = today;
        while self.completed_dates.contains(&day) {
            streak += 1;
            match day.pred_opt() {
                Some(previous) => day = previous,
                None => break,
            }
        }
        streak
    }

    /// Total number of completed days
    pub fn completion_count(&self) -> usize {
        self.completed_dates.len()
    }

    pub fn milestone_reached(&self) -> bool {
        self.completion_count() >= HABIT_MILESTONE_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn habit_with(dates: &[NaiveDate]) -> HabitRecord {
        HabitRecord {
            id: "gratitude".to_string(),
            name: "Gratitude".to_string(),
            description: String::new(),
            icon: "heart".to_string(),
            color: "pink".to_string(),
            completed_dates: dates.iter().copied().collect(),
        }
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let today = day(2024, 3, 1);
        let yesterday = today - Days::new(1);
        let before = today - Days::new(2);

        assert_eq!(habit_with(&[today, yesterday, before]).streak(today), 3);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        let today = day(2024, 3, 1);
        assert_eq!(habit_with(&[today, today - Days::new(2)]).streak(today), 1);
    }

    #[test]
    fn streak_of_empty_set_is_zero() {
        assert_eq!(habit_with(&[]).streak(day(2024, 3, 1)), 0);
    }

    #[test]
    fn streak_is_zero_when_today_is_missing() {
        let today = day(2024, 3, 1);
        assert_eq!(habit_with(&[today - Days::new(1)]).streak(today), 0);
    }

    #[test]
    fn milestone_needs_seven_completed_days() {
        let today = day(2024, 3, 1);
        let days: Vec<_> = (0..7).map(|offset| today - Days::new(offset)).collect();

        assert!(!habit_with(&days[..6]).milestone_reached());
        assert!(habit_with(&days).milestone_reached());

        let scattered: Vec<_> = (0..7).map(|week| today - Days::new(week * 7)).collect();
        let habit = habit_with(&scattered);
        assert!(habit.milestone_reached());
        assert_eq!(habit.streak(today), 1);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let today = day(2024, 3, 1);
        let mut habit = habit_with(&[]);
        assert!(habit.toggle(today));
        assert!(habit.is_completed_on(today));
        assert!(!habit.toggle(today));
        assert_eq!(habit.completion_count(), 0);
    }

    #[test]
    fn dates_serialize_as_plain_days() {
        let habit = habit_with(&[day(2024, 3, 1)]);
        let json = serde_json::to_value(&habit).expect("encodes");
        assert_eq!(json["completedDates"], serde_json::json!(["2024-03-01"]));
    }

    #[test]
    fn catalog_habits_without_dates_decode() {
        let json = r#"{"id":"posture","name":"Stand tall","description":"","icon":"star","color":"purple"}"#;
        let habit: HabitRecord = serde_json::from_str(json).expect("decodes");
        assert!(habit.completed_dates.is_empty());
    }
}
