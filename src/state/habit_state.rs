//! HabitState - Confidence Habit Tracker
//!
//! Only one habit is tracked at a time. On first visit, with nothing stored,
//! the first catalog habit is seeded and persisted.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::persisted::{LoadOrigin, PersistedCollection};
use crate::constants::{HABITS_KEY, MAX_ACTIVE_HABITS};
use crate::domain::habit::HabitRecord;
use crate::error::{Error, Result};
use crate::storage::SafeStorage;

#[derive(Debug, Clone)]
pub struct HabitState {
    habits: PersistedCollection<Vec<HabitRecord>>,
}

impl HabitState {
    /// Mount the tracker, seeding from `catalog` when nothing was stored
    ///
    /// A malformed stored value is not reseeded; the tracker stays empty.
    pub fn load(storage: SafeStorage, catalog: &[HabitRecord]) -> Self {
        let mut habits = PersistedCollection::load(storage, HABITS_KEY);
        if habits.origin() == LoadOrigin::Missing
            && let Some(first) = catalog.first()
        {
            info!(habit = %first.id, "Seeding first confidence habit");
            habits.update(|list: &mut Vec<HabitRecord>| list.push(first.clone()));
        }
        Self { habits }
    }

    pub fn habits(&self) -> &[HabitRecord] {
        self.habits.get()
    }

    /// The habit currently in focus
    pub fn active(&self) -> Option<&HabitRecord> {
        self.habits.get().first()
    }

    pub fn origin(&self) -> LoadOrigin {
        self.habits.origin()
    }

    /// Start tracking `habit`
    ///
    /// Fails with [`Error::HabitLimit`] while another habit is active; the
    /// caller shows the `confidencePage.habitLimit` message.
    pub fn add_habit(&mut self, habit: &HabitRecord) -> Result<()> {
        if self.habits.get().len() >= MAX_ACTIVE_HABITS {
            warn!(habit = %habit.id, limit = MAX_ACTIVE_HABITS, "Habit limit reached");
            return Err(Error::HabitLimit {
                limit: MAX_ACTIVE_HABITS,
            });
        }
        self.habits.update(|list| list.push(habit.clone()));
        Ok(())
    }

    /// Stop tracking the habit with `id`
    pub fn remove_habit(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.habits.update(|list| list.remove(index));
        true
    }

    /// Flip completion for `day`, returning the new state, `None` if unknown
    pub fn toggle_completion(&mut self, id: &str, day: NaiveDate) -> Option<bool> {
        let index = self.position(id)?;
        Some(self.habits.update(|list| list[index].toggle(day)))
    }

    pub fn is_completed_on(&self, id: &str, day: NaiveDate) -> bool {
        self.find(id).is_some_and(|habit| habit.is_completed_on(day))
    }

    /// Current streak ending at `today`, 0 for unknown habits
    pub fn streak(&self, id: &str, today: NaiveDate) -> u32 {
        self.find(id).map_or(0, |habit| habit.streak(today))
    }

    /// Catalog habits not already being tracked
    pub fn available<'a>(&self, catalog: &'a [HabitRecord]) -> Vec<&'a HabitRecord> {
        catalog.iter().filter(|habit| self.find(&habit.id).is_none()).collect()
    }

    fn find(&self, id: &str) -> Option<&HabitRecord> {
        self.habits.get().iter().find(|habit| habit.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.habits.get().iter().position(|habit| habit.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    fn catalog() -> Vec<HabitRecord> {
        ["gratitude", "posture"]
            .into_iter()
            .map(|id| HabitRecord {
                id: id.to_string(),
                name: id.to_string(),
                description: String::new(),
                icon: String::new(),
                color: String::new(),
                completed_dates: Default::default(),
            })
            .collect()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn first_visit_seeds_and_persists_first_catalog_habit() {
        let storage = SafeStorage::in_memory();
        let habits = HabitState::load(storage.clone(), &catalog());
        assert_eq!(habits.active().map(|h| h.id.as_str()), Some("gratitude"));
        assert!(storage.get_item(HABITS_KEY).is_some());

        let remounted = HabitState::load(storage, &catalog());
        assert_eq!(remounted.origin(), LoadOrigin::Restored);
        assert_eq!(remounted.habits().len(), 1);
    }

    #[test]
    fn malformed_value_is_not_reseeded() {
        let storage = SafeStorage::in_memory();
        storage.set_item(HABITS_KEY, "[{\"id\":");

        let habits = HabitState::load(storage, &catalog());
        assert!(habits.active().is_none());
    }

    #[test]
    fn second_habit_is_rejected() {
        let catalog = catalog();
        let mut habits = HabitState::load(SafeStorage::in_memory(), &catalog);

        let err = habits.add_habit(&catalog[1]).expect_err("limit");
        assert!(matches!(err, Error::HabitLimit { limit: 1 }));
        assert_eq!(habits.habits().len(), 1);
        assert_eq!(habits.active().map(|h| h.id.as_str()), Some("gratitude"));
    }

    #[test]
    fn removing_frees_the_slot() {
        let catalog = catalog();
        let mut habits = HabitState::load(SafeStorage::in_memory(), &catalog);
        assert_eq!(habits.available(&catalog).len(), 1);

        assert!(habits.remove_habit("gratitude"));
        habits.add_habit(&catalog[1]).expect("slot is free");
        assert_eq!(habits.active().map(|h| h.id.as_str()), Some("posture"));
    }

    #[test]
    fn toggling_builds_a_streak() {
        let mut habits = HabitState::load(SafeStorage::in_memory(), &catalog());
        let today = day(2024, 3, 1);
        for offset in 0..3 {
            assert_eq!(
                habits.toggle_completion("gratitude", today - Days::new(offset)),
                Some(true)
            );
        }
        assert_eq!(habits.streak("gratitude", today), 3);

        assert_eq!(habits.toggle_completion("gratitude", today), Some(false));
        assert!(!habits.is_completed_on("gratitude", today));
        assert_eq!(habits.streak("gratitude", today), 0);
        assert_eq!(habits.toggle_completion("unknown", today), None);
    }

    proptest! {
        #[test]
        fn never_more_than_one_habit_is_tracked(
            seeded in any::<bool>(),
            ops in prop::collection::vec((any::<bool>(), 0usize..2), 0..30)
        ) {
            let catalog = catalog();
            let seed: &[HabitRecord] = if seeded { &catalog } else { &[] };
            let storage = SafeStorage::in_memory();
            let mut habits = HabitState::load(storage.clone(), seed);
            for (add, which) in ops {
                if add {
                    let before = habits.habits().len();
                    let result = habits.add_habit(&catalog[which]);
                    prop_assert_eq!(result.is_ok(), before < MAX_ACTIVE_HABITS);
                } else {
                    habits.remove_habit(&catalog[which].id);
                }
                prop_assert!(habits.habits().len() <= MAX_ACTIVE_HABITS);
            }
            let remounted = HabitState::load(storage, seed);
            prop_assert!(remounted.habits().len() <= MAX_ACTIVE_HABITS);
        }
    }
}
