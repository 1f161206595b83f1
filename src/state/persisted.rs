//! Persisted - Storage-Mirrored Feature State
//!
//! Shared load/write discipline for every feature collection:
//!
//! ```text
//! mount:     get(key) ── absent ──────────► default        (Missing)
//!                     ├─ parses ──────────► stored value   (Restored)
//!                     └─ malformed, warn ─► default        (Discarded)
//!
//! mutation:  non-empty ─► set(key, json)
//!            empty     ─► remove(key)
//! ```
//!
//! Storage is read once; afterwards the in-memory value is authoritative.

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::storage::SafeStorage;

/// What was found in storage at mount time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Nothing stored under the key
    Missing,
    /// A stored value was decoded
    Restored,
    /// A stored value existed but could not be decoded
    Discarded,
}

/// Value types that can be mirrored into storage
pub trait PersistedValue: Default + Serialize + DeserializeOwned {
    /// An empty value removes the key instead of being written
    fn is_empty_value(&self) -> bool;
}

impl<T: Serialize + DeserializeOwned> PersistedValue for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> PersistedValue for BTreeMap<K, V>
where
    K: Ord + Serialize + DeserializeOwned,
    V: Serialize + DeserializeOwned,
{
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// A feature value mirrored under one storage key
#[derive(Debug, Clone)]
pub struct PersistedCollection<C> {
    key: &'static str,
    value: C,
    origin: LoadOrigin,
    storage: SafeStorage,
}

impl<C: PersistedValue> PersistedCollection<C> {
    /// Read `key` once, falling back to the default value
    pub fn load(storage: SafeStorage, key: &'static str) -> Self {
        let (value, origin) = match storage.get_item(key) {
            None => (C::default(), LoadOrigin::Missing),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => (value, LoadOrigin::Restored),
                Err(e) => {
                    warn!(key, error = %e, "Unable to parse saved state, starting fresh");
                    (C::default(), LoadOrigin::Discarded)
                }
            },
        };
        debug!(key, ?origin, "Loaded feature state");

        Self {
            key,
            value,
            origin,
            storage,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self) -> &C {
        &self.value
    }

    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    /// Mutate the value, then mirror the result to storage
    pub fn update<R>(&mut self, mutation: impl FnOnce(&mut C) -> R) -> R {
        let result = mutation(&mut self.value);
        self.persist();
        result
    }

    /// Reset to the default value and drop the stored key
    pub fn clear(&mut self) {
        self.value = C::default();
        self.persist();
    }

    fn persist(&self) {
        if self.value.is_empty_value() {
            self.storage.remove_item(self.key);
        } else {
            self.storage.save_json(self.key, &self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    const KEY: &str = "test-collection";

    #[test]
    fn missing_key_loads_default() {
        let state: PersistedCollection<Vec<u32>> =
            PersistedCollection::load(SafeStorage::in_memory(), KEY);
        assert!(state.get().is_empty());
        assert_eq!(state.origin(), LoadOrigin::Missing);
    }

    #[test]
    fn malformed_values_load_default_without_panicking() {
        for raw in ["", "{", "[1, 2", "\"text\"", "{\"a\":1}", "null", "[\"x\"]"] {
            let storage = SafeStorage::in_memory();
            storage.set_item(KEY, raw);

            let state: PersistedCollection<Vec<u32>> = PersistedCollection::load(storage, KEY);
            assert!(state.get().is_empty(), "{raw:?}");
            assert_eq!(state.origin(), LoadOrigin::Discarded, "{raw:?}");
        }
    }

    #[test]
    fn emptying_removes_the_key() {
        let store = Arc::new(MemoryStore::new());
        let storage = SafeStorage::from_arc(store.clone());
        let mut state: PersistedCollection<Vec<u32>> = PersistedCollection::load(storage, KEY);

        state.update(|items| items.push(7));
        assert!(store.contains(KEY));

        state.update(|items| items.clear());
        assert!(!store.contains(KEY));
    }

    #[test]
    fn restored_value_round_trips() {
        let storage = SafeStorage::in_memory();
        let mut first: PersistedCollection<BTreeMap<String, String>> =
            PersistedCollection::load(storage.clone(), KEY);
        first.update(|map| map.insert("talents".to_string(), "drawing".to_string()));

        let second: PersistedCollection<BTreeMap<String, String>> =
            PersistedCollection::load(storage, KEY);
        assert_eq!(second.origin(), LoadOrigin::Restored);
        assert_eq!(second.get(), first.get());
    }

    mod round_trip {
        use super::super::{PersistedCollection, PersistedValue};
        use super::KEY;
        use crate::storage::SafeStorage;
        use crate::domain::diary::{DiaryEntry, Mood};
        use crate::domain::habit::HabitRecord;
        use crate::domain::routine::{RoutineCategory, RoutineItem};
        use chrono::{DateTime, Days, NaiveDate, Utc};
        use proptest::prelude::*;
        use std::fmt::Debug;

        /// Store through one collection, read back through a fresh one
        fn reload<C: PersistedValue + Clone + PartialEq + Debug>(value: C) -> C {
            let storage = SafeStorage::in_memory();
            let mut first: PersistedCollection<C> =
                PersistedCollection::load(storage.clone(), KEY);
            first.update(|stored| *stored = value);
            PersistedCollection::<C>::load(storage, KEY).get().clone()
        }

        fn instant() -> impl Strategy<Value = DateTime<Utc>> {
            (0i64..4_000_000_000_000)
                .prop_map(|ms| DateTime::from_timestamp_millis(ms).expect("in range"))
        }

        fn day() -> impl Strategy<Value = NaiveDate> {
            (0u64..3650).prop_map(|offset| {
                NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date") + Days::new(offset)
            })
        }

        fn habit() -> impl Strategy<Value = HabitRecord> {
            (
                "[a-z-]{1,12}",
                "\\PC{0,16}",
                "\\PC{0,24}",
                prop::collection::btree_set(day(), 0..10),
            )
                .prop_map(|(id, name, description, completed_dates)| HabitRecord {
                    id,
                    name,
                    description,
                    icon: "star".to_string(),
                    color: "purple".to_string(),
                    completed_dates,
                })
        }

        fn routine_item() -> impl Strategy<Value = RoutineItem> {
            (
                "[a-z-]{1,12}",
                "\\PC{0,16}",
                prop::sample::select(RoutineCategory::ALL.to_vec()),
            )
                .prop_map(|(id, name, category)| RoutineItem {
                    id,
                    name,
                    icon: String::new(),
                    category,
                })
        }

        fn diary_entry() -> impl Strategy<Value = DiaryEntry> {
            (prop::sample::select(Mood::ALL.to_vec()), "\\PC{0,40}", instant())
                .prop_filter_map("blank content", |(mood, content, now)| {
                    DiaryEntry::new(mood, &content, now)
                })
        }

        proptest! {
            #[test]
            fn habits_survive_a_reload(habits in prop::collection::vec(habit(), 0..4)) {
                prop_assert_eq!(reload(habits.clone()), habits);
            }

            #[test]
            fn routine_items_survive_a_reload(
                items in prop::collection::vec(routine_item(), 0..8)
            ) {
                prop_assert_eq!(reload(items.clone()), items);
            }

            #[test]
            fn diary_entries_survive_a_reload(
                entries in prop::collection::vec(diary_entry(), 0..8)
            ) {
                prop_assert_eq!(reload(entries.clone()), entries);
            }
        }
    }
}
