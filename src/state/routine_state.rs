//! RoutineState - Hygiene Routine Builder

use tracing::debug;

use super::persisted::PersistedCollection;
use crate::constants::ROUTINE_KEY;
use crate::domain::routine::{RoutineCategory, RoutineItem, RoutineTemplate};
use crate::storage::SafeStorage;

/// Items placed into morning/afternoon/evening slots
///
/// An item id appears at most once, so an item is never in two slots.
#[derive(Debug, Clone)]
pub struct RoutineState {
    items: PersistedCollection<Vec<RoutineItem>>,
}

impl RoutineState {
    pub fn load(storage: SafeStorage) -> Self {
        Self {
            items: PersistedCollection::load(storage, ROUTINE_KEY),
        }
    }

    pub fn items(&self) -> &[RoutineItem] {
        self.items.get()
    }

    pub fn items_in(&self, category: RoutineCategory) -> Vec<&RoutineItem> {
        self.items
            .get()
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.get().iter().any(|item| item.id == id)
    }

    /// Place `template` into `category`; ignored if already placed
    pub fn add_item(&mut self, template: &RoutineTemplate, category: RoutineCategory) -> bool {
        if self.contains(&template.id) {
            debug!(id = %template.id, "Routine item already placed");
            return false;
        }
        self.items.update(|items| items.push(template.place(category)));
        true
    }

    /// Reassign an existing item to `category`
    pub fn move_item(&mut self, id: &str, category: RoutineCategory) -> bool {
        let Some(index) = self.items.get().iter().position(|item| item.id == id) else {
            return false;
        };
        if self.items.get()[index].category == category {
            return false;
        }
        self.items.update(|items| items[index].category = category);
        true
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let Some(index) = self.items.get().iter().position(|item| item.id == id) else {
            return false;
        };
        self.items.update(|items| items.remove(index));
        true
    }
}
