//! Routine - Hygiene Routine Builder Items

use serde::{Deserialize, Serialize};

/// Time of day an item is scheduled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineCategory {
    Morning,
    Afternoon,
    Evening,
}

impl RoutineCategory {
    pub const ALL: [RoutineCategory; 3] = [
        RoutineCategory::Morning,
        RoutineCategory::Afternoon,
        RoutineCategory::Evening,
    ];

    /// Translation key of the category heading
    pub fn label_key(self) -> &'static str {
        match self {
            RoutineCategory::Morning => "hygiene.categories.morning",
            RoutineCategory::Afternoon => "hygiene.categories.afternoon",
            RoutineCategory::Evening => "hygiene.categories.evening",
        }
    }
}

/// Catalog entry that can be placed into the routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl RoutineTemplate {
    /// Place this template into `category`
    pub fn place(&self, category: RoutineCategory) -> RoutineItem {
        RoutineItem {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            category,
        }
    }
}

/// An item placed in the user's routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub category: RoutineCategory,
}
