//! ReflectionState - "What I Like About Me" Answers

use super::persisted::{LoadOrigin, PersistedCollection};
use crate::constants::REFLECTION_KEY;
use crate::domain::reflection::{ReflectionAnswers, ReflectionSection};
use crate::storage::SafeStorage;

#[derive(Debug, Clone)]
pub struct ReflectionState {
    answers: PersistedCollection<ReflectionAnswers>,
}

impl ReflectionState {
    pub fn load(storage: SafeStorage) -> Self {
        Self {
            answers: PersistedCollection::load(storage, REFLECTION_KEY),
        }
    }

    /// Whether saved answers were found when the page was opened
    pub fn was_restored(&self) -> bool {
        self.answers.origin() == LoadOrigin::Restored
    }

    pub fn answers(&self) -> &ReflectionAnswers {
        self.answers.get()
    }

    pub fn answer(&self, section_id: &str) -> Option<&str> {
        self.answers.get().get(section_id).map(String::as_str)
    }

    /// Store the text for a section; blank text clears it
    pub fn set_answer(&mut self, section_id: &str, text: &str) {
        self.answers.update(|answers| {
            if text.trim().is_empty() {
                answers.remove(section_id);
            } else {
                answers.insert(section_id.to_string(), text.to_string());
            }
        });
    }

    /// Number of `sections` with an answer
    pub fn answered_count(&self, sections: &[ReflectionSection]) -> usize {
        sections
            .iter()
            .filter(|section| self.answers.get().contains_key(&section.id))
            .count()
    }

    /// Drop every answer and the stored key
    pub fn reset(&mut self) {
        self.answers.clear();
    }
}
