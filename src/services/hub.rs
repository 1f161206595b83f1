//! Hub Context
//!
//! The single owner of everything a session needs: config, the storage
//! handle, the language context and the progress aggregate. Feature reducers
//! are mounted from here and share its storage handle; each one only ever
//! touches its own key.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::document_swap::{self, SharedLanguage};
use crate::domain::config::{HubConfig, StorageBackend, StorageConfig};
use crate::domain::diary::{DiaryEntry, Mood};
use crate::domain::game::{
    LikeCategory, QuizQuestion, QuizSession, Score, SortingGame, SortingItem,
};
use crate::domain::habit::HabitRecord;
use crate::domain::reflection::ReflectionSection;
use crate::domain::routine::{RoutineCategory, RoutineTemplate};
use crate::error::{Error, Result};
use crate::i18n::{
    DocumentSink, DocumentSource, EmbeddedCatalog, Language, NoopSink, TextDirection, translate,
};
use crate::state::{
    DiaryState, HabitState, LanguageContext, OnboardingState, ProgressTracker, ReflectionState,
    RoutineState,
};
use crate::storage::{FileStore, MemoryStore, SafeStorage};

/// Activity id recorded when a quiz is finished
pub const QUIZ_ACTIVITY_ID: &str = "quiz";

/// Counts shown on the progress page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub percent: u32,
    pub completed_activities: usize,
    pub quizzes: usize,
    pub diary_entries: u32,
}

pub struct HubContext {
    config: HubConfig,
    storage: SafeStorage,
    source: Arc<dyn DocumentSource>,
    language: SharedLanguage,
    progress: ProgressTracker,
}

impl HubContext {
    /// Boot a session over an existing storage handle
    ///
    /// The current language's document is loaded before returning. A failed
    /// load is logged and the session starts with keys as display text.
    pub fn init(
        config: HubConfig,
        storage: SafeStorage,
        source: Arc<dyn DocumentSource>,
        sink: Arc<dyn DocumentSink>,
    ) -> Self {
        let mut language =
            LanguageContext::init(storage.clone(), sink, config.i18n.default_language);
        if let Err(e) = language.reload(source.as_ref()) {
            warn!(language = %language.language(), error = %e, "Failed to load translations");
        }

        let progress =
            ProgressTracker::load(storage.clone(), config.progress.trackable_activities);

        Self {
            config,
            storage,
            source,
            language: Arc::new(RwLock::new(language)),
            progress,
        }
    }

    /// Boot with the configured backend and the embedded translations
    pub fn open(config: HubConfig) -> Result<Self> {
        let storage = open_storage(&config.storage)?;
        Ok(Self::init(
            config,
            storage,
            Arc::new(EmbeddedCatalog),
            Arc::new(NoopSink),
        ))
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub fn storage(&self) -> &SafeStorage {
        &self.storage
    }

    /// Shared handle for hosts that drive loads themselves
    pub fn language_handle(&self) -> SharedLanguage {
        self.language.clone()
    }

    // ==================== Language ====================

    pub fn language(&self) -> Language {
        self.language
            .read()
            .map(|ctx| ctx.language())
            .unwrap_or(self.config.i18n.default_language)
    }

    pub fn direction(&self) -> TextDirection {
        self.language().direction()
    }

    /// Display text for `key`, or the key itself
    pub fn t(&self, key: &str) -> String {
        match self.language.read() {
            Ok(ctx) => ctx.t(key),
            Err(_) => translate(None, key),
        }
    }

    pub fn t_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.language.read().ok()?.t_as(key)
    }

    pub fn t_format(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.language.read() {
            Ok(ctx) => ctx.t_format(key, args),
            Err(_) => translate(None, key),
        }
    }

    /// Switch language and load its document before returning
    pub fn set_language(&self, language: Language) -> Result<()> {
        let mut ctx = self.language.write().map_err(|_| Error::Task {
            message: "language context lock poisoned".to_string(),
        })?;
        ctx.set_language(language, self.source.as_ref())
    }

    /// Switch language, awaiting the document load
    pub async fn switch_language(&self, language: Language) -> Result<bool> {
        document_swap::switch_language(self.language.clone(), self.source.clone(), language).await
    }

    /// Switch language, loading the document in the background
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn_language_switch(&self, language: Language) -> Result<JoinHandle<()>> {
        document_swap::spawn_language_switch(self.language.clone(), self.source.clone(), language)
    }

    /// Switch language, loading the document on the browser event loop
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    pub fn spawn_language_switch(&self, language: Language) -> Result<()> {
        document_swap::spawn_language_switch(self.language.clone(), self.source.clone(), language)
    }

    // ==================== Feature Mounts ====================

    pub fn diary(&self) -> DiaryState {
        DiaryState::load(self.storage.clone())
    }

    /// Mount the habit tracker, seeding from the current catalog
    pub fn habits(&self) -> HabitState {
        HabitState::load(self.storage.clone(), &self.habit_catalog())
    }

    pub fn routine(&self) -> RoutineState {
        RoutineState::load(self.storage.clone())
    }

    pub fn reflection(&self) -> ReflectionState {
        ReflectionState::load(self.storage.clone())
    }

    pub fn onboarding(&self) -> OnboardingState {
        OnboardingState::new(self.storage.clone())
    }

    // ==================== Catalogs ====================

    /// Picker label for `mood`, emoji first
    pub fn mood_label(&self, mood: Mood) -> String {
        format!("{} {}", mood.emoji(), self.t(mood.label_key()))
    }

    /// Heading of a routine column
    pub fn category_label(&self, category: RoutineCategory) -> String {
        self.t(category.label_key())
    }

    pub fn habit_catalog(&self) -> Vec<HabitRecord> {
        self.t_as("confidencePage.habits").unwrap_or_default()
    }

    pub fn routine_templates(&self) -> Vec<RoutineTemplate> {
        self.t_as("hygiene.items").unwrap_or_default()
    }

    pub fn reflection_sections(&self) -> Vec<ReflectionSection> {
        self.t_as("whatILike.sections").unwrap_or_default()
    }

    /// Quiz over the questions under `<section>.questions`
    pub fn quiz(&self, section: &str) -> QuizSession {
        let questions: Vec<QuizQuestion> = self
            .t_as(&format!("{section}.questions"))
            .unwrap_or_default();
        QuizSession::new(questions)
    }

    /// Summary message for a finished quiz in `section`
    pub fn quiz_summary(&self, section: &str, score: Score) -> String {
        self.t(&format!("{section}.{}", score.band().summary_key()))
    }

    pub fn confidence_game(&self) -> SortingGame<LikeCategory> {
        SortingGame::new(self.t_as("confidencePage.game.items").unwrap_or_default())
    }

    pub fn hygiene_game(&self) -> SortingGame<RoutineCategory> {
        let items: Vec<SortingItem<RoutineCategory>> =
            self.t_as("hygiene.game.items").unwrap_or_default();
        SortingGame::new(items)
    }

    // ==================== Progress ====================

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn progress_mut(&mut self) -> &mut ProgressTracker {
        &mut self.progress
    }

    /// Write a diary entry and bump the progress counter
    ///
    /// Two independent writes; a failure between them is not rolled back.
    pub fn record_diary_entry(
        &mut self,
        diary: &mut DiaryState,
        mood: Mood,
        content: &str,
    ) -> Option<DiaryEntry> {
        let entry = diary.add_entry(mood, content)?;
        self.progress.add_diary_entry();
        Some(entry)
    }

    /// Record a finished quiz and mark the quiz activity complete
    pub fn complete_quiz(&mut self, quiz_id: &str, score: Score) {
        self.progress.mark_quiz_complete(quiz_id, score.correct, score.total);
        self.progress.mark_activity_complete(QUIZ_ACTIVITY_ID, Some(score.points()));
    }

    pub fn progress_summary(&self) -> ProgressSummary {
        let data = self.progress.data();
        ProgressSummary {
            percent: self.progress.overall_progress(),
            completed_activities: data.completed_activity_count(),
            quizzes: data.quiz_count(),
            diary_entries: data.diary_entries,
        }
    }
}

/// Open the key-value backend named by `config`
pub fn open_storage(config: &StorageConfig) -> Result<SafeStorage> {
    let storage = match config.backend {
        StorageBackend::Memory => SafeStorage::new(MemoryStore::new()),
        StorageBackend::File => {
            let store = match &config.dir {
                Some(dir) => FileStore::open(dir)?,
                None => FileStore::in_data_dir()?,
            };
            info!(root = ?store.root(), "Using file storage");
            SafeStorage::new(store)
        }
    };
    Ok(storage)
}
