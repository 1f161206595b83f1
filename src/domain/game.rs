//! Game - Quiz and Sorting Game Rules
//!
//! Every game moves forward through the same three phases and can only go
//! back by an explicit reset:
//!
//! ```text
//! Intro ──start──► Playing ──last answer──► Finished
//!   ▲                                          │
//!   └───────────────── reset ──────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Points awarded per correct answer in the quiz mini-game
pub const POINTS_PER_CORRECT: u32 = 10;

/// Phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Intro,
    Playing,
    Finished,
}

/// Correct answers out of total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    pub fn points(self) -> u32 {
        self.correct * POINTS_PER_CORRECT
    }

    pub fn band(self) -> ScoreBand {
        if self.correct == self.total {
            ScoreBand::Perfect
        } else if self.correct >= self.total.div_ceil(2) {
            ScoreBand::Good
        } else {
            ScoreBand::KeepGoing
        }
    }
}

/// Summary message tier for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    Good,
    KeepGoing,
}

impl ScoreBand {
    /// Key of the summary message, relative to a quiz section
    pub fn summary_key(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "summary.perfect",
            ScoreBand::Good => "summary.good",
            ScoreBand::KeepGoing => "summary.keepGoing",
        }
    }
}

// ==================== Quiz ====================

/// One multiple-choice question as stored in the translation document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub correct_feedback: String,
    #[serde(default)]
    pub incorrect_feedback: String,
    #[serde(default)]
    pub icon: String,
}

/// A run through an ordered list of questions
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<usize>>,
    current: usize,
    phase: GamePhase,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            questions,
            answers,
            current: 0,
            phase: GamePhase::Intro,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            GamePhase::Playing => self.questions.get(self.current),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Whether the current selection is right, `None` before answering
    pub fn is_current_correct(&self) -> Option<bool> {
        let question = self.questions.get(self.current)?;
        self.selected().map(|answer| answer == question.correct_index)
    }

    /// Leave the intro; an empty quiz finishes immediately
    pub fn start(&mut self) {
        if self.phase != GamePhase::Intro {
            return;
        }
        self.phase = if self.questions.is_empty() {
            GamePhase::Finished
        } else {
            GamePhase::Playing
        };
    }

    /// Pick an option for the current question
    ///
    /// Ignored outside `Playing` or for an out-of-range option.
    pub fn select(&mut self, option: usize) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let Some(question) = self.questions.get(self.current) else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }
        self.answers[self.current] = Some(option);
        true
    }

    /// Move past an answered question, finishing after the last one
    pub fn advance(&mut self) -> GamePhase {
        if self.phase == GamePhase::Playing && self.selected().is_some() {
            if self.current + 1 < self.questions.len() {
                self.current += 1;
            } else {
                self.phase = GamePhase::Finished;
            }
        }
        self.phase
    }

    pub fn score(&self) -> Score {
        let correct = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| **answer == Some(question.correct_index))
            .count();
        Score {
            correct: correct as u32,
            total: self.questions.len() as u32,
        }
    }

    /// Clear answers and return to the intro
    pub fn reset(&mut self) {
        self.answers = vec![None; self.questions.len()];
        self.current = 0;
        self.phase = GamePhase::Intro;
    }
}

// ==================== Sorting ====================

/// Confidence game bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LikeCategory {
    Good,
    NotGood,
}

/// Item to drop into one of several bins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingItem<C> {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub category: C,
}

/// Drag-into-bins game, answers lock on submit
#[derive(Debug, Clone)]
pub struct SortingGame<C> {
    items: Vec<SortingItem<C>>,
    answers: HashMap<String, C>,
    submitted: bool,
}

impl<C: Copy + PartialEq> SortingGame<C> {
    pub fn new(items: Vec<SortingItem<C>>) -> Self {
        Self {
            items,
            answers: HashMap::new(),
            submitted: false,
        }
    }

    pub fn items(&self) -> &[SortingItem<C>] {
        &self.items
    }

    pub fn answer_for(&self, item_id: &str) -> Option<C> {
        self.answers.get(item_id).copied()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn phase(&self) -> GamePhase {
        if self.submitted {
            GamePhase::Finished
        } else if self.answers.is_empty() {
            GamePhase::Intro
        } else {
            GamePhase::Playing
        }
    }

    /// Put an item in a bin; ignored after submit or for unknown items
    pub fn answer(&mut self, item_id: &str, category: C) -> bool {
        if self.submitted || !self.items.iter().any(|item| item.id == item_id) {
            return false;
        }
        self.answers.insert(item_id.to_string(), category);
        true
    }

    pub fn submit(&mut self) {
        self.submitted = true;
    }

    pub fn score(&self) -> Score {
        let correct = self
            .items
            .iter()
            .filter(|item| self.answers.get(&item.id) == Some(&item.category))
            .count();
        Score {
            correct: correct as u32,
            total: self.items.len() as u32,
        }
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.submitted = false;
    }
}
