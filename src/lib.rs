//! Parenting Hub Library
//!
//! Offline-first state for a puberty-education companion: a localized
//! translation resolver, storage-backed feature reducers (mood diary,
//! confidence habit, hygiene routine, reflection journal, onboarding), the
//! cross-feature progress aggregate and the quiz/sorting game rules.

pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod storage;
