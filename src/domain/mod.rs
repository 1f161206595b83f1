//! Domain - Pure Data Structures
//!
//! Persisted entities and game rules. Nothing here touches storage; the
//! `state` layer owns loading and writing these types.

pub mod config;
pub mod diary;
pub mod game;
pub mod habit;
pub mod progress;
pub mod reflection;
pub mod routine;
