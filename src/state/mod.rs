//! State - Feature Reducers Backed by Storage
//!
//! Each module owns one storage key and mirrors its value there after every
//! mutation. The language context is the only state shared across threads.

mod diary_state;
mod habit_state;
mod i18n_state;
mod onboarding_state;
mod persisted;
mod progress_state;
mod reflection_state;
mod routine_state;

pub use diary_state::*;
pub use habit_state::*;
pub use i18n_state::*;
pub use onboarding_state::*;
pub use persisted::*;
pub use progress_state::*;
pub use reflection_state::*;
pub use routine_state::*;
