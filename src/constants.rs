//! Storage keys and fixed limits
//!
//! Keys match the layout already present in users' browsers, so blobs
//! written by earlier builds keep loading.

/// Selected language code (bare string, not JSON)
pub const LANGUAGE_KEY: &str = "app-language";

/// Onboarding sentinel, holds [`WELCOME_COMPLETED_VALUE`] once finished
pub const WELCOME_KEY: &str = "welcomeCompleted";
pub const WELCOME_COMPLETED_VALUE: &str = "true";

/// Mood diary entries (JSON array)
pub const DIARY_KEY: &str = "puberty-diary";

/// Confidence habit (JSON array, at most one element)
pub const HABITS_KEY: &str = "confidence-habits";

/// Hygiene routine builder items (JSON array)
pub const ROUTINE_KEY: &str = "hygiene-routine";

/// "What I like about me" reflection answers (JSON object)
pub const REFLECTION_KEY: &str = "what-i-like-progress";

/// Cross-feature progress aggregate (JSON object)
pub const PROGRESS_KEY: &str = "parenting-hub-progress";

/// Maximum number of simultaneously active habits
pub const MAX_ACTIVE_HABITS: usize = 1;

/// Completions needed before the habit milestone message is shown
pub const HABIT_MILESTONE_DAYS: usize = 7;

/// Timeline, matching, diary, hygiene, confidence, quiz
pub const DEFAULT_TRACKABLE_ACTIVITIES: u32 = 6;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "parenting-hub.toml";
