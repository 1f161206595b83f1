//! OnboardingState - Welcome Flow Sentinel

use tracing::{debug, info};

use crate::constants::{WELCOME_COMPLETED_VALUE, WELCOME_KEY};
use crate::storage::SafeStorage;

/// Route of the welcome flow itself
pub const WELCOME_ROUTE: &str = "/welcome";

#[derive(Debug, Clone)]
pub struct OnboardingState {
    storage: SafeStorage,
}

impl OnboardingState {
    pub fn new(storage: SafeStorage) -> Self {
        Self { storage }
    }

    /// Any non-empty stored value counts as completed
    pub fn is_completed(&self) -> bool {
        self.storage
            .get_item(WELCOME_KEY)
            .is_some_and(|value| !value.is_empty())
    }

    /// Finish onboarding; only written once privacy was accepted
    pub fn complete(&self, privacy_accepted: bool) -> bool {
        if !privacy_accepted {
            debug!("Privacy notice not accepted, onboarding stays open");
            return false;
        }
        self.storage.set_item(WELCOME_KEY, WELCOME_COMPLETED_VALUE);
        info!("Onboarding completed");
        true
    }

    /// Whether a visit to `route` must be sent to the welcome flow first
    pub fn should_redirect_to_welcome(&self, route: &str) -> bool {
        route != WELCOME_ROUTE && !self.is_completed()
    }
}
