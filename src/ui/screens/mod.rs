//! UI screens for the application.

pub mod onboarding;
pub mod placeholder;
pub mod settings;

pub use onboarding::{complete_onboarding, OnboardingAction, OnboardingScreen};
pub use placeholder::PlaceholderScreen;
pub use settings::SettingsScreen;
