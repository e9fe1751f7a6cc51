//! Integration test modules.

mod onboarding_redirect_test;
mod settings_flow_test;
mod settings_screen_test;
