//! Onboarding screen.
//!
//! Collects a display name and marks onboarding as completed so the
//! settings screen stops redirecting here.

use chrono::{DateTime, FixedOffset, Utc};
use egui::{Align, Layout, RichText, Ui};

use crate::storage::{
    KeyValueStore, StorageError, ONBOARDING_COMPLETED_KEY, USER_CREATED_AT_KEY, USER_NAME_KEY,
};
use crate::ui::theme::Palette;

/// Action requested by the onboarding screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAction {
    /// The flag was written; leave onboarding
    Completed,
}

/// Onboarding screen state.
#[derive(Debug, Default)]
pub struct OnboardingScreen {
    /// Name being typed
    name: String,
    /// Last storage failure, shown under the button
    error: Option<String>,
}

impl OnboardingScreen {
    /// Create a new onboarding screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the onboarding screen.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        palette: Palette,
        store: &mut dyn KeyValueStore,
    ) -> Option<OnboardingAction> {
        let mut action = None;

        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(120.0);
            ui.label(RichText::new("Welcome to Revo").size(32.0).strong().color(palette.text));
            ui.add_space(12.0);
            ui.label(
                RichText::new("Record your day by voice, one step at a time.")
                    .size(18.0)
                    .color(palette.text_muted),
            );
            ui.add_space(40.0);

            ui.label(RichText::new("What should we call you?").color(palette.text));
            ui.add(
                egui::TextEdit::singleline(&mut self.name)
                    .hint_text("Name")
                    .desired_width(240.0),
            );
            ui.add_space(24.0);

            let button = egui::Button::new(RichText::new("Get started").size(20.0))
                .min_size(egui::vec2(240.0, 56.0));
            if ui.add(button).clicked() {
                match complete_onboarding(store, &self.name, Utc::now()) {
                    Ok(()) => {
                        self.error = None;
                        action = Some(OnboardingAction::Completed);
                    }
                    Err(e) => {
                        tracing::error!("Failed to complete onboarding: {}", e);
                        self.error = Some(e.to_string());
                    }
                }
            }

            if let Some(error) = &self.error {
                ui.add_space(8.0);
                ui.label(RichText::new(error).color(palette.danger));
            }
        });

        action
    }
}

/// Store the user's name, first-seen time and the completion flag.
///
/// A blank name leaves any stored name alone; an existing creation time is
/// kept so the day count survives logging out and back in.
pub fn complete_onboarding(
    store: &mut dyn KeyValueStore,
    name: &str,
    now: DateTime<Utc>,
) -> Result<(), StorageError> {
    let name = name.trim();
    if !name.is_empty() {
        store.set(USER_NAME_KEY, name)?;
    }

    if store.get(USER_CREATED_AT_KEY)?.is_none() {
        let created_at = match FixedOffset::east_opt(9 * 3600) {
            Some(kst) => now.with_timezone(&kst).to_rfc3339(),
            None => now.to_rfc3339(),
        };
        store.set(USER_CREATED_AT_KEY, &created_at)?;
    }

    store.set(ONBOARDING_COMPLETED_KEY, "true")?;
    tracing::info!("Onboarding completed");
    Ok(())
}
