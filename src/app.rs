//! Main application state and egui integration.
//!
//! Owns the navigation stack and the key-value store, and routes each
//! frame to the screen on top of the stack.

use eframe::egui;

use revo::input::SwipeRecognizer;
use revo::navigation::{NavigationStack, Navigator, Route};
use revo::settings::ViewMode;
use revo::storage::{AppConfig, FileStore, KeyValueStore, MemoryStore};
use revo::ui::screens::{OnboardingAction, OnboardingScreen, PlaceholderScreen, SettingsScreen};
use revo::ui::widgets::NavigationBar;
use revo::ui::Theme;

/// Main application state.
pub struct RevoApp {
    /// Visited screens
    nav: NavigationStack,
    /// Persistent key-value storage
    store: Box<dyn KeyValueStore>,
    /// Settings screen, rebuilt after onboarding completes
    settings_screen: SettingsScreen,
    /// Onboarding screen
    onboarding_screen: OnboardingScreen,
    /// Theme currently applied to the context
    theme: Theme,
    /// Application configuration
    config: AppConfig,
}

impl RevoApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let store = open_store(&config);

        let settings_screen = build_settings_screen(&config);
        let theme = settings_screen.theme();
        cc.egui_ctx.set_visuals(theme.visuals());

        Self {
            nav: NavigationStack::new(Route::Settings),
            store,
            settings_screen,
            onboarding_screen: OnboardingScreen::new(),
            theme,
            config,
        }
    }

    /// Apply the theme picked by the dark mode setting, if it changed.
    fn sync_theme(&mut self, ctx: &egui::Context) {
        let theme = self.settings_screen.theme();
        if theme != self.theme {
            tracing::debug!("Switching theme to {:?}", theme);
            self.theme = theme;
            ctx.set_visuals(theme.visuals());
        }
    }

    /// Escape closes the innermost settings layer, then pops the stack.
    fn handle_escape(&mut self) {
        if self.nav.current() == Route::Settings
            && self.settings_screen.controller().view() != ViewMode::Main
        {
            self.settings_screen.controller_mut().back();
        } else {
            self.nav.go_back();
        }
    }
}

impl eframe::App for RevoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.nav.current() == Route::Settings && !self.settings_screen.controller().is_mounted() {
            self.settings_screen.on_mount(&*self.store, &mut self.nav);
        }

        self.sync_theme(ctx);
        let palette = self.theme.palette();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.handle_escape();
        }

        if self.nav.current() != Route::OnBoarding {
            egui::TopBottomPanel::bottom("nav_bar").show(ctx, |ui| {
                if let Some(route) = NavigationBar::show(ui, palette) {
                    self.nav.navigate(route);
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.nav.current() {
            Route::OnBoarding => {
                if let Some(OnboardingAction::Completed) =
                    self.onboarding_screen.show(ui, palette, &mut *self.store)
                {
                    self.settings_screen = build_settings_screen(&self.config);
                    self.nav.reset(Route::Settings);
                }
            }
            Route::Settings => {
                self.settings_screen
                    .show(ui, &mut self.nav, &mut *self.store);
            }
            route => {
                if PlaceholderScreen::show(ui, palette, route) {
                    self.nav.go_back();
                }
            }
        });

        if self.nav.current() != Route::Settings {
            self.settings_screen.on_hide();
        }
    }
}

/// Open the configured storage file, falling back to memory on failure.
fn open_store(config: &AppConfig) -> Box<dyn KeyValueStore> {
    let path = config.storage_path();
    match FileStore::open(path.clone()) {
        Ok(store) => {
            tracing::info!("Using storage at {}", path.display());
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to open storage at {}: {}. Values will not persist.",
                path.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    }
}

/// Fresh settings screen seeded from configuration.
fn build_settings_screen(config: &AppConfig) -> SettingsScreen {
    let swipe = SwipeRecognizer::with_threshold(config.gestures.swipe_threshold);
    let mut screen = SettingsScreen::new(swipe);

    if config.theme.follow_system {
        let dark = !matches!(dark_light::detect(), dark_light::Mode::Light);
        tracing::debug!("Seeding dark mode from system theme: {}", dark);
        screen.controller_mut().set_dark_mode(dark);
    }

    screen
}
