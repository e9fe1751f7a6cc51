//! Settings state machine.
//!
//! Owns the current view, the step of each paged flow, the overlays
//! layered on top of them and every setting value. Rendering code reads
//! [`SettingsController::panel`] and feeds taps and touch events back in.

use chrono::Weekday;

use super::accessibility::{
    AccessibilitySettings, AccessibilityStep, FontSize, Gesture, GestureAction, GestureBindings,
};
use super::friends::{FriendList, FRIEND_LIST_PAGES};
use super::notifications::{NotificationPage, NotificationSettings};
use super::pager::{PagedFlow, Pager};
use super::privacy::{PrivacyPage, PrivacySettings};
use super::user::UserSummary;
use crate::input::{SwipeRecognizer, TouchEvent, TouchSource};
use crate::navigation::{Navigator, Route};
use crate::storage::{KeyValueStore, ONBOARDING_COMPLETED_KEY};

/// Which top-level view the settings screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Menu list
    #[default]
    Main,
    Accessibility,
    Privacy,
    Notifications,
    Friends,
    Other,
}

impl ViewMode {
    /// Header title for this view.
    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::Main => "Settings",
            ViewMode::Accessibility => "Accessibility",
            ViewMode::Privacy => "Privacy",
            ViewMode::Notifications => "Notifications & reminders",
            ViewMode::Friends => "Friends",
            ViewMode::Other => "Other",
        }
    }
}

/// Everything that can be on screen, one variant per distinct layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPanel {
    Main,
    Accessibility(AccessibilityStep),
    /// Gesture bindings list, optionally with the action selector open
    GestureMenu { selecting: Option<Gesture> },
    Privacy(PrivacyPage),
    Notifications(NotificationPage),
    /// Weekday picker for record reminders
    ReminderDays,
    Friends,
    FriendList(FriendList),
    Other,
}

/// Page indicator binding for the current panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    pub current: usize,
    pub total: usize,
}

/// Settings screen state.
#[derive(Debug)]
pub struct SettingsController {
    view: ViewMode,
    accessibility_flow: PagedFlow<AccessibilityStep>,
    privacy_flow: PagedFlow<PrivacyPage>,
    notification_flow: PagedFlow<NotificationPage>,
    friend_pager: Pager,
    /// Open friend management list, if any
    friend_list: Option<FriendList>,
    gesture_menu_open: bool,
    /// Gesture whose action selector is open
    action_selector: Option<Gesture>,
    day_selector_open: bool,
    /// Accessibility values
    pub accessibility: AccessibilitySettings,
    /// Gesture bindings
    pub gesture_bindings: GestureBindings,
    /// Privacy values
    pub privacy: PrivacySettings,
    /// Notification values
    pub notifications: NotificationSettings,
    /// Header info on the main view
    pub user: UserSummary,
    swipe: SwipeRecognizer,
    mounted: bool,
}

impl Default for SettingsController {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsController {
    /// Create a controller on the main view with default values.
    pub fn new() -> Self {
        Self::with_swipe(SwipeRecognizer::new())
    }

    /// Create a controller using a specific swipe recogniser.
    pub fn with_swipe(swipe: SwipeRecognizer) -> Self {
        Self {
            view: ViewMode::Main,
            accessibility_flow: PagedFlow::new(),
            privacy_flow: PagedFlow::new(),
            notification_flow: PagedFlow::new(),
            friend_pager: Pager::new(FRIEND_LIST_PAGES),
            friend_list: None,
            gesture_menu_open: false,
            action_selector: None,
            day_selector_open: false,
            accessibility: AccessibilitySettings::default(),
            gesture_bindings: GestureBindings::default(),
            privacy: PrivacySettings::default(),
            notifications: NotificationSettings::default(),
            user: UserSummary::default(),
            swipe,
            mounted: false,
        }
    }

    // ---- lifecycle ----

    /// Run the mount-time checks. Only the first call has any effect.
    ///
    /// Redirects to onboarding unless the stored flag is exactly `"true"`.
    /// Returns true if a redirect was issued.
    pub fn on_mount(&mut self, store: &dyn KeyValueStore, nav: &mut dyn Navigator) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;

        let flag = match store.get(ONBOARDING_COMPLETED_KEY) {
            Ok(flag) => flag,
            Err(e) => {
                tracing::warn!("Could not read onboarding flag: {}", e);
                None
            }
        };

        if flag.as_deref() == Some("true") {
            self.user = UserSummary::load(store);
            false
        } else {
            tracing::info!("Onboarding not completed, redirecting");
            nav.navigate(Route::OnBoarding);
            true
        }
    }

    /// Whether [`SettingsController::on_mount`] has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Clear the onboarding flag and send the user back to onboarding.
    pub fn logout(&mut self, store: &mut dyn KeyValueStore, nav: &mut dyn Navigator) {
        if let Err(e) = store.remove(ONBOARDING_COMPLETED_KEY) {
            tracing::warn!("Could not clear onboarding flag: {}", e);
        }
        self.user = UserSummary::default();
        self.open(ViewMode::Main);
        tracing::info!("Logged out");
        nav.navigate(Route::OnBoarding);
    }

    // ---- views ----

    /// Current view.
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch views. Entering a view always starts it fresh.
    pub fn open(&mut self, view: ViewMode) {
        tracing::debug!("Settings view {:?} -> {:?}", self.view, view);
        self.view = view;
        self.swipe.cancel();

        match view {
            ViewMode::Accessibility => {
                self.accessibility_flow.reset();
                self.close_gesture_menu();
            }
            ViewMode::Privacy => self.privacy_flow.reset(),
            ViewMode::Notifications => {
                self.notification_flow.reset();
                self.day_selector_open = false;
            }
            ViewMode::Friends => {
                self.friend_list = None;
                self.friend_pager.reset();
            }
            ViewMode::Other => {}
            ViewMode::Main => {
                self.accessibility_flow.reset();
                self.privacy_flow.reset();
                self.notification_flow.reset();
                self.close_gesture_menu();
                self.day_selector_open = false;
                self.friend_list = None;
            }
        }
    }

    /// Header back button: closes the innermost overlay, else returns to
    /// the main menu.
    pub fn back(&mut self) {
        match self.view {
            ViewMode::Accessibility
                if self.gesture_menu_open
                    && self.accessibility_flow.page() == AccessibilityStep::Gesture =>
            {
                self.close_gesture_menu();
            }
            ViewMode::Notifications if self.day_selector_open => {
                self.day_selector_open = false;
            }
            ViewMode::Friends if self.friend_list.is_some() => {
                self.friend_list = None;
            }
            _ => self.open(ViewMode::Main),
        }
    }

    /// The panel to render.
    pub fn panel(&self) -> SettingsPanel {
        match self.view {
            ViewMode::Main => SettingsPanel::Main,
            ViewMode::Accessibility => {
                let step = self.accessibility_flow.page();
                if step == AccessibilityStep::Gesture && self.gesture_menu_open {
                    SettingsPanel::GestureMenu {
                        selecting: self.action_selector,
                    }
                } else {
                    SettingsPanel::Accessibility(step)
                }
            }
            ViewMode::Privacy => SettingsPanel::Privacy(self.privacy_flow.page()),
            ViewMode::Notifications => {
                let page = self.notification_flow.page();
                if page == NotificationPage::RecordReminders && self.day_selector_open {
                    SettingsPanel::ReminderDays
                } else {
                    SettingsPanel::Notifications(page)
                }
            }
            ViewMode::Friends => match self.friend_list {
                Some(list) => SettingsPanel::FriendList(list),
                None => SettingsPanel::Friends,
            },
            ViewMode::Other => SettingsPanel::Other,
        }
    }

    /// Header title, or `None` when the panel has no titled header.
    pub fn header_title(&self) -> Option<&'static str> {
        match self.panel() {
            SettingsPanel::Main | SettingsPanel::FriendList(_) => None,
            SettingsPanel::GestureMenu { .. } => Some("Gesture settings"),
            _ => Some(self.view.title()),
        }
    }

    /// Page indicator for the current panel; hidden while an overlay is open.
    pub fn indicator(&self) -> Option<IndicatorState> {
        let pager = match self.panel() {
            SettingsPanel::Accessibility(_) => self.accessibility_flow.pager(),
            SettingsPanel::Privacy(_) => self.privacy_flow.pager(),
            SettingsPanel::Notifications(_) => self.notification_flow.pager(),
            SettingsPanel::FriendList(_) => &self.friend_pager,
            _ => return None,
        };

        Some(IndicatorState {
            current: pager.index(),
            total: pager.count(),
        })
    }

    // ---- paging ----

    /// Current accessibility step.
    pub fn accessibility_step(&self) -> AccessibilityStep {
        self.accessibility_flow.page()
    }

    /// Current accessibility step as an index in 0..=4.
    pub fn accessibility_step_index(&self) -> usize {
        self.accessibility_flow.index()
    }

    /// Jump the accessibility flow to a step (clamped).
    pub fn select_accessibility_step(&mut self, index: usize) {
        if self.accessibility_flow.jump_to(index) {
            tracing::debug!("Accessibility step -> {}", self.accessibility_flow.page());
        }
    }

    /// Current privacy page.
    pub fn privacy_page(&self) -> PrivacyPage {
        self.privacy_flow.page()
    }

    /// Current notifications page.
    pub fn notification_page(&self) -> NotificationPage {
        self.notification_flow.page()
    }

    /// Current friend list page index.
    pub fn friend_page(&self) -> usize {
        self.friend_pager.index()
    }

    /// Page indicator tap: jump the visible pager to `index` (clamped).
    pub fn select_page(&mut self, index: usize) {
        let view = self.view;
        let Some(pager) = self.active_pager_mut() else {
            return;
        };
        if pager.jump_to(index) {
            tracing::debug!("{:?} page -> {}", view, pager.index());
        }
    }

    /// Feed one touch event from the host.
    ///
    /// Drags only begin while a paged panel is showing without overlays.
    /// At most one page change results from a single drag.
    pub fn handle_touch(&mut self, event: TouchEvent, source: &TouchSource) {
        if matches!(event, TouchEvent::Start { .. }) && !self.accepts_swipes() {
            return;
        }

        let Some(direction) = self.swipe.handle(event, source) else {
            return;
        };

        let view = self.view;
        if let Some(pager) = self.swipeable_pager_mut() {
            if pager.apply_swipe(direction) {
                tracing::debug!("{:?} page -> {} (swipe {})", view, pager.index(), direction);
            }
        }
    }

    /// Whether a swipe drag is being tracked.
    pub fn is_tracking_swipe(&self) -> bool {
        self.swipe.is_tracking()
    }

    fn accepts_swipes(&self) -> bool {
        matches!(
            self.panel(),
            SettingsPanel::Accessibility(_)
                | SettingsPanel::Privacy(_)
                | SettingsPanel::Notifications(_)
        )
    }

    fn swipeable_pager_mut(&mut self) -> Option<&mut Pager> {
        if !self.accepts_swipes() {
            return None;
        }
        self.active_pager_mut()
    }

    fn active_pager_mut(&mut self) -> Option<&mut Pager> {
        match self.panel() {
            SettingsPanel::Accessibility(_) => Some(self.accessibility_flow.pager_mut()),
            SettingsPanel::Privacy(_) => Some(self.privacy_flow.pager_mut()),
            SettingsPanel::Notifications(_) => Some(self.notification_flow.pager_mut()),
            SettingsPanel::FriendList(_) => Some(&mut self.friend_pager),
            _ => None,
        }
    }

    // ---- values ----

    /// State shown by the toggle on the current panel, if it has one.
    pub fn toggle_state(&self) -> Option<bool> {
        match self.panel() {
            SettingsPanel::Accessibility(step) => match step {
                AccessibilityStep::DarkMode => Some(self.accessibility.dark_mode),
                AccessibilityStep::FontSize => None,
                AccessibilityStep::ScreenRead => Some(self.accessibility.screen_read),
                AccessibilityStep::Highlight => Some(self.accessibility.highlight),
                AccessibilityStep::Gesture => Some(self.accessibility.gesture),
            },
            SettingsPanel::Privacy(page) => match page {
                PrivacyPage::NoiseReduction => Some(self.privacy.noise_reduction),
                PrivacyPage::VoiceAmplification => Some(self.privacy.voice_amplification),
            },
            SettingsPanel::Notifications(page) => match page {
                NotificationPage::SocialAlerts => Some(self.notifications.social_alerts),
                NotificationPage::RecordReminders => Some(self.notifications.record_reminders),
            },
            _ => None,
        }
    }

    /// Apply a toggle selection to the current panel's value.
    ///
    /// The selection is the desired state; it is applied even if unchanged.
    pub fn apply_toggle(&mut self, on: bool) {
        match self.panel() {
            SettingsPanel::Accessibility(step) => match step {
                AccessibilityStep::DarkMode => self.set_dark_mode(on),
                AccessibilityStep::FontSize => {}
                AccessibilityStep::ScreenRead => self.accessibility.screen_read = on,
                AccessibilityStep::Highlight => self.accessibility.highlight = on,
                AccessibilityStep::Gesture => self.set_gesture(on),
            },
            SettingsPanel::Privacy(page) => match page {
                PrivacyPage::NoiseReduction => self.privacy.noise_reduction = on,
                PrivacyPage::VoiceAmplification => self.privacy.voice_amplification = on,
            },
            SettingsPanel::Notifications(page) => match page {
                NotificationPage::SocialAlerts => self.notifications.social_alerts = on,
                NotificationPage::RecordReminders => self.set_record_reminders(on),
            },
            _ => {}
        }
    }

    /// Set dark mode.
    pub fn set_dark_mode(&mut self, on: bool) {
        self.accessibility.dark_mode = on;
        tracing::debug!("Dark mode: {}", on);
    }

    /// Select a text size.
    pub fn set_font_size(&mut self, size: FontSize) {
        self.accessibility.font_size = size;
        tracing::debug!("Font size: {}", size);
    }

    /// Enable or disable gestures; enabling opens the bindings menu.
    pub fn set_gesture(&mut self, on: bool) {
        self.accessibility.gesture = on;
        if on {
            self.gesture_menu_open = true;
        } else {
            self.close_gesture_menu();
        }
    }

    /// Open the action selector for a gesture.
    pub fn open_action_selector(&mut self, gesture: Gesture) {
        if self.gesture_menu_open {
            self.action_selector = Some(gesture);
        }
    }

    /// Bind an action to the gesture whose selector is open.
    ///
    /// The selector stays open.
    pub fn choose_gesture_action(&mut self, action: GestureAction) {
        if let Some(gesture) = self.action_selector {
            self.gesture_bindings.set(gesture, action);
            tracing::debug!("{} bound to {}", gesture.label(), action.label());
        }
    }

    /// Close the action selector.
    pub fn close_action_selector(&mut self) {
        self.action_selector = None;
    }

    /// Enable or disable record reminders; enabling opens the day picker.
    pub fn set_record_reminders(&mut self, on: bool) {
        self.notifications.record_reminders = on;
        self.day_selector_open = on;
    }

    /// Flip a reminder weekday.
    pub fn toggle_reminder_day(&mut self, day: Weekday) {
        self.notifications.reminder_days.toggle(day);
    }

    /// Open a friend management list.
    pub fn open_friend_list(&mut self, list: FriendList) {
        if self.view == ViewMode::Friends {
            self.friend_list = Some(list);
            self.friend_pager.reset();
        }
    }

    fn close_gesture_menu(&mut self) {
        self.gesture_menu_open = false;
        self.action_selector = None;
    }
}
