//! Settings area: main menu, paged flows and their values.
//!
//! Everything here is headless. The egui rendering lives in
//! [`crate::ui::screens::settings`].

pub mod accessibility;
pub mod controller;
pub mod friends;
pub mod menu;
pub mod notifications;
pub mod pager;
pub mod privacy;
pub mod user;

// Re-export types
pub use accessibility::{
    AccessibilitySettings, AccessibilityStep, FontSize, Gesture, GestureAction, GestureBindings,
};
pub use controller::{IndicatorState, SettingsController, SettingsPanel, ViewMode};
pub use friends::{FriendList, FRIEND_LIST_PAGES};
pub use menu::{InfoCard, MenuRow};
pub use notifications::{NotificationPage, NotificationSettings, ReminderDays, WEEK};
pub use pager::{FlowPage, PagedFlow, Pager};
pub use privacy::{PrivacyPage, PrivacySettings};
pub use user::UserSummary;
