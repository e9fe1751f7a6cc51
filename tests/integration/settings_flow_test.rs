//! Integration tests for the settings flows.
//!
//! Drives the controller the way the screen does: view changes, touch
//! streams, indicator taps and toggle selections.

use chrono::Weekday;
use egui::Pos2;
use revo::input::{TouchEvent, TouchSource};
use revo::settings::{
    AccessibilityStep, FriendList, Gesture, GestureAction, IndicatorState, NotificationPage,
    PrivacyPage, SettingsController, SettingsPanel, ViewMode,
};

fn drag(ctl: &mut SettingsController, source: &TouchSource, xs: &[f32]) {
    ctl.handle_touch(TouchEvent::Start { pos: Pos2::new(xs[0], 400.0) }, source);
    for x in &xs[1..] {
        ctl.handle_touch(TouchEvent::Move { pos: Pos2::new(*x, 400.0) }, source);
    }
    ctl.handle_touch(
        TouchEvent::End {
            pos: Pos2::new(xs[xs.len() - 1], 400.0),
        },
        source,
    );
}

#[test]
fn test_swipe_left_advances_one_step() {
    let source = TouchSource::new();
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Accessibility);
    ctl.select_accessibility_step(1);

    drag(&mut ctl, &source, &[250.0, 190.0]);
    assert_eq!(ctl.accessibility_step_index(), 2);
}

#[test]
fn test_swipe_right_at_first_step_stays() {
    let source = TouchSource::new();
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Accessibility);

    drag(&mut ctl, &source, &[100.0, 160.0]);
    assert_eq!(ctl.accessibility_step_index(), 0);
}

#[test]
fn test_short_drag_does_not_page() {
    let source = TouchSource::new();
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Accessibility);
    ctl.select_accessibility_step(2);

    drag(&mut ctl, &source, &[100.0, 140.0]);
    drag(&mut ctl, &source, &[100.0, 60.0]);
    assert_eq!(ctl.accessibility_step_index(), 2);
}

#[test]
fn test_long_drag_changes_one_step() {
    let source = TouchSource::new();
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Accessibility);

    drag(&mut ctl, &source, &[350.0, 290.0, 230.0, 170.0, 110.0, 50.0]);
    assert_eq!(ctl.accessibility_step_index(), 1);
    assert_eq!(source.active_subscriptions(), 0);
}

#[test]
fn test_indicator_tap_jumps_directly() {
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Accessibility);
    ctl.select_accessibility_step(2);

    ctl.select_page(4);
    assert_eq!(ctl.accessibility_step(), AccessibilityStep::Gesture);
    assert_eq!(
        ctl.indicator(),
        Some(IndicatorState {
            current: 4,
            total: 5
        })
    );
}

#[test]
fn test_step_resets_on_every_entry() {
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Accessibility);
    ctl.select_accessibility_step(3);

    ctl.back();
    assert_eq!(ctl.view(), ViewMode::Main);

    ctl.open(ViewMode::Accessibility);
    assert_eq!(ctl.accessibility_step_index(), 0);

    ctl.open(ViewMode::Privacy);
    ctl.select_page(1);
    ctl.open(ViewMode::Notifications);
    ctl.open(ViewMode::Privacy);
    assert_eq!(ctl.privacy_page(), PrivacyPage::NoiseReduction);
}

#[test]
fn test_toggle_writes_current_step_value() {
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Accessibility);

    ctl.select_page(2);
    ctl.apply_toggle(true);
    assert!(ctl.accessibility.screen_read);

    ctl.select_page(3);
    ctl.apply_toggle(false);
    assert!(!ctl.accessibility.highlight);

    // Re-selecting the current state is accepted
    ctl.apply_toggle(false);
    assert!(!ctl.accessibility.highlight);
    assert_eq!(ctl.toggle_state(), Some(false));
}

#[test]
fn test_gesture_menu_overlay() {
    let source = TouchSource::new();
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Accessibility);
    ctl.select_page(4);

    ctl.apply_toggle(true);
    assert_eq!(ctl.panel(), SettingsPanel::GestureMenu { selecting: None });
    assert_eq!(ctl.indicator(), None);

    // No paging while the menu covers the step
    drag(&mut ctl, &source, &[100.0, 200.0]);
    assert_eq!(ctl.accessibility_step(), AccessibilityStep::Gesture);

    ctl.open_action_selector(Gesture::TripleTap);
    ctl.choose_gesture_action(GestureAction::OpenFeed);
    assert_eq!(
        ctl.panel(),
        SettingsPanel::GestureMenu {
            selecting: Some(Gesture::TripleTap)
        }
    );
    assert_eq!(ctl.gesture_bindings.get(Gesture::TripleTap), GestureAction::OpenFeed);
    assert_eq!(ctl.gesture_bindings.get(Gesture::DoubleTap), GestureAction::None);

    // Back closes the menu before leaving the view
    ctl.back();
    assert_eq!(ctl.panel(), SettingsPanel::Accessibility(AccessibilityStep::Gesture));
    assert!(ctl.accessibility.gesture);
    ctl.back();
    assert_eq!(ctl.view(), ViewMode::Main);
}

#[test]
fn test_reminder_day_picker() {
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Notifications);
    ctl.select_page(1);
    assert_eq!(ctl.notification_page(), NotificationPage::RecordReminders);

    ctl.apply_toggle(true);
    assert_eq!(ctl.panel(), SettingsPanel::ReminderDays);
    assert_eq!(ctl.indicator(), None);

    ctl.toggle_reminder_day(Weekday::Mon);
    ctl.toggle_reminder_day(Weekday::Fri);
    ctl.toggle_reminder_day(Weekday::Mon);
    let days: Vec<Weekday> = ctl.notifications.reminder_days.iter().collect();
    assert_eq!(days, vec![Weekday::Fri]);

    ctl.back();
    assert_eq!(ctl.panel(), SettingsPanel::Notifications(NotificationPage::RecordReminders));
    assert!(ctl.notifications.record_reminders);
}

#[test]
fn test_friend_list_has_its_own_pager() {
    let mut ctl = SettingsController::new();
    ctl.open(ViewMode::Friends);
    ctl.open_friend_list(FriendList::Blocked);
    assert_eq!(
        ctl.indicator(),
        Some(IndicatorState {
            current: 0,
            total: 3
        })
    );

    ctl.select_page(1);
    ctl.back();
    ctl.open_friend_list(FriendList::Hidden);
    assert_eq!(ctl.friend_page(), 0);
}

#[test]
fn test_main_and_other_have_no_indicator() {
    let mut ctl = SettingsController::new();
    assert_eq!(ctl.indicator(), None);
    ctl.open(ViewMode::Other);
    assert_eq!(ctl.panel(), SettingsPanel::Other);
    assert_eq!(ctl.indicator(), None);
}
