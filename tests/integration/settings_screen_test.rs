//! Integration tests driving `SettingsScreen::show` with egui input.
//!
//! Frames are run on a headless `egui::Context`; the screen is only
//! rendered on frames where Settings would be the current route.

use egui::{Context, Event, Modifiers, PointerButton, Pos2, RawInput};
use revo::navigation::{NavigationStack, Route};
use revo::settings::ViewMode;
use revo::storage::MemoryStore;
use revo::ui::screens::SettingsScreen;

fn primary(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

struct Harness {
    ctx: Context,
    screen: SettingsScreen,
    nav: NavigationStack,
    store: MemoryStore,
}

impl Harness {
    /// Screen open on the accessibility flow at `step`.
    fn on_accessibility_step(step: usize) -> Self {
        let mut screen = SettingsScreen::default();
        screen.controller_mut().open(ViewMode::Accessibility);
        screen.controller_mut().select_page(step);

        Self {
            ctx: Context::default(),
            screen,
            nav: NavigationStack::new(Route::Settings),
            store: MemoryStore::new(),
        }
    }

    /// Frame with the settings screen rendered.
    fn shown(&mut self, events: Vec<Event>) {
        let Harness {
            ctx,
            screen,
            nav,
            store,
        } = self;
        let _ = ctx.run(
            RawInput {
                events,
                ..Default::default()
            },
            |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    screen.show(ui, &mut *nav, &mut *store)
                });
            },
        );
    }

    /// Frame on another route: input still flows through egui, the screen
    /// is not rendered.
    fn hidden(&mut self, events: Vec<Event>) {
        let _ = self.ctx.run(
            RawInput {
                events,
                ..Default::default()
            },
            |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.label("Records");
                });
            },
        );
    }

    fn step(&self) -> usize {
        self.screen.controller().accessibility_step_index()
    }
}

#[test]
fn test_mouse_drag_pages_once() {
    let mut h = Harness::on_accessibility_step(2);

    let press = Pos2::new(300.0, 600.0);
    h.shown(vec![Event::PointerMoved(press), primary(press, true)]);
    assert!(h.screen.controller().is_tracking_swipe());

    h.shown(vec![Event::PointerMoved(Pos2::new(200.0, 600.0))]);
    assert_eq!(h.step(), 3);

    h.shown(vec![Event::PointerMoved(Pos2::new(100.0, 600.0))]);
    h.shown(vec![primary(Pos2::new(100.0, 600.0), false)]);
    assert_eq!(h.step(), 3);
    assert_eq!(h.screen.active_touch_subscriptions(), 0);
}

#[test]
fn test_leaving_mid_drag_releases_the_subscription() {
    let mut h = Harness::on_accessibility_step(2);

    let press = Pos2::new(300.0, 820.0);
    h.shown(vec![Event::PointerMoved(press), primary(press, true)]);
    assert!(h.screen.controller().is_tracking_swipe());

    // The release lands on another route
    h.hidden(vec![primary(press, false)]);
    h.screen.on_hide();
    assert!(!h.screen.controller().is_tracking_swipe());
    assert_eq!(h.screen.active_touch_subscriptions(), 0);

    h.shown(vec![Event::PointerMoved(Pos2::new(200.0, 400.0))]);
    assert_eq!(h.step(), 2);
}

#[test]
fn test_hover_after_missed_release_does_not_page() {
    let mut h = Harness::on_accessibility_step(2);

    let press = Pos2::new(300.0, 820.0);
    h.shown(vec![Event::PointerMoved(press), primary(press, true)]);
    h.hidden(vec![primary(press, false)]);

    // Button is up, so motion is hover only
    h.shown(vec![Event::PointerMoved(Pos2::new(200.0, 400.0))]);
    h.shown(vec![Event::PointerMoved(Pos2::new(100.0, 400.0))]);
    assert_eq!(h.step(), 2);
}

#[test]
fn test_on_hide_without_drag_is_a_no_op() {
    let mut h = Harness::on_accessibility_step(1);
    h.screen.on_hide();
    assert_eq!(h.step(), 1);
    assert_eq!(h.screen.active_touch_subscriptions(), 0);
}
