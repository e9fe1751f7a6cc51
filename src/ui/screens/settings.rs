//! Settings screen implementation.
//!
//! Renders whatever [`SettingsPanel`] the controller reports and routes
//! taps, toggles and the raw touch stream back into it.

use chrono::Utc;
use egui::{Align, Align2, FontId, Layout, RichText, ScrollArea, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::input::{SwipeRecognizer, TouchEvent, TouchSource};
use crate::navigation::Navigator;
use crate::settings::notifications::weekday_label;
use crate::settings::{
    AccessibilityStep, FlowPage, FontSize, FriendList, Gesture, GestureAction, InfoCard, MenuRow,
    SettingsController, SettingsPanel, ViewMode, WEEK,
};
use crate::storage::KeyValueStore;
use crate::ui::theme::{Palette, Theme};
use crate::ui::widgets::{PageIndicator, ToggleButton};

/// Height of menu rows and list options.
const ROW_HEIGHT: f32 = 81.0;
/// Horizontal inset of text inside rows.
const ROW_INSET: f32 = 24.0;

/// Settings screen state.
pub struct SettingsScreen {
    /// Settings state machine
    controller: SettingsController,
    /// Touch stream feeding swipe recognition
    touch: TouchSource,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new(SwipeRecognizer::new())
    }
}

impl SettingsScreen {
    /// Create a new settings screen.
    pub fn new(swipe: SwipeRecognizer) -> Self {
        Self {
            controller: SettingsController::with_swipe(swipe),
            touch: TouchSource::new(),
        }
    }

    /// Get the controller.
    pub fn controller(&self) -> &SettingsController {
        &self.controller
    }

    /// Get the controller mutably.
    pub fn controller_mut(&mut self) -> &mut SettingsController {
        &mut self.controller
    }

    /// Run mount-time checks. Returns true if a redirect was issued.
    pub fn on_mount(&mut self, store: &dyn KeyValueStore, nav: &mut dyn Navigator) -> bool {
        self.controller.on_mount(store, nav)
    }

    /// The screen is not being rendered this frame.
    ///
    /// Abandons any drag in progress; its end will never reach us.
    pub fn on_hide(&mut self) {
        if self.controller.is_tracking_swipe() {
            tracing::debug!("Settings hidden mid-drag, cancelling swipe");
            self.controller.handle_touch(TouchEvent::Cancel, &self.touch);
        }
    }

    /// Number of live touch subscriptions held by this screen.
    pub fn active_touch_subscriptions(&self) -> usize {
        self.touch.active_subscriptions()
    }

    /// Theme selected by the dark mode setting.
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.controller.accessibility.dark_mode)
    }

    /// Show the settings screen.
    pub fn show(&mut self, ui: &mut Ui, nav: &mut dyn Navigator, store: &mut dyn KeyValueStore) {
        let palette = self.theme().palette();

        let (events, primary_down) = ui.input(|i| (i.events.clone(), i.pointer.primary_down()));
        for event in self.touch.translate(&events, primary_down) {
            self.controller.handle_touch(event, &self.touch);
        }

        // Top header
        ui.horizontal(|ui| {
            ui.label(RichText::new("Revo").size(20.0).strong().color(palette.text));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add(egui::Button::new(RichText::new("⚙").size(20.0)).frame(false))
                    .on_hover_text("Close settings")
                    .clicked()
                {
                    nav.go_back();
                }
            });
        });
        ui.add_space(8.0);

        self.render_view_header(ui, palette);

        let panel = self.controller.panel();
        match panel {
            SettingsPanel::Main => self.render_main(ui, palette, nav, store),
            SettingsPanel::Accessibility(step) => self.render_accessibility(ui, palette, step),
            SettingsPanel::GestureMenu { selecting } => {
                self.render_gesture_menu(ui, palette, selecting)
            }
            SettingsPanel::Privacy(page) => self.render_toggle_page(ui, palette, page),
            SettingsPanel::Notifications(page) => self.render_toggle_page(ui, palette, page),
            SettingsPanel::ReminderDays => self.render_reminder_days(ui, palette),
            SettingsPanel::Friends => self.render_friends(ui, palette),
            SettingsPanel::FriendList(list) => self.render_friend_list(ui, palette, list),
            SettingsPanel::Other => self.render_other(ui, palette),
        }

        if let Some(indicator) = self.controller.indicator() {
            ui.add_space(16.0);
            if let Some(index) = PageIndicator::new(indicator.current, indicator.total)
                .palette(palette)
                .show(ui)
            {
                self.controller.select_page(index);
            }
        }
    }

    /// Back button with the view title, or the search box on friend lists.
    fn render_view_header(&mut self, ui: &mut Ui, palette: Palette) {
        if self.controller.view() == ViewMode::Main {
            return;
        }

        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(RichText::new("‹").size(28.0).color(palette.text)).frame(false))
                .on_hover_text("Back")
                .clicked()
            {
                self.controller.back();
            }

            match self.controller.header_title() {
                Some(title) => {
                    ui.label(RichText::new(title).size(20.0).strong().color(palette.text));
                }
                None => {
                    ui.label(RichText::new("🔍 Search").size(16.0).color(palette.text_muted));
                }
            }
        });
        ui.add_space(16.0);
    }

    fn render_main(
        &mut self,
        ui: &mut Ui,
        palette: Palette,
        nav: &mut dyn Navigator,
        store: &mut dyn KeyValueStore,
    ) {
        let user = &self.controller.user;
        ui.label(
            RichText::new(user.days_badge(Utc::now()))
                .size(28.0)
                .strong()
                .color(palette.text),
        );
        ui.label(RichText::new(user.subtitle()).size(18.0).color(palette.text));
        ui.add_space(24.0);

        for row in MenuRow::all() {
            let color = if *row == MenuRow::Logout {
                palette.danger
            } else {
                palette.text
            };

            if menu_row(ui, row.label(), color, palette) {
                match row {
                    MenuRow::Accessibility => self.controller.open(ViewMode::Accessibility),
                    MenuRow::Privacy => self.controller.open(ViewMode::Privacy),
                    MenuRow::Notifications => self.controller.open(ViewMode::Notifications),
                    MenuRow::Friends => self.controller.open(ViewMode::Friends),
                    MenuRow::Other => self.controller.open(ViewMode::Other),
                    MenuRow::Logout => self.controller.logout(store, nav),
                }
            }
        }
    }

    fn render_accessibility(&mut self, ui: &mut Ui, palette: Palette, step: AccessibilityStep) {
        if step != AccessibilityStep::FontSize {
            self.render_toggle_page(ui, palette, step);
            return;
        }

        page_heading(ui, palette, step.title(), step.description());

        let selected = self.controller.accessibility.font_size;
        ScrollArea::vertical()
            .max_height(ROW_HEIGHT * 4.0)
            .show(ui, |ui| {
                for size in FontSize::OPTIONS {
                    if option_row(
                        ui,
                        &size.to_string(),
                        f32::from(size.points()),
                        size == selected,
                        palette,
                    ) {
                        self.controller.set_font_size(size);
                    }
                }
            });
    }

    /// Heading plus the toggle bound to the current page's value.
    fn render_toggle_page<P: FlowPage>(&mut self, ui: &mut Ui, palette: Palette, page: P) {
        page_heading(ui, palette, page.title(), page.description());

        let Some(is_on) = self.controller.toggle_state() else {
            return;
        };
        if let Some(on) = ToggleButton::new(is_on).palette(palette).show(ui) {
            self.controller.apply_toggle(on);
        }
    }

    fn render_gesture_menu(&mut self, ui: &mut Ui, palette: Palette, selecting: Option<Gesture>) {
        for gesture in Gesture::all() {
            let action = self.controller.gesture_bindings.get(*gesture);
            let action_color = if action.is_bound() {
                palette.active
            } else {
                palette.text_muted
            };

            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_HEIGHT), Sense::click());
            paint_row_frame(ui, rect, palette.inactive, palette);
            ui.painter().text(
                rect.left_center() + Vec2::new(ROW_INSET, 0.0),
                Align2::LEFT_CENTER,
                gesture.label(),
                FontId::proportional(20.0),
                palette.text,
            );
            ui.painter().text(
                rect.right_center() - Vec2::new(ROW_INSET, 0.0),
                Align2::RIGHT_CENTER,
                format!("{}  ›", action.label()),
                FontId::proportional(16.0),
                action_color,
            );

            if response.clicked() {
                self.controller.open_action_selector(*gesture);
            }
        }

        let Some(gesture) = selecting else {
            return;
        };

        ui.add_space(16.0);
        ui.group(|ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Gesture settings: {}", gesture.label()))
                        .size(18.0)
                        .strong()
                        .color(palette.text),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("✕").clicked() {
                        self.controller.close_action_selector();
                    }
                });
            });

            let current = self.controller.gesture_bindings.get(gesture);
            for action in GestureAction::all() {
                if ui
                    .selectable_label(*action == current, RichText::new(action.label()).size(16.0))
                    .clicked()
                {
                    self.controller.choose_gesture_action(*action);
                }
            }
        });
    }

    fn render_reminder_days(&mut self, ui: &mut Ui, palette: Palette) {
        let days = self.controller.notifications.reminder_days;
        for day in WEEK {
            if option_row(ui, weekday_label(day), 20.0, days.contains(day), palette) {
                self.controller.toggle_reminder_day(day);
            }
        }
    }

    fn render_friends(&mut self, ui: &mut Ui, palette: Palette) {
        for list in FriendList::all() {
            if card(ui, list.title(), list.description(), palette) {
                self.controller.open_friend_list(*list);
            }
            ui.add_space(12.0);
        }
    }

    fn render_friend_list(&mut self, ui: &mut Ui, palette: Palette, list: FriendList) {
        ui.label(RichText::new(list.title()).size(20.0).strong().color(palette.text));
        ui.add_space(8.0);
        ui.label(RichText::new("No friends to show").color(palette.text_muted));
    }

    fn render_other(&mut self, ui: &mut Ui, palette: Palette) {
        for info in InfoCard::all() {
            card(ui, info.title(), info.description(), palette);
            ui.add_space(12.0);
        }
    }
}

/// Title and description at the top of a flow page.
fn page_heading(ui: &mut Ui, palette: Palette, title: &str, description: &str) {
    ui.label(RichText::new(title).size(40.0).strong().color(palette.text));
    ui.add_space(8.0);
    ui.label(RichText::new(description).size(20.0).color(palette.text_muted));
    ui.add_space(24.0);
}

fn paint_row_frame(ui: &Ui, rect: egui::Rect, fill: egui::Color32, palette: Palette) {
    ui.painter().rect_filled(rect, 0.0, fill);
    ui.painter().rect_stroke(
        rect,
        0.0,
        Stroke::new(1.0, palette.border),
        StrokeKind::Inside,
    );
}

/// Full-width menu row. Returns true when tapped.
fn menu_row(ui: &mut Ui, label: &str, color: egui::Color32, palette: Palette) -> bool {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_HEIGHT), Sense::click());
    let fill = if response.hovered() {
        palette.inactive
    } else {
        palette.background
    };
    paint_row_frame(ui, rect, fill, palette);
    ui.painter().text(
        rect.left_center() + Vec2::new(ROW_INSET, 0.0),
        Align2::LEFT_CENTER,
        label,
        FontId::proportional(22.0),
        color,
    );
    response.clicked()
}

/// Full-width selectable option. Returns true when tapped.
fn option_row(ui: &mut Ui, label: &str, size: f32, selected: bool, palette: Palette) -> bool {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), ROW_HEIGHT), Sense::click());
    let fill = if selected {
        palette.active
    } else {
        palette.inactive
    };
    paint_row_frame(ui, rect, fill, palette);
    ui.painter().text(
        rect.left_center() + Vec2::new(ROW_INSET, 0.0),
        Align2::LEFT_CENTER,
        label,
        FontId::proportional(size),
        palette.text,
    );
    response.clicked()
}

/// Card with a title, a description and a chevron. Returns true when tapped.
fn card(ui: &mut Ui, title: &str, description: &str, palette: Palette) -> bool {
    let height = 120.0;
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::click());
    paint_row_frame(ui, rect, palette.inactive, palette);

    let painter = ui.painter();
    painter.text(
        rect.left_top() + Vec2::new(ROW_INSET, 20.0),
        Align2::LEFT_TOP,
        title,
        FontId::proportional(22.0),
        palette.text,
    );
    painter.text(
        rect.left_top() + Vec2::new(ROW_INSET, 56.0),
        Align2::LEFT_TOP,
        description,
        FontId::proportional(15.0),
        palette.text_muted,
    );
    painter.text(
        rect.right_center() - Vec2::new(ROW_INSET, 0.0),
        Align2::RIGHT_CENTER,
        "›",
        FontId::proportional(28.0),
        palette.text,
    );

    response.clicked()
}
