//! Bottom navigation bar.

use egui::{Layout, RichText, Ui};

use crate::navigation::Route;
use crate::ui::theme::Palette;

/// Destinations on the bottom bar, left to right.
pub const NAV_BAR_ROUTES: [Route; 5] = [
    Route::Records,
    Route::Recording,
    Route::Profile,
    Route::Feed,
    Route::Archive,
];

/// Bottom navigation bar.
pub struct NavigationBar;

impl NavigationBar {
    /// Draw the bar. Returns the destination tapped this frame, if any.
    pub fn show(ui: &mut Ui, palette: Palette) -> Option<Route> {
        let mut tapped = None;
        let width = ui.available_width() / NAV_BAR_ROUTES.len() as f32;

        ui.horizontal(|ui| {
            for route in NAV_BAR_ROUTES {
                ui.allocate_ui_with_layout(
                    egui::vec2(width, 56.0),
                    Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        let label = RichText::new(route.title()).size(14.0).color(palette.text);
                        if ui.add(egui::Button::new(label).frame(false)).clicked() {
                            tapped = Some(route);
                        }
                    },
                );
            }
        });

        tapped
    }
}
