//! Stand-in for destinations reachable from the navigation bar.

use egui::{Align, Layout, RichText, Ui};

use crate::navigation::Route;
use crate::ui::theme::Palette;

/// Screen that only shows the route's title and a back button.
pub struct PlaceholderScreen;

impl PlaceholderScreen {
    /// Show the screen for `route`. Returns true when back is tapped.
    pub fn show(ui: &mut Ui, palette: Palette, route: Route) -> bool {
        let mut back = false;

        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(RichText::new("‹").size(28.0).color(palette.text)).frame(false))
                .on_hover_text("Back")
                .clicked()
            {
                back = true;
            }
            ui.label(RichText::new(route.title()).size(20.0).strong().color(palette.text));
        });

        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(200.0);
            ui.label(RichText::new("Nothing here yet").size(18.0).color(palette.text_muted));
        });

        back
    }
}
