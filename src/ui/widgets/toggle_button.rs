//! Two-state toggle widget.
//!
//! Two full-width regions stacked vertically, "On" above "Off". Tapping a
//! region reports that region's value even when it is already selected,
//! so callers treat the result as "desired state", not "state changed".

use egui::{
    Align2, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, WidgetInfo, WidgetType,
};

use crate::ui::theme::Palette;

/// Height of each region in points.
pub const REGION_HEIGHT: f32 = 136.0;
/// Label size in points.
pub const LABEL_SIZE: f32 = 60.0;

/// One half of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRegion {
    On,
    Off,
}

impl ToggleRegion {
    /// Value reported when this region is tapped.
    pub fn value(&self) -> bool {
        matches!(self, ToggleRegion::On)
    }

    /// Region label.
    pub fn label(&self) -> &'static str {
        match self {
            ToggleRegion::On => "On",
            ToggleRegion::Off => "Off",
        }
    }
}

/// Stateless on/off toggle.
#[derive(Debug, Clone, Copy)]
pub struct ToggleButton {
    is_on: bool,
    palette: Palette,
}

impl ToggleButton {
    /// Create a toggle showing `is_on`.
    pub fn new(is_on: bool) -> Self {
        Self {
            is_on,
            palette: Palette::default(),
        }
    }

    /// Set the palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Lay out both regions inside `rect` (top half "On"), each paired with
    /// whether it is the selected one.
    pub fn regions(&self, rect: Rect) -> [(ToggleRegion, Rect, bool); 2] {
        let on = Rect::from_min_size(rect.min, Vec2::new(rect.width(), REGION_HEIGHT));
        let off = Rect::from_min_size(
            Pos2::new(rect.min.x, rect.min.y + REGION_HEIGHT),
            Vec2::new(rect.width(), REGION_HEIGHT),
        );
        [
            (ToggleRegion::On, on, self.is_on),
            (ToggleRegion::Off, off, !self.is_on),
        ]
    }

    /// Draw the toggle across the available width.
    ///
    /// Returns the value of the region tapped this frame, if any.
    pub fn show(self, ui: &mut Ui) -> Option<bool> {
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), REGION_HEIGHT * 2.0),
            Sense::hover(),
        );

        let mut selected = None;
        let base_id = ui.id().with("toggle_button");

        for (region, region_rect, active) in self.regions(rect) {
            let response = ui.interact(region_rect, base_id.with(region.label()), Sense::click());
            response.widget_info(|| {
                WidgetInfo::selected(WidgetType::RadioButton, true, active, region.label())
            });
            if response.clicked() {
                selected = Some(region.value());
            }

            let fill = if active {
                self.palette.active
            } else {
                self.palette.inactive
            };
            let painter = ui.painter();
            painter.rect_filled(region_rect, 0.0, fill);
            painter.rect_stroke(
                region_rect,
                0.0,
                Stroke::new(1.0, self.palette.border),
                StrokeKind::Inside,
            );
            painter.text(
                region_rect.center(),
                Align2::CENTER_CENTER,
                region.label(),
                FontId::proportional(LABEL_SIZE),
                self.palette.text,
            );
        }

        selected
    }
}
