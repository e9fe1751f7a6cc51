//! Page indicator widget.
//!
//! A centred row of equal dots, one per page. The dot for the current page
//! uses the active color. Every dot is tappable and reports its own index.

use egui::{Pos2, Rect, Sense, Ui, Vec2};

use crate::ui::theme::Palette;

/// Dot diameter in points.
pub const DOT_DIAMETER: f32 = 8.0;
/// Gap between neighbouring dots in points.
pub const DOT_GAP: f32 = 8.0;
/// Height of the tappable strip around the dots.
pub const HIT_HEIGHT: f32 = 44.0;

/// One dot, positioned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Page index this dot stands for
    pub index: usize,
    /// Dot centre
    pub center: Pos2,
    /// Whether this is the current page
    pub active: bool,
}

impl Marker {
    /// Tappable area around the dot; neighbours' areas do not overlap.
    pub fn hit_rect(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::new(DOT_DIAMETER + DOT_GAP, HIT_HEIGHT))
    }
}

/// Stateless page indicator.
#[derive(Debug, Clone, Copy)]
pub struct PageIndicator {
    current_page: usize,
    total_pages: usize,
    palette: Palette,
}

impl PageIndicator {
    /// Create an indicator for `total_pages` pages.
    ///
    /// A `current_page` outside the range simply highlights nothing.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            palette: Palette::default(),
        }
    }

    /// Set the palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Width of the dot row: dots plus the gaps between them.
    pub fn row_width(&self) -> f32 {
        if self.total_pages == 0 {
            return 0.0;
        }
        let n = self.total_pages as f32;
        n * DOT_DIAMETER + (n - 1.0) * DOT_GAP
    }

    /// Lay the dots out centred in `rect`.
    pub fn markers(&self, rect: Rect) -> Vec<Marker> {
        let left = rect.center().x - self.row_width() / 2.0;
        let y = rect.center().y;

        (0..self.total_pages)
            .map(|index| Marker {
                index,
                center: Pos2::new(
                    left + DOT_DIAMETER / 2.0 + index as f32 * (DOT_DIAMETER + DOT_GAP),
                    y,
                ),
                active: index == self.current_page,
            })
            .collect()
    }

    /// Draw the indicator across the available width.
    ///
    /// Returns the index of the dot tapped this frame, if any.
    pub fn show(self, ui: &mut Ui) -> Option<usize> {
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), HIT_HEIGHT),
            Sense::hover(),
        );

        let mut selected = None;
        let base_id = ui.id().with("page_indicator");

        for marker in self.markers(rect) {
            let response = ui.interact(marker.hit_rect(), base_id.with(marker.index), Sense::click());
            if response.clicked() {
                selected = Some(marker.index);
            }

            let color = if marker.active {
                self.palette.dot_active
            } else {
                self.palette.dot_inactive
            };
            ui.painter()
                .circle_filled(marker.center, DOT_DIAMETER / 2.0, color);
        }

        selected
    }
}
