//! Unit tests for page indicator layout and hit testing.

use egui::{Pos2, Rect, Vec2};
use revo::ui::widgets::PageIndicator;

fn strip() -> Rect {
    Rect::from_min_size(Pos2::new(0.0, 700.0), Vec2::new(390.0, 44.0))
}

#[test]
fn test_tap_on_marker_reports_its_index() {
    let markers = PageIndicator::new(2, 5).markers(strip());

    for marker in &markers {
        let hits: Vec<usize> = markers
            .iter()
            .filter(|m| m.hit_rect().contains(marker.center))
            .map(|m| m.index)
            .collect();
        assert_eq!(hits, vec![marker.index]);
    }
}

#[test]
fn test_current_page_marker_is_highlighted() {
    let markers = PageIndicator::new(2, 5).markers(strip());
    assert!(markers[2].active);
    assert_eq!(markers.iter().filter(|m| m.active).count(), 1);
}

#[test]
fn test_markers_sit_on_the_strip_centre_line() {
    for marker in PageIndicator::new(0, 3).markers(strip()) {
        assert_eq!(marker.center.y, strip().center().y);
    }
}
