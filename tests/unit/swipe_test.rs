//! Unit tests for swipe recognition.

use egui::Pos2;
use revo::input::{SwipeDirection, SwipeRecognizer, TouchEvent, TouchSource};

fn at(x: f32) -> Pos2 {
    Pos2::new(x, 300.0)
}

/// Run a full drag through the recogniser and collect its decisions.
fn drag(recognizer: &mut SwipeRecognizer, source: &TouchSource, xs: &[f32]) -> Vec<SwipeDirection> {
    let mut decisions = Vec::new();
    let (first, rest) = xs.split_first().expect("drag needs a start point");

    decisions.extend(recognizer.handle(TouchEvent::Start { pos: at(*first) }, source));
    for x in rest {
        decisions.extend(recognizer.handle(TouchEvent::Move { pos: at(*x) }, source));
    }
    let last = xs.last().copied().unwrap_or(*first);
    decisions.extend(recognizer.handle(TouchEvent::End { pos: at(last) }, source));
    decisions
}

#[test]
fn test_drag_right_past_threshold() {
    let source = TouchSource::new();
    let mut recognizer = SwipeRecognizer::new();
    assert_eq!(drag(&mut recognizer, &source, &[100.0, 160.0]), vec![SwipeDirection::Right]);
}

#[test]
fn test_drag_left_past_threshold() {
    let source = TouchSource::new();
    let mut recognizer = SwipeRecognizer::new();
    assert_eq!(drag(&mut recognizer, &source, &[200.0, 140.0]), vec![SwipeDirection::Left]);
}

#[test]
fn test_short_drag_is_ignored() {
    let source = TouchSource::new();
    let mut recognizer = SwipeRecognizer::new();
    assert!(drag(&mut recognizer, &source, &[100.0, 140.0]).is_empty());
    assert!(drag(&mut recognizer, &source, &[100.0, 60.0]).is_empty());
}

#[test]
fn test_threshold_is_exclusive() {
    let source = TouchSource::new();
    let mut recognizer = SwipeRecognizer::new();
    assert!(drag(&mut recognizer, &source, &[100.0, 150.0]).is_empty());
    assert!(drag(&mut recognizer, &source, &[100.0, 50.0]).is_empty());
}

#[test]
fn test_long_drag_decides_once() {
    let source = TouchSource::new();
    let mut recognizer = SwipeRecognizer::new();

    // Crosses the threshold twice over in one gesture
    let decisions = drag(&mut recognizer, &source, &[300.0, 240.0, 180.0, 120.0, 60.0]);
    assert_eq!(decisions, vec![SwipeDirection::Left]);
}

#[test]
fn test_direction_reversal_after_decision_is_ignored() {
    let source = TouchSource::new();
    let mut recognizer = SwipeRecognizer::new();
    let decisions = drag(&mut recognizer, &source, &[100.0, 170.0, 20.0]);
    assert_eq!(decisions, vec![SwipeDirection::Right]);
}

#[test]
fn test_custom_threshold() {
    let source = TouchSource::new();
    let mut recognizer = SwipeRecognizer::with_threshold(100.0);
    assert!(drag(&mut recognizer, &source, &[100.0, 160.0]).is_empty());
    assert_eq!(drag(&mut recognizer, &source, &[100.0, 210.0]), vec![SwipeDirection::Right]);
}

#[test]
fn test_no_subscription_outlives_its_drag() {
    let source = TouchSource::new();
    let mut recognizer = SwipeRecognizer::new();

    for _ in 0..10 {
        drag(&mut recognizer, &source, &[0.0, 10.0]);
        drag(&mut recognizer, &source, &[0.0, 90.0]);
    }
    assert_eq!(source.active_subscriptions(), 0);

    // An abandoned drag is released by the next start
    recognizer.handle(TouchEvent::Start { pos: at(0.0) }, &source);
    recognizer.handle(TouchEvent::Start { pos: at(10.0) }, &source);
    assert_eq!(source.active_subscriptions(), 1);

    recognizer.handle(TouchEvent::Cancel, &source);
    assert_eq!(source.active_subscriptions(), 0);
    assert!(!recognizer.is_tracking());
}
