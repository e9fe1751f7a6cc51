//! Touch input handling.
//!
//! Turns the host's raw touch (or primary pointer) stream into
//! [`TouchEvent`]s and hands out scoped subscriptions to it.

use std::cell::Cell;
use std::rc::Rc;

use egui::Pos2;

/// Touch event types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    /// Touch started
    Start { pos: Pos2 },
    /// Touch moved
    Move { pos: Pos2 },
    /// Touch ended
    End { pos: Pos2 },
    /// Touch cancelled by the platform
    Cancel,
}

/// Source of touch events that listeners subscribe to for the
/// duration of one gesture.
///
/// Subscriptions are counted so a leaked listener shows up in
/// [`TouchSource::active_subscriptions`].
#[derive(Debug, Default)]
pub struct TouchSource {
    active: Rc<Cell<usize>>,
}

impl TouchSource {
    /// Create a new touch source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a subscription to move/end events.
    pub fn subscribe(&self) -> TouchSubscription {
        self.active.set(self.active.get() + 1);
        TouchSubscription {
            active: Rc::clone(&self.active),
        }
    }

    /// Number of subscriptions currently alive.
    pub fn active_subscriptions(&self) -> usize {
        self.active.get()
    }

    /// Translate one frame of egui input into touch events.
    ///
    /// Native touch events are used as-is. The primary mouse button is
    /// mapped onto the same stream so swipes can be driven from a desktop
    /// pointer. `primary_down` is egui's pointer state after this frame's
    /// events. Pointer motion is only a drag while the button is held.
    pub fn translate(&self, events: &[egui::Event], primary_down: bool) -> Vec<TouchEvent> {
        let mut out = Vec::new();
        let mut down = primary_down_before(events, primary_down);

        for event in events {
            match event {
                egui::Event::Touch { phase, pos, .. } => {
                    let touch = match phase {
                        egui::TouchPhase::Start => TouchEvent::Start { pos: *pos },
                        egui::TouchPhase::Move => TouchEvent::Move { pos: *pos },
                        egui::TouchPhase::End => TouchEvent::End { pos: *pos },
                        egui::TouchPhase::Cancel => TouchEvent::Cancel,
                    };
                    out.push(touch);
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    down = *pressed;
                    if *pressed {
                        out.push(TouchEvent::Start { pos: *pos });
                    } else {
                        out.push(TouchEvent::End { pos: *pos });
                    }
                }
                egui::Event::PointerMoved(pos) if down => {
                    out.push(TouchEvent::Move { pos: *pos });
                }
                egui::Event::PointerGone if down => {
                    down = false;
                    out.push(TouchEvent::Cancel);
                }
                _ => {}
            }
        }

        out
    }
}

/// Primary button state at the start of the frame.
///
/// The first primary press or release in `events` tells us the opposite
/// state held before it; with none, the state did not change this frame.
fn primary_down_before(events: &[egui::Event], primary_down: bool) -> bool {
    events
        .iter()
        .find_map(|event| match event {
            egui::Event::PointerButton {
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } => Some(!*pressed),
            _ => None,
        })
        .unwrap_or(primary_down)
}

/// A live subscription to a [`TouchSource`]. Released on drop.
#[derive(Debug)]
pub struct TouchSubscription {
    active: Rc<Cell<usize>>,
}

impl Drop for TouchSubscription {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
    }
}
