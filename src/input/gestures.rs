//! Gesture recognition for touch and mouse input.
//!
//! Only horizontal swipes are recognised: a drag whose horizontal travel
//! exceeds the threshold produces one [`SwipeDirection`] and ends the
//! session, however far the finger keeps moving.

use super::touch::{TouchEvent, TouchSource, TouchSubscription};

/// Default minimum horizontal travel, in points.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Direction of a horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled towards the left edge
    Left,
    /// Finger travelled towards the right edge
    Right,
}

impl SwipeDirection {
    /// Detect swipe direction from horizontal travel.
    ///
    /// The threshold is exclusive: travel of exactly `threshold` is not a swipe.
    pub fn from_delta_x(delta_x: f32, threshold: f32) -> Option<Self> {
        if delta_x.abs() <= threshold {
            return None;
        }

        if delta_x > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeDirection::Left => write!(f, "Left"),
            SwipeDirection::Right => write!(f, "Right"),
        }
    }
}

/// One drag, from touch-start until a decision or touch-end.
#[derive(Debug)]
struct SwipeSession {
    start_x: f32,
    _subscription: TouchSubscription,
}

/// Swipe recogniser.
///
/// Holds at most one live session. The session's subscription is dropped
/// the moment a direction is emitted or the touch ends, whichever is first.
#[derive(Debug)]
pub struct SwipeRecognizer {
    threshold: f32,
    session: Option<SwipeSession>,
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeRecognizer {
    /// Create a recogniser with the default threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    /// Create a recogniser with a custom threshold.
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            session: None,
        }
    }

    /// Whether a drag is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one touch event. Returns a direction at most once per drag.
    pub fn handle(&mut self, event: TouchEvent, source: &TouchSource) -> Option<SwipeDirection> {
        match event {
            TouchEvent::Start { pos } => {
                // Replacing an unfinished session drops its subscription first.
                self.session = None;
                self.session = Some(SwipeSession {
                    start_x: pos.x,
                    _subscription: source.subscribe(),
                });
                None
            }
            TouchEvent::Move { pos } => {
                let start_x = self.session.as_ref()?.start_x;
                let direction = SwipeDirection::from_delta_x(pos.x - start_x, self.threshold)?;
                self.session = None;
                tracing::debug!("Swipe recognised: {}", direction);
                Some(direction)
            }
            TouchEvent::End { .. } | TouchEvent::Cancel => {
                self.session = None;
                None
            }
        }
    }

    /// Abandon any drag in progress without emitting a direction.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
