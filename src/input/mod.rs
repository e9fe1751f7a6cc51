//! Input handling module for touch and gesture support.
//!
//! Provides the touch event stream and horizontal swipe recognition
//! used by the paged settings flows.

pub mod gestures;
pub mod touch;

// Re-export types
pub use gestures::{SwipeDirection, SwipeRecognizer, DEFAULT_SWIPE_THRESHOLD};
pub use touch::{TouchEvent, TouchSource, TouchSubscription};
