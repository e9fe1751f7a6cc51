//! Revo - voice journaling app
//!
//! Settings area of the Revo app: the main settings menu, paged
//! accessibility, privacy and notification flows, friend management and
//! the swipe and page-indicator navigation between pages.

pub mod input;
pub mod navigation;
pub mod settings;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use input::{SwipeDirection, SwipeRecognizer, TouchEvent, TouchSource};
pub use navigation::{NavigationStack, Navigator, Route};
pub use settings::{SettingsController, SettingsPanel, ViewMode};
pub use storage::{AppConfig, FileStore, KeyValueStore, MemoryStore};
