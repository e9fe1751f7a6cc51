//! Accessibility flow pages and values.

use super::pager::FlowPage;

/// Pages of the accessibility flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessibilityStep {
    /// Dark theme toggle
    #[default]
    DarkMode,
    /// Text size selection
    FontSize,
    /// Screen reader toggle
    ScreenRead,
    /// Record highlight toggle
    Highlight,
    /// Gesture shortcuts toggle and bindings
    Gesture,
}

impl FlowPage for AccessibilityStep {
    fn all() -> &'static [Self] {
        &[
            AccessibilityStep::DarkMode,
            AccessibilityStep::FontSize,
            AccessibilityStep::ScreenRead,
            AccessibilityStep::Highlight,
            AccessibilityStep::Gesture,
        ]
    }

    fn title(&self) -> &'static str {
        match self {
            AccessibilityStep::DarkMode => "Dark mode",
            AccessibilityStep::FontSize => "Font size",
            AccessibilityStep::ScreenRead => "Screen reader",
            AccessibilityStep::Highlight => "Highlight",
            AccessibilityStep::Gesture => "Gestures",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            AccessibilityStep::DarkMode => "Dims the screen\nto ease eye strain",
            AccessibilityStep::FontSize => "Pick the text size\nthat suits you",
            AccessibilityStep::ScreenRead => "Reads what is on screen\nout loud",
            AccessibilityStep::Highlight => "Lets you mark highlights\nin your records",
            AccessibilityStep::Gesture => "Run key features\nwith simple motions",
        }
    }
}

impl std::fmt::Display for AccessibilityStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// A selectable text size in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u8);

impl FontSize {
    /// Every selectable size, smallest first.
    pub const OPTIONS: [FontSize; 10] = [
        FontSize(12),
        FontSize(14),
        FontSize(16),
        FontSize(18),
        FontSize(20),
        FontSize(22),
        FontSize(24),
        FontSize(26),
        FontSize(28),
        FontSize(30),
    ];

    /// Look up a size; only the listed options are valid.
    pub fn new(points: u8) -> Option<Self> {
        Self::OPTIONS.iter().copied().find(|s| s.0 == points)
    }

    /// Size in points.
    pub fn points(&self) -> u8 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize(20)
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Values edited by the accessibility flow. Session-local.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilitySettings {
    /// Dark theme enabled
    pub dark_mode: bool,
    /// Selected text size
    pub font_size: FontSize,
    /// Screen reader enabled
    pub screen_read: bool,
    /// Highlights enabled
    pub highlight: bool,
    /// Gesture shortcuts enabled
    pub gesture: bool,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: FontSize::default(),
            screen_read: false,
            highlight: true,
            gesture: false,
        }
    }
}

/// Gestures that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    DoubleTap,
    TripleTap,
    LongPress,
}

impl Gesture {
    /// Get all bindable gestures in menu order.
    pub fn all() -> &'static [Gesture] {
        &[Gesture::DoubleTap, Gesture::TripleTap, Gesture::LongPress]
    }

    /// Get the menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::DoubleTap => "Double tap",
            Gesture::TripleTap => "Triple tap",
            Gesture::LongPress => "Long press",
        }
    }
}

/// Action a gesture can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureAction {
    #[default]
    None,
    StartRecording,
    StopRecording,
    OpenRecords,
    OpenFeed,
    OpenArchive,
    OpenSettings,
}

impl GestureAction {
    /// Get all actions in selector order.
    pub fn all() -> &'static [GestureAction] {
        &[
            GestureAction::None,
            GestureAction::StartRecording,
            GestureAction::StopRecording,
            GestureAction::OpenRecords,
            GestureAction::OpenFeed,
            GestureAction::OpenArchive,
            GestureAction::OpenSettings,
        ]
    }

    /// Get the selector label.
    pub fn label(&self) -> &'static str {
        match self {
            GestureAction::None => "None",
            GestureAction::StartRecording => "Start recording",
            GestureAction::StopRecording => "Stop recording",
            GestureAction::OpenRecords => "Go to records",
            GestureAction::OpenFeed => "Go to feed",
            GestureAction::OpenArchive => "Go to archive",
            GestureAction::OpenSettings => "Go to settings",
        }
    }

    /// Whether an action is actually bound.
    pub fn is_bound(&self) -> bool {
        *self != GestureAction::None
    }
}

/// Action bound to each gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureBindings {
    double_tap: GestureAction,
    triple_tap: GestureAction,
    long_press: GestureAction,
}

impl GestureBindings {
    /// Get the action bound to a gesture.
    pub fn get(&self, gesture: Gesture) -> GestureAction {
        match gesture {
            Gesture::DoubleTap => self.double_tap,
            Gesture::TripleTap => self.triple_tap,
            Gesture::LongPress => self.long_press,
        }
    }

    /// Bind an action to a gesture.
    pub fn set(&mut self, gesture: Gesture, action: GestureAction) {
        let slot = match gesture {
            Gesture::DoubleTap => &mut self.double_tap,
            Gesture::TripleTap => &mut self.triple_tap,
            Gesture::LongPress => &mut self.long_press,
        };
        *slot = action;
    }
}
