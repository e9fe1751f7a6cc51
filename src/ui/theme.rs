//! UI theme definitions.
//!
//! The dark palette is the app's native look; the light palette is used
//! when dark mode is switched off in accessibility settings.

use egui::{Color32, Visuals};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme matching the dark mode setting.
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// Get the color palette for this theme.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
        }
    }
}

/// Colors used by the settings screens and widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color32,
    /// Primary text
    pub text: Color32,
    /// Secondary text
    pub text_muted: Color32,
    /// Selected option fill
    pub active: Color32,
    /// Unselected option fill
    pub inactive: Color32,
    /// Option borders
    pub border: Color32,
    /// Current page dot
    pub dot_active: Color32,
    /// Other page dots
    pub dot_inactive: Color32,
    /// Destructive row text
    pub danger: Color32,
}

impl Palette {
    /// Dark palette.
    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(10, 10, 10),
        text: Color32::from_rgb(245, 245, 245),
        text_muted: Color32::from_rgb(167, 167, 167),
        active: Color32::from_rgb(183, 128, 255),
        inactive: Color32::from_rgb(58, 58, 58),
        border: Color32::from_rgb(85, 85, 85),
        dot_active: Color32::from_rgb(245, 245, 245),
        dot_inactive: Color32::from_rgb(131, 131, 131),
        danger: Color32::from_rgb(234, 67, 53),
    };

    /// Light palette.
    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(250, 250, 252),
        text: Color32::from_rgb(32, 32, 40),
        text_muted: Color32::from_rgb(96, 96, 104),
        active: Color32::from_rgb(183, 128, 255),
        inactive: Color32::from_rgb(225, 225, 230),
        border: Color32::from_rgb(200, 200, 208),
        dot_active: Color32::from_rgb(27, 27, 27),
        dot_inactive: Color32::from_rgb(131, 131, 131),
        danger: Color32::from_rgb(200, 50, 40),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DARK
    }
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let palette = Palette::DARK;
    let mut visuals = Visuals::dark();

    visuals.window_fill = palette.background;
    visuals.panel_fill = palette.background;
    visuals.faint_bg_color = palette.inactive;
    visuals.extreme_bg_color = palette.background;

    visuals.widgets.noninteractive.bg_fill = palette.inactive;
    visuals.widgets.inactive.bg_fill = palette.inactive;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(70, 70, 70);
    visuals.widgets.active.bg_fill = palette.active;

    visuals.selection.bg_fill = palette.active.linear_multiply(0.4);
    visuals.selection.stroke.color = palette.active;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text;
    visuals.widgets.inactive.fg_stroke.color = palette.text;
    visuals.widgets.hovered.fg_stroke.color = palette.text;
    visuals.widgets.active.fg_stroke.color = palette.text;

    visuals.widgets.noninteractive.bg_stroke.color = palette.border;
    visuals.widgets.inactive.bg_stroke.color = palette.border;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let palette = Palette::LIGHT;
    let mut visuals = Visuals::light();

    visuals.window_fill = palette.background;
    visuals.panel_fill = palette.background;
    visuals.faint_bg_color = palette.inactive;
    visuals.extreme_bg_color = palette.background;

    visuals.widgets.noninteractive.bg_fill = palette.inactive;
    visuals.widgets.inactive.bg_fill = palette.inactive;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(235, 235, 240);
    visuals.widgets.active.bg_fill = palette.active;

    visuals.selection.bg_fill = palette.active.linear_multiply(0.2);
    visuals.selection.stroke.color = palette.active;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text;
    visuals.widgets.inactive.fg_stroke.color = palette.text_muted;
    visuals.widgets.hovered.fg_stroke.color = palette.text;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = palette.border;
    visuals.widgets.inactive.bg_stroke.color = palette.border;

    visuals
}
