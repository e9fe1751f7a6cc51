//! UI widgets for reusable components.

pub mod nav_bar;
pub mod page_indicator;
pub mod toggle_button;

pub use nav_bar::{NavigationBar, NAV_BAR_ROUTES};
pub use page_indicator::{Marker, PageIndicator};
pub use toggle_button::{ToggleButton, ToggleRegion};
