//! Main menu rows and static info cards.

/// Rows of the main settings menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuRow {
    Accessibility,
    Privacy,
    Notifications,
    Friends,
    Other,
    Logout,
}

impl MenuRow {
    /// Get all rows in display order.
    pub fn all() -> &'static [MenuRow] {
        &[
            MenuRow::Accessibility,
            MenuRow::Privacy,
            MenuRow::Notifications,
            MenuRow::Friends,
            MenuRow::Other,
            MenuRow::Logout,
        ]
    }

    /// Row label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuRow::Accessibility => "Accessibility",
            MenuRow::Privacy => "Privacy",
            MenuRow::Notifications => "Notifications & reminders",
            MenuRow::Friends => "Friends",
            MenuRow::Other => "Other",
            MenuRow::Logout => "Log out",
        }
    }
}

/// Static cards on the "Other" view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoCard {
    Support,
    UserGuide,
}

impl InfoCard {
    /// Get all cards in display order.
    pub fn all() -> &'static [InfoCard] {
        &[InfoCard::Support, InfoCard::UserGuide]
    }

    /// Card title.
    pub fn title(&self) -> &'static str {
        match self {
            InfoCard::Support => "Support",
            InfoCard::UserGuide => "User guide",
        }
    }

    /// Card description.
    pub fn description(&self) -> &'static str {
        match self {
            InfoCard::Support => "Ask us anything or report\na problem at any time",
            InfoCard::UserGuide => "See the main features and\nhow to use them at a glance",
        }
    }
}
