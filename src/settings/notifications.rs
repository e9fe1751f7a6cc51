//! Notification flow pages and values.

use chrono::Weekday;

use super::pager::FlowPage;

/// Pages of the notifications flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationPage {
    /// Social activity alerts
    #[default]
    SocialAlerts,
    /// Reminders to record, on chosen weekdays
    RecordReminders,
}

impl FlowPage for NotificationPage {
    fn all() -> &'static [Self] {
        &[
            NotificationPage::SocialAlerts,
            NotificationPage::RecordReminders,
        ]
    }

    fn title(&self) -> &'static str {
        match self {
            NotificationPage::SocialAlerts => "Notifications",
            NotificationPage::RecordReminders => "Record reminders",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            NotificationPage::SocialAlerts => "Get alerts about\nsocial activity",
            NotificationPage::RecordReminders => "Reminds you to record\nat times that fit your day",
        }
    }
}

/// Weekdays in selector order, Sunday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Set of weekdays chosen for reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReminderDays {
    days: [bool; 7],
}

impl ReminderDays {
    /// Whether `day` is selected.
    pub fn contains(&self, day: Weekday) -> bool {
        self.days[day.num_days_from_sunday() as usize]
    }

    /// Flip the selection of `day`. Returns the new membership.
    pub fn toggle(&mut self, day: Weekday) -> bool {
        let slot = &mut self.days[day.num_days_from_sunday() as usize];
        *slot = !*slot;
        *slot
    }

    /// Selected days, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.iter().copied().filter(|d| self.contains(*d))
    }

    /// Number of selected days.
    pub fn len(&self) -> usize {
        self.days.iter().filter(|d| **d).count()
    }

    /// Whether no day is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Get the selector label for a weekday.
pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Values edited by the notifications flow. Session-local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationSettings {
    /// Social alerts enabled
    pub social_alerts: bool,
    /// Record reminders enabled
    pub record_reminders: bool,
    /// Days the reminder fires on
    pub reminder_days: ReminderDays,
}
