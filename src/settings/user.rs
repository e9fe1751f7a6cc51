//! Signed-in user summary shown above the main menu.

use chrono::{DateTime, FixedOffset, Utc};

use crate::storage::{KeyValueStore, USER_CREATED_AT_KEY, USER_NAME_KEY};

/// Day counting happens in Korea Standard Time.
const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Name and account age read from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSummary {
    /// Display name, if stored
    pub name: Option<String>,
    /// Account creation time, if stored and valid
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl UserSummary {
    /// Read the summary from storage. Unreadable entries count as absent.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let name = read(store, USER_NAME_KEY).filter(|n| !n.trim().is_empty());

        let created_at = read(store, USER_CREATED_AT_KEY).and_then(|raw| {
            DateTime::parse_from_rfc3339(raw.trim())
                .map_err(|e| tracing::warn!("Ignoring malformed {}: {}", USER_CREATED_AT_KEY, e))
                .ok()
        });

        Self { name, created_at }
    }

    /// "D+N" badge: whole days since the account was created.
    pub fn days_badge(&self, now: DateTime<Utc>) -> String {
        let days = self
            .created_at
            .map(|created| days_since(created, now))
            .unwrap_or(0);
        format!("D+{}", days)
    }

    /// Line under the badge.
    pub fn subtitle(&self) -> String {
        match &self.name {
            Some(name) => format!("{}, traveller", name),
            None => "User".to_string(),
        }
    }
}

/// Calendar days between `created` and `now`, both taken as KST dates.
///
/// Never negative.
pub fn days_since(created: DateTime<FixedOffset>, now: DateTime<Utc>) -> i64 {
    let Some(kst) = FixedOffset::east_opt(KST_OFFSET_SECS) else {
        return 0;
    };

    let today = now.with_timezone(&kst).date_naive();
    let created_on = created.with_timezone(&kst).date_naive();

    (today - created_on).num_days().max(0)
}

fn read(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", key, e);
            None
        }
    }
}
