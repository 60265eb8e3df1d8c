use chrono::{DateTime, Duration, Utc};

pub const NOTIFICATION_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

// No queueing: concurrent notifications simply stack until they expire.
#[derive(Debug, Default)]
pub struct NotificationBoard {
    entries: Vec<Notification>,
}

impl NotificationBoard {
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind, now: DateTime<Utc>) {
        self.entries.push(Notification {
            message: message.into(),
            kind,
            expires_at: now + Duration::seconds(NOTIFICATION_TTL_SECS),
        });
    }

    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|entry| entry.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
