use chrono::{DateTime, Duration, Utc};

/// Transient confirmation message that dismisses itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Drop `slot` once its notice has expired
pub(crate) fn expire(slot: &mut Option<Notice>, now: DateTime<Utc>) {
    if slot.as_ref().is_some_and(|n| n.is_expired(now)) {
        *slot = None;
    }
}
