use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifiers come back as numbers from the backend today, but the field
/// is documented as opaque, so a string-valued id must keep working.
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
#[derive(Clone)]
#[serde(untagged)]
pub enum NotificationId {
    Number(i64),
    Text(String),
}

impl Default for NotificationId {
    fn default() -> Self {
        NotificationId::Text(String::new())
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationId::Number(id) => write!(f, "{}", id),
            NotificationId::Text(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
#[derive(Clone)]
pub struct Notification {
    #[serde(default)]
    pub id: NotificationId,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub created_at: String,
}

impl Notification {

    pub fn created_at_millis(&self) -> Option<i64> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(parsed.timestamp_millis());
        }
        // some backends serialize without the offset, those are UTC
        match NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%d %H:%M:%S") {
            Ok(parsed) => Some(parsed.and_utc().timestamp_millis()),
            Err(_) => None
        }
    }

    /// Renders the creation instant the way the app displays it, e.g.
    /// "Tue, 01 Mar 2022 14:30:00 GMT". Falls back to the raw string when
    /// the timestamp cannot be parsed.
    pub fn created_at_utc_string(&self) -> String {
        match self.created_at_millis() {
            Some(millis) => {
                let instant = DateTime::<Utc>::from_timestamp_millis(millis)
                    .expect("timestamp out of range");
                instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
            }
            None => self.created_at.clone()
        }
    }
}
