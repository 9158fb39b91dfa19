use log::warn;

use crate::data_structs::notification::Notification;

/// A notification stays confirmable for this many whole minutes after it
/// was created; after that it only shows up in the history tab.
pub const PENDING_WINDOW_MINUTES: i64 = 5;

#[derive(Debug, PartialEq)]
pub struct ClassifiedNotifications {
    pub pending: Vec<Notification>,
    pub history: Vec<Notification>,
}

/// Splits a fetched list into the pending and history tabs. Age is measured
/// in whole minutes (floored), so an item stays pending through 5:59 elapsed
/// and moves to history once a full sixth minute has passed. Items created
/// "in the future" by a skewed clock count as zero-aged and stay pending.
///
/// Every input lands in exactly one of the two lists, in input order.
pub fn classify(notifications: &[Notification], now_ms: i64) -> ClassifiedNotifications {
    let mut classified = ClassifiedNotifications {
        pending: Vec::new(),
        history: Vec::new(),
    };
    for notification in notifications {
        match notification.created_at_millis() {
            Some(created_ms) if elapsed_minutes(now_ms, created_ms) > PENDING_WINDOW_MINUTES => {
                classified.history.push(notification.clone());
            }
            Some(_) => {
                classified.pending.push(notification.clone());
            }
            None => {
                // no measurable age, keep it where the user can still act on it
                warn!("notification {} has an unreadable created_at ({:?}), keeping it pending",
                      notification.id, notification.created_at);
                classified.pending.push(notification.clone());
            }
        }
    }
    classified
}

// floored, not truncated: -30s elapsed is minute -1, still on the pending side
fn elapsed_minutes(now_ms: i64, created_ms: i64) -> i64 {
    (now_ms - created_ms).div_euclid(60_000)
}
