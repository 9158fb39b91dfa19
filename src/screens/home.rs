use log::{error, warn};

use crate::api_client::{ApiError, NotificationApi};
use crate::classifier::classify;
use crate::data_structs::notification::Notification;
use crate::data_structs::session::Session;
use crate::screens::Snackbar;

/// The notification screen: a pending tab, a history tab, and at most one
/// open authentication dialog. Both tabs are replaced wholesale by every
/// refresh; nothing is merged.
#[derive(Debug)]
pub struct HomeScreen {
    pub pending: Vec<Notification>,
    pub history: Vec<Notification>,
    pub dialog: Option<AuthenticationDialog>,
    pub snack: Snackbar,
}

/// State of the password dialog for one selected pending notification.
#[derive(Debug)]
pub struct AuthenticationDialog {
    pub notification: Notification,
    pub password: String,
    pub loading: bool,
}

impl AuthenticationDialog {

    fn new(notification: Notification) -> AuthenticationDialog {
        AuthenticationDialog {
            notification,
            password: String::new(),
            loading: false,
        }
    }
}

impl HomeScreen {

    pub fn new() -> HomeScreen {
        HomeScreen {
            pending: Vec::new(),
            history: Vec::new(),
            dialog: None,
            snack: Snackbar::new(),
        }
    }

    /// Re-fetches the notification list and swaps in the fresh
    /// classification. A failed fetch is swallowed: the previous tabs stay
    /// up, stale, and only the log records what happened. A body the
    /// backend mangled degrades to empty tabs instead.
    pub async fn refresh<A: NotificationApi>(&mut self, api: &A, session: &Session, now_ms: i64) {
        match api.get_notifications(session.user_token()).await {
            Ok(notifications) => {
                let classified = classify(&notifications, now_ms);
                self.pending = classified.pending;
                self.history = classified.history;
            }
            Err(ApiError::MalformedResponse(detail)) => {
                warn!("notification list was malformed ({}), showing empty tabs", detail);
                self.pending = Vec::new();
                self.history = Vec::new();
            }
            Err(other) => {
                warn!("refresh failed, keeping the previous tabs: {}", other);
            }
        }
    }

    /// Opens the authentication dialog for the pending row at `index`.
    pub fn open_dialog(&mut self, index: usize) -> bool {
        match self.pending.get(index) {
            Some(notification) => {
                self.dialog = Some(AuthenticationDialog::new(notification.clone()));
                true
            }
            None => false
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Sends the dialog's password together with the selected notification's
    /// token. On acknowledgment the dialog closes and the tabs are
    /// refreshed; on rejection the dialog stays open and the snackbar
    /// carries the status code. The password field resets either way.
    /// Returns whether the confirmation went through.
    //todo: nothing debounces this, a double-entered confirm fires two
    //  overlapping requests; a single-flight guard would close that hole
    pub async fn submit_confirmation<A: NotificationApi>(&mut self, api: &A, session: &Session, now_ms: i64) -> bool {
        let result = match self.dialog.as_mut() {
            Some(dialog) => {
                dialog.loading = true;
                let result = api.authenticate_token(
                    session.user_token(), &dialog.password, &dialog.notification.token).await;
                dialog.password.clear();
                dialog.loading = false;
                result
            }
            None => return false
        };

        match result {
            Ok(()) => {
                self.refresh(api, session, now_ms).await;
                self.dialog = None;
                true
            }
            Err(ApiError::Status(code)) => {
                self.snack.show(format!("An error has occurred. (Error code: {})", code));
                false
            }
            Err(other) => {
                error!("token confirmation failed: {}", other);
                self.snack.show("An error has occurred.".to_string());
                false
            }
        }
    }
}
