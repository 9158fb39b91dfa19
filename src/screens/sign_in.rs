use log::error;

use crate::api_client::{ApiError, NotificationApi};
use crate::data_structs::session::Session;
use crate::screens::home::HomeScreen;
use crate::screens::Snackbar;

/// Field-level state of the sign-in screen.
#[derive(Debug)]
pub struct SignInScreen {
    pub email: String,
    pub password: String,
    pub snack: Snackbar,
    pub loading: bool,
}

impl SignInScreen {

    pub fn new() -> SignInScreen {
        SignInScreen {
            email: String::new(),
            password: String::new(),
            snack: Snackbar::new(),
            loading: false,
        }
    }

    /// Submits the entered credentials. On success the fresh bearer token is
    /// used right away to pull the user's notifications, and the populated
    /// home screen is handed back together with the session (the navigation
    /// step). On a rejected sign-in the credential fields are wiped and the
    /// snackbar carries the status code; a transport failure leaves the
    /// fields alone so the user can simply retry.
    pub async fn submit<A: NotificationApi>(&mut self, api: &A, now_ms: i64) -> Option<(Session, HomeScreen)> {
        self.loading = true;
        let result = api.sign_in(&self.email, &self.password).await;
        self.loading = false;

        match result {
            Ok(user_token) => {
                let session = Session::new(user_token);
                let mut home = HomeScreen::new();
                home.refresh(api, &session, now_ms).await;
                self.email.clear();
                self.password.clear();
                Some((session, home))
            }
            Err(ApiError::Status(code)) => {
                self.snack.show(format!(
                    "An error has occurred, check your credentials. (Error code: {})", code));
                self.email.clear();
                self.password.clear();
                None
            }
            Err(other) => {
                error!("sign-in failed: {}", other);
                self.snack.show("An error has occurred, check your credentials.".to_string());
                None
            }
        }
    }
}
