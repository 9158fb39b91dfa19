pub mod home;
pub mod sign_in;

/// Transient user-visible message state, the terminal stand-in for the
/// app's snackbar. Every caught error ends up here instead of propagating.
#[derive(Debug)]
pub struct Snackbar {
    pub message: String,
    pub visible: bool,
}

impl Snackbar {

    pub fn new() -> Snackbar {
        Snackbar {
            message: String::new(),
            visible: false,
        }
    }

    pub fn show(&mut self, message: String) {
        self.message = message;
        self.visible = true;
    }

    // dismissing also wipes the text, matching the dismiss handlers in the app
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.message.clear();
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::api_client::{ApiError, NotificationApi};
    use crate::data_structs::notification::Notification;

    /// Scripted stand-in for the HTTP client. Each call records itself and
    /// pops the next prepared result for its endpoint.
    pub struct FakeApi {
        pub sign_in_results: RefCell<VecDeque<Result<String, ApiError>>>,
        pub notification_results: RefCell<VecDeque<Result<Vec<Notification>, ApiError>>>,
        pub authenticate_results: RefCell<VecDeque<Result<(), ApiError>>>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeApi {

        pub fn new() -> FakeApi {
            FakeApi {
                sign_in_results: RefCell::new(VecDeque::new()),
                notification_results: RefCell::new(VecDeque::new()),
                authenticate_results: RefCell::new(VecDeque::new()),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn fetch_count(&self) -> usize {
            self.calls.borrow().iter()
                .filter(|call| call.starts_with("get_notifications"))
                .count()
        }
    }

    impl NotificationApi for FakeApi {

        async fn sign_in(&self, email: &str, _password: &str) -> Result<String, ApiError> {
            self.calls.borrow_mut().push(format!("sign_in {}", email));
            self.sign_in_results.borrow_mut().pop_front()
                .unwrap_or(Err(ApiError::Network("no scripted sign-in result".to_string())))
        }

        async fn get_notifications(&self, user_token: &str) -> Result<Vec<Notification>, ApiError> {
            self.calls.borrow_mut().push(format!("get_notifications {}", user_token));
            self.notification_results.borrow_mut().pop_front()
                .unwrap_or(Ok(Vec::new()))
        }

        async fn authenticate_token(&self, user_token: &str, password: &str, notification_token: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(
                format!("authenticate_token {} {} {}", user_token, password, notification_token));
            self.authenticate_results.borrow_mut().pop_front()
                .unwrap_or(Ok(()))
        }
    }
}
