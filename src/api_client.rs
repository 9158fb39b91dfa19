use std::fmt::{Display, Formatter};

use log::debug;
use serde_json::Value;

use crate::data_structs::notification::Notification;
use crate::data_structs::requests::authenticate_token_request::AuthenticateTokenRequest;
use crate::data_structs::requests::sign_in_request::SignInRequest;
use crate::data_structs::responses::sign_in_response::SignInResponse;

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Network(String),
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The backend answered 2xx but the body was not what the endpoint promises.
    MalformedResponse(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(detail) => {
                write!(f, "Network failure: {}", detail)
            }
            ApiError::Status(code) => {
                write!(f, "Request rejected with status {}", code)
            }
            ApiError::MalformedResponse(detail) => {
                write!(f, "Malformed response: {}", detail)
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        // total: an error without a status is a transport failure, never a panic
        match error.status() {
            Some(code) => ApiError::Status(code.as_u16()),
            None => ApiError::Network(error.to_string())
        }
    }
}

/// The three calls the notification service exposes. The screen controllers
/// only ever talk to this trait, so tests can swap in an in-process double.
pub trait NotificationApi {
    async fn sign_in(&self, email: &str, password: &str) -> Result<String, ApiError>;
    async fn get_notifications(&self, user_token: &str) -> Result<Vec<Notification>, ApiError>;
    async fn authenticate_token(&self, user_token: &str, password: &str, notification_token: &str) -> Result<(), ApiError>;
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {

    pub fn new(base_url: String) -> ApiClient {
        ApiClient {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

impl NotificationApi for ApiClient {

    async fn sign_in(&self, email: &str, password: &str) -> Result<String, ApiError> {
        debug!("attempting sign-in for {}", email);
        let response = self.client.post(format!("{}/signin", self.base_url))
            .json(&SignInRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        match serde_json::from_str::<SignInResponse>(&body) {
            Ok(parsed) => Ok(parsed.token.token),
            Err(error) => Err(ApiError::MalformedResponse(error.to_string()))
        }
    }

    async fn get_notifications(&self, user_token: &str) -> Result<Vec<Notification>, ApiError> {
        let response = self.client.get(format!("{}/notifications", self.base_url))
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", user_token))
            .send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(error) => return Err(ApiError::MalformedResponse(error.to_string()))
        };
        let items = match value.as_array() {
            Some(items) => items,
            None => return Err(ApiError::MalformedResponse("expected a list of notifications".to_string()))
        };

        let mut notifications: Vec<Notification> = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<Notification>(item.clone()) {
                Ok(notification) => notifications.push(notification),
                Err(error) => return Err(ApiError::MalformedResponse(error.to_string()))
            }
        }

        // the backend responds oldest first, callers want newest first
        notifications.reverse();
        Ok(notifications)
    }

    async fn authenticate_token(&self, user_token: &str, password: &str, notification_token: &str) -> Result<(), ApiError> {
        debug!("attempting token confirmation");
        let response = self.client.post(format!("{}/authenticate-token", self.base_url))
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", user_token))
            .json(&AuthenticateTokenRequest {
                password: password.to_string(),
                token: notification_token.to_string(),
            })
            .send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}
