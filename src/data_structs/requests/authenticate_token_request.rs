use serde::Serialize;

// sent to confirm a single pending notification
#[derive(Debug)]
#[derive(Serialize)]
pub struct AuthenticateTokenRequest {
    pub password: String,
    pub token: String,
}
