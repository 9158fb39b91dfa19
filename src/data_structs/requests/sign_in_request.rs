use serde::Serialize;

#[derive(Debug)]
#[derive(Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}
