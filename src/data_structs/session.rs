/// An authenticated session. The bearer token only ever lives in memory;
/// it is handed out read-only and dropped with the session at sign-out.
#[derive(Debug)]
pub struct Session {
    user_token: String,
}

impl Session {

    pub fn new(user_token: String) -> Self {
        Session { user_token }
    }

    pub fn user_token(&self) -> &str {
        &self.user_token
    }
}
