use serde::Deserialize;

// the sign-in endpoint nests the credential one level down: {token: {token: "..."}}
#[derive(Debug)]
#[derive(Deserialize)]
pub struct SignInResponse {
    pub token: SessionToken,
}

#[derive(Debug)]
#[derive(Deserialize)]
pub struct SessionToken {
    pub token: String,
}
