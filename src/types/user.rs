use serde::{Deserialize, Serialize};

/// Signup input. `password` is the plaintext and only lives long enough to be
/// hashed.
#[derive(Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
