use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct MessageForm {
    pub text: String,
}
