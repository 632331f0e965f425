use actix_session::Session;
use actix_web::{post, HttpResponse};

use crate::types::error::AppError;
use crate::utils::webutils::{flash, logout_session, see_other};

#[post("/logout")]
async fn logout(session: Session) -> Result<HttpResponse, AppError> {
    logout_session(&session);
    flash(&session, "You have successfully logged out.")?;
    Ok(see_other("/"))
}
