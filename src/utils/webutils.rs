use actix_session::Session;
use actix_web::{http::header, HttpResponse};
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

/// Session key holding the logged-in user's id.
pub const CURR_USER_KEY: &str = "curr_user";

const FLASH_KEY: &str = "_flashes";

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

pub fn flash(session: &Session, message: &str) -> Result<(), AppError> {
    let mut flashes: Vec<String> = session
        .get(FLASH_KEY)
        .map_err(session_err)?
        .unwrap_or_default();
    flashes.push(message.to_string());
    session.insert(FLASH_KEY, flashes).map_err(session_err)
}

/// Pops all pending flash messages; each renders once.
pub fn take_flashes(session: &Session) -> Result<Vec<String>, AppError> {
    let flashes: Vec<String> = session
        .get(FLASH_KEY)
        .map_err(session_err)?
        .unwrap_or_default();
    session.remove(FLASH_KEY);
    Ok(flashes)
}

pub fn login_session(session: &Session, user_id: Uuid) -> Result<(), AppError> {
    session.insert(CURR_USER_KEY, user_id).map_err(session_err)
}

pub fn logout_session(session: &Session) {
    session.remove(CURR_USER_KEY);
}

/// The logged-in user, if any. A stale id (user deleted since login) counts
/// as logged out.
pub async fn current_user(
    session: &Session,
    db: &PostgresService,
) -> Result<Option<entity::user::Model>, AppError> {
    let Some(user_id) = session.get::<Uuid>(CURR_USER_KEY).map_err(session_err)? else {
        return Ok(None);
    };
    match db.get_user_by_id(&user_id).await {
        Ok(user) => Ok(Some(user)),
        Err(AppError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Standard denial: flash and bounce to the home page.
pub fn access_unauthorized(session: &Session) -> Result<HttpResponse, AppError> {
    flash(session, "Access unauthorized.")?;
    Ok(see_other("/"))
}

fn session_err(e: impl std::fmt::Display) -> AppError {
    AppError::Internal(format!("session error: {e}"))
}
