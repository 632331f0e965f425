use actix_session::Session;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::webutils::{access_unauthorized, current_user, flash, logout_session, see_other};

/// Delete the logged-in user's own account. Their messages and follow edges
/// cascade away with the row.
#[post("/delete")]
async fn delete_profile(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
) -> Result<HttpResponse, AppError> {
    let Some(user) = current_user(&session, &db).await? else {
        return access_unauthorized(&session);
    };

    logout_session(&session);
    db.delete_user(user.id).await?;
    flash(&session, "Your account has been deleted.")?;

    Ok(see_other("/"))
}
