use actix_session::Session;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::NewUser};
use crate::utils::webutils::{flash, login_session, see_other};

#[post("/signup")]
async fn signup(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
    form: web::Form<NewUser>,
) -> Result<HttpResponse, AppError> {
    let new_user = crate::db::user::signup(form.into_inner())?;

    let user = match db.insert_user(new_user).await {
        Ok(user) => user,
        Err(AppError::AlreadyExists) => {
            flash(&session, "Username or email already taken.")?;
            return Ok(see_other("/"));
        }
        Err(e) => return Err(e),
    };

    login_session(&session, user.id)?;
    Ok(see_other("/"))
}
