use actix_session::Session;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::LoginForm};
use crate::utils::webutils::{flash, login_session, see_other};

#[post("/login")]
async fn login(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    match db.authenticate(&form.username, &form.password).await? {
        Some(user) => {
            login_session(&session, user.id)?;
            flash(&session, &format!("Hello, {}!", user.username))?;
            Ok(see_other("/"))
        }
        None => {
            flash(&session, "Invalid credentials.")?;
            Ok(see_other("/"))
        }
    }
}
