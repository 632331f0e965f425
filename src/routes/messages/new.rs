use actix_session::Session;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, message::MessageForm};
use crate::utils::webutils::{access_unauthorized, current_user, see_other};

#[post("/new")]
async fn add_message(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
    form: web::Form<MessageForm>,
) -> Result<HttpResponse, AppError> {
    let Some(user) = current_user(&session, &db).await? else {
        return access_unauthorized(&session);
    };

    // the author is always the session user
    let message = db.create_message(user.id, form.into_inner().text).await?;
    tracing::debug!("user {} posted message {}", user.id, message.id);

    Ok(see_other(&format!("/users/{}", user.id)))
}
