use actix_session::Session;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::webutils::{access_unauthorized, current_user, see_other};

#[post("/{message_id}/delete")]
async fn delete_message(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let Some(user) = current_user(&session, &db).await? else {
        return access_unauthorized(&session);
    };

    let message = db.get_message(path.into_inner()).await?;
    if message.user_id != user.id {
        return access_unauthorized(&session);
    }

    db.delete_message(message.id).await?;
    Ok(see_other(&format!("/users/{}", user.id)))
}
