use actix_session::Session;
use actix_web::{post, web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::webutils::{access_unauthorized, current_user, see_other};

#[post("/follow/{user_id}")]
async fn follow(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let Some(user) = current_user(&session, &db).await? else {
        return access_unauthorized(&session);
    };

    let followed = db.get_user_by_id(&path.into_inner()).await?;
    db.follow_user(user.id, followed.id).await?;

    Ok(see_other(&format!("/users/{}/following", user.id)))
}
