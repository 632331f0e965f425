use actix_session::Session;
use actix_web::{get, http::header::ContentType, web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::html;
use crate::utils::webutils::{access_unauthorized, current_user, take_flashes};

/// Who follows this user. Login required.
#[get("/{user_id}/followers")]
async fn followers(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    if current_user(&session, &db).await?.is_none() {
        return access_unauthorized(&session);
    }

    let user = db.get_user_by_id(&path.into_inner()).await?;
    let followers = db.list_followers(user.id).await?;
    let flashes = take_flashes(&session)?;

    let mut items = String::new();
    for follower in &followers {
        items.push_str(&format!(
            "<li><a href=\"/users/{}\">@{}</a></li>\n",
            follower.id,
            html::escape(&follower.username)
        ));
    }
    let body = format!(
        "<h1>Followers of @{}</h1>\n<ul class=\"users\">\n{}</ul>",
        html::escape(&user.username),
        items
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html::page("Warbler", &flashes, &body)))
}
