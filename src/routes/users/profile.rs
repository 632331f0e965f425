use actix_session::Session;
use actix_web::{get, http::header::ContentType, web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::html;
use crate::utils::webutils::take_flashes;

/// Public profile: the user's messages, newest first.
#[get("/{user_id}")]
async fn profile(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let user = db.get_user_by_id(&path.into_inner()).await?;
    let messages = db.list_messages_for_user(user.id).await?;
    let flashes = take_flashes(&session)?;

    let mut items = String::new();
    for message in &messages {
        items.push_str(&format!(
            "<li><a href=\"/messages/{}\">{}</a></li>\n",
            message.id,
            html::escape(&message.text)
        ));
    }
    let body = format!(
        "<h1>@{}</h1>\n<ul class=\"messages\">\n{}</ul>",
        html::escape(&user.username),
        items
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html::page("Warbler", &flashes, &body)))
}
