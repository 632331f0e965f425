use actix_session::Session;
use actix_web::{get, http::header::ContentType, web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::html;
use crate::utils::webutils::take_flashes;

#[get("/{message_id}")]
async fn show_message(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let message = db.get_message(path.into_inner()).await?;
    let author = db.get_message_author(&message).await?;
    let flashes = take_flashes(&session)?;

    let body = format!(
        "<article class=\"message\">\n<a href=\"/users/{}\">@{}</a>\n<p>{}</p>\n<time>{}</time>\n</article>",
        author.id,
        html::escape(&author.username),
        html::escape(&message.text),
        message.created_at
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html::page("Warbler", &flashes, &body)))
}
