use actix_session::Session;
use actix_web::{get, http::header::ContentType, web, HttpResponse};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::html;
use crate::utils::webutils::{current_user, take_flashes};

#[get("/")]
async fn homepage(
    session: Session,
    db: web::Data<Arc<PostgresService>>,
) -> Result<HttpResponse, AppError> {
    let flashes = take_flashes(&session)?;

    let body = match current_user(&session, &db).await? {
        Some(user) => {
            let timeline = db.timeline_for(user.id).await?;
            let mut items = String::new();
            for message in &timeline {
                let author = db.get_message_author(message).await?;
                items.push_str(&format!(
                    "<li><a href=\"/users/{}\">@{}</a> {}</li>\n",
                    author.id,
                    html::escape(&author.username),
                    html::escape(&message.text)
                ));
            }
            format!(
                "<p>Signed in as @{}.</p>\n<ul class=\"timeline\">\n{}</ul>",
                html::escape(&user.username),
                items
            )
        }
        None => "<p>New here? Sign up and start warbling.</p>".to_string(),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html::page("Warbler", &flashes, &body)))
}
