use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::{web, App};
use std::sync::Arc;
use warbler::{db::postgres_service::PostgresService, types::user::NewUser};

// long enough for Key::derive_from; never used outside tests
const TEST_SECRET: &str = "warbler-test-secret-key-0123456789";

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let session_key = Key::derive_from(TEST_SECRET.as_bytes());
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key)
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(warbler::routes::configure_routes)
    }

    /// Signup + insert with a fixed password so tests can log in over HTTP.
    pub async fn create_test_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> entity::user::Model {
        let user = warbler::db::user::signup(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            image_url: None,
        })
        .expect("Failed to build user");

        self.db
            .insert_user(user)
            .await
            .expect("Failed to insert user")
    }
}

/// The session cookie set by a response, if the handler touched the session.
#[allow(dead_code)]
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == "id")
        .map(|cookie| cookie.into_owned())
}

#[allow(dead_code)]
pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(actix_web::http::header::LOCATION)
        .expect("redirect location")
        .to_str()
        .expect("location is ascii")
        .to_string()
}
