use actix_web::web;

pub mod auth;
pub mod home;
pub mod messages;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::homepage);

    cfg.service(auth::signup::signup);
    cfg.service(auth::login::login);
    cfg.service(auth::logout::logout);

    cfg.service(
        web::scope("/messages")
            .service(messages::new::add_message)
            .service(messages::delete::delete_message)
            .service(messages::show::show_message),
    );

    cfg.service(
        web::scope("/users")
            .service(users::follow::follow)
            .service(users::unfollow::stop_following)
            .service(users::delete::delete_profile)
            .service(users::followers::followers)
            .service(users::following::following)
            .service(users::profile::profile),
    );
}
