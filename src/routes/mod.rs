use crate::utils::webutils::{validate_admin, validate_session};
use actix_web::web;

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod my;
pub mod settings;
pub mod startups;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_session);
    let admin_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/auth")
            .service(auth::signup::signup)
            .service(auth::login::login)
            .service(auth::session::session)
            .service(
                web::scope("/logout")
                    .service(auth::logout::logout)
                    .wrap(user_auth.clone()),
            ),
    );

    // public showcase, no auth
    cfg.service(web::scope("/startups").service(startups::showcase::list));

    cfg.service(
        web::scope("/my/startups")
            .service(my::list::list)
            .service(my::create::create)
            .service(my::update::update)
            .service(my::visibility::toggle)
            .service(my::delete::delete)
            .wrap(user_auth.clone()),
    );

    cfg.service(
        web::scope("/dashboard")
            .service(dashboard::stats)
            .wrap(user_auth.clone()),
    );

    cfg.service(
        web::scope("/settings")
            .service(settings::update_profile)
            .wrap(user_auth),
    );

    cfg.service(
        web::scope("/admin")
            .service(admin::overview::overview)
            .service(admin::users::delete_user)
            .service(admin::startups::delete_startup)
            .service(admin::startups::toggle_visibility)
            .wrap(admin_auth),
    );
}
