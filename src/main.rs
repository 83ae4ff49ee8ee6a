use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use solace::config::{EnvConfig, CONFIG};
use solace::db::postgres_service::PostgresService;
use solace::policy::AdminPolicy;
use solace::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let policy = AdminPolicy::from_csv(&config.admin_emails);
    if policy.is_empty() {
        tracing::warn!("ADMIN_EMAILS is empty, no account will have admin access");
    }

    CONFIG.set(config).ok();

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(policy.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
