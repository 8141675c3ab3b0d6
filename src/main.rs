use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracker_auth::config::EnvConfig;
use tracker_auth::db::postgres_service::PostgresService;
use tracker_auth::routes::configure_routes;
use tracker_auth::types::error::AppError;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    tracing::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(
                web::JsonConfig::default().error_handler(|_err, _req| AppError::InvalidJson.into()),
            )
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
