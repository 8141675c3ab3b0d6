use actix_web::{web, App};
use std::sync::Arc;
use tracker_auth::{
    db::postgres_service::PostgresService, routes::configure_routes, types::error::AppError,
};

use super::get_test_config;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(
                web::JsonConfig::default().error_handler(|_err, _req| AppError::InvalidJson.into()),
            )
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(get_test_config()))
            .configure(configure_routes)
    }
}
