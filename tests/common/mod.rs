use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use tracker_auth::config::EnvConfig;
use tracker_auth::db::postgres_service::PostgresService;

pub mod client;

pub const TEST_TOKEN_SECRET: &str = "test-token-secret";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        token_secret: TEST_TOKEN_SECRET.to_string(),
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_register_body() -> Value {
        register_body("test@example.com", "correct horse battery staple")
    }

    pub fn register_body(email: &str, password: &str) -> Value {
        json!({ "email": email, "password": password })
    }
}
