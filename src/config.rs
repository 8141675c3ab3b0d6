use std::env;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub token_secret: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    /// Read once at startup. The struct is handed to the app as shared
    /// data; nothing reads the environment after this returns.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_url: Self::get_env("DATABASE_URL"),
            token_secret: Self::get_env("TOKEN_SECRET"),
        }
    }
}
