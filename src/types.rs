pub use crate::utils::database;
use crate::modules::auth::service::otp::{OtpGateway, TwilioVerify};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub token_secret: String,
}

pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
    pub auth: AuthContext,
    pub otp_gateway: Arc<dyn OtpGateway>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub token_secret: String,
}

#[derive(Clone)]
pub struct OtpConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub verify_service_id: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub otp: OtpConfig,
}

impl Default for Config {
    fn default() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").expect("APP_ENV not set");
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u32>()
            .expect("Invalid PORT number");
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let token_secret = env::var("TOKEN_SECRET").expect("TOKEN_SECRET not set");
        let otp_account_sid =
            env::var("TWILIO_ACCOUNT_SID").expect("TWILIO_ACCOUNT_SID not set");
        let otp_auth_token = env::var("TWILIO_AUTH_TOKEN").expect("TWILIO_AUTH_TOKEN not set");
        let otp_verify_service_id =
            env::var("TWILIO_VERIFY_SERVICE_ID").expect("TWILIO_VERIFY_SERVICE_ID not set");

        Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            auth: AuthConfig { token_secret },
            otp: OtpConfig {
                account_sid: otp_account_sid,
                auth_token: otp_auth_token,
                verify_service_id: otp_verify_service_id,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let db_conn = database::connect(self.database.url.as_str()).await;
        database::migrate(db_conn.clone()).await;

        Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            db_conn,
            auth: AuthContext {
                token_secret: self.auth.token_secret,
            },
            otp_gateway: Arc::new(TwilioVerify::new(self.otp)),
        }
    }
}
