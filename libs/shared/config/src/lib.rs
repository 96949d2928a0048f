use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_port: u16,
    pub scoring_service_url: String,
    pub staff_api_token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            bind_port: env::var("BIND_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            scoring_service_url: env::var("SCORING_SERVICE_URL")
                .unwrap_or_else(|_| {
                    warn!("SCORING_SERVICE_URL not set, using built-in charges model");
                    String::new()
                }),
            staff_api_token: env::var("STAFF_API_TOKEN")
                .unwrap_or_else(|_| {
                    warn!("STAFF_API_TOKEN not set, staff endpoints will reject all requests");
                    String::new()
                }),
        };

        config
    }

    /// Remote scoring is optional; without it the built-in model is used.
    pub fn has_remote_scorer(&self) -> bool {
        !self.scoring_service_url.is_empty()
    }

    pub fn is_staff_configured(&self) -> bool {
        !self.staff_api_token.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_port: 3000,
            scoring_service_url: String::new(),
            staff_api_token: String::new(),
        }
    }
}
