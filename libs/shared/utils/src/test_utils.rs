//! Helpers shared by the cell test suites.

use std::sync::Arc;

use uuid::Uuid;

use shared_config::AppConfig;
use shared_store::{AppState, Stores};

pub const TEST_STAFF_TOKEN: &str = "test-staff-token";

/// An app state over fresh in-memory stores, with the staff token set so
/// back-office routes can be exercised.
pub fn test_state() -> Arc<AppState> {
    let config = AppConfig {
        staff_api_token: TEST_STAFF_TOKEN.to_string(),
        ..AppConfig::default()
    };
    Arc::new(AppState::new(config, Stores::in_memory()))
}

/// Same as [`test_state`] but pointing the scoring adapter at a remote
/// endpoint (a wiremock server in tests).
pub fn test_state_with_scorer(scoring_url: &str) -> Arc<AppState> {
    let config = AppConfig {
        staff_api_token: TEST_STAFF_TOKEN.to_string(),
        scoring_service_url: scoring_url.to_string(),
        ..AppConfig::default()
    };
    Arc::new(AppState::new(config, Stores::in_memory()))
}

pub fn session_header(user_id: Uuid) -> String {
    format!("Bearer {}", user_id)
}

pub fn staff_header() -> String {
    format!("Bearer {}", TEST_STAFF_TOKEN)
}
