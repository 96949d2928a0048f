use assert_matches::assert_matches;
use axum::extract::{Extension, State};
use axum::Json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use prediction_cell::handlers;
use prediction_cell::models::{PredictionError, PredictionInput};
use prediction_cell::services::scoring::ChargesScoringService;
use serde_json::json;
use shared_config::AppConfig;
use shared_models::auth::SessionUser;
use shared_models::error::AppError;
use shared_models::prediction::{Region, Sex, Smoker};
use shared_utils::test_utils::{test_state, test_state_with_scorer};

fn sample_input() -> PredictionInput {
    PredictionInput {
        age: 30,
        height: 170,
        weight: 70,
        num_children: 2,
        smoker: Smoker::No,
        region: Region::Northeast,
        sex: Sex::Male,
    }
}

#[test]
fn bmi_matches_the_profile_calculation() {
    let input = sample_input();
    assert_eq!(input.bmi(), 24.2);

    let zero_height = PredictionInput { height: 0, ..sample_input() };
    assert_eq!(zero_height.bmi(), 0.0);
}

#[tokio::test]
async fn builtin_model_is_deterministic() {
    let service = ChargesScoringService::new(&AppConfig::default());

    let first = service.predict(&sample_input()).await.unwrap();
    let second = service.predict(&sample_input()).await.unwrap();

    assert_eq!(first, second);
    assert!(first > 0.0);
}

#[tokio::test]
async fn smoking_dominates_the_builtin_estimate() {
    let service = ChargesScoringService::new(&AppConfig::default());

    let nonsmoker = service.predict(&sample_input()).await.unwrap();
    let smoker = service
        .predict(&PredictionInput { smoker: Smoker::Yes, ..sample_input() })
        .await
        .unwrap();

    assert!(smoker > nonsmoker + 20000.0);
}

#[tokio::test]
async fn malformed_input_fails_validation_not_scoring() {
    let service = ChargesScoringService::new(&AppConfig::default());

    let zero_age = service
        .predict(&PredictionInput { age: 0, ..sample_input() })
        .await;
    assert_matches!(zero_age, Err(PredictionError::Invalid(_)));

    let zero_height = service
        .predict(&PredictionInput { height: 0, ..sample_input() })
        .await;
    assert_matches!(zero_height, Err(PredictionError::Invalid(_)));
}

#[tokio::test]
async fn remote_scorer_receives_the_feature_record() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/score"))
        .and(body_partial_json(json!({
            "age": 30,
            "bmi": 24.2,
            "children": 2,
            "smoker": "No",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": 4321.09 })))
        .mount(&mock_server)
        .await;

    let config = AppConfig {
        scoring_service_url: mock_server.uri(),
        ..AppConfig::default()
    };
    let service = ChargesScoringService::new(&config);

    let prediction = service.predict(&sample_input()).await.unwrap();
    assert_eq!(prediction, 4321.09);
}

#[tokio::test]
async fn remote_scorer_failure_surfaces_as_upstream_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = AppConfig {
        scoring_service_url: mock_server.uri(),
        ..AppConfig::default()
    };
    let service = ChargesScoringService::new(&config);

    let result = service.predict(&sample_input()).await;
    assert_matches!(result, Err(PredictionError::Upstream(_)));
}

#[tokio::test]
async fn predict_handler_records_history_newest_first() {
    let state = test_state();
    let user = SessionUser { id: Uuid::new_v4() };

    let first = handlers::predict_charges(
        State(state.clone()),
        Extension(user.clone()),
        Json(sample_input()),
    )
    .await
    .unwrap();

    handlers::predict_charges(
        State(state.clone()),
        Extension(user.clone()),
        Json(PredictionInput { age: 45, ..sample_input() }),
    )
    .await
    .unwrap();

    let history = handlers::prediction_history(State(state), Extension(user))
        .await
        .unwrap();
    let records = history.0["predictions"].as_array().unwrap().clone();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["age"], 45);
    assert_eq!(records[1]["predicted_charges"], first.0.prediction);
}

#[tokio::test]
async fn predict_handler_maps_validation_to_client_error() {
    let state = test_state();

    let result = handlers::predict_charges(
        State(state),
        Extension(SessionUser { id: Uuid::new_v4() }),
        Json(PredictionInput { age: 0, ..sample_input() }),
    )
    .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn predict_handler_uses_the_configured_remote_scorer() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/score"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prediction": 999.5 })))
        .mount(&mock_server)
        .await;

    let state = test_state_with_scorer(&mock_server.uri());
    let response = handlers::predict_charges(
        State(state),
        Extension(SessionUser { id: Uuid::new_v4() }),
        Json(sample_input()),
    )
    .await
    .unwrap();

    assert_eq!(response.0.prediction, 999.5);
}
