use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::prediction::{Region, Sex, Smoker};

use crate::models::{PredictionError, PredictionInput};

/// Adapter over the charges predictor.
///
/// When a scoring service URL is configured, the feature record goes out
/// over HTTP and the service's number comes back; otherwise the built-in
/// linear model evaluates locally. Either way, scoring is deterministic
/// and side-effect free for well-formed input.
pub struct ChargesScoringService {
    client: Client,
    remote_url: Option<String>,
}

impl ChargesScoringService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            remote_url: config
                .has_remote_scorer()
                .then(|| config.scoring_service_url.clone()),
        }
    }

    pub async fn predict(&self, input: &PredictionInput) -> Result<f64, PredictionError> {
        input.validate()?;

        let charges = match &self.remote_url {
            Some(url) => self.score_remote(url, input).await?,
            None => score_builtin(input),
        };

        debug!("Predicted charges {:.2} (bmi {:.1})", charges, input.bmi());
        Ok(charges)
    }

    async fn score_remote(&self, base_url: &str, input: &PredictionInput) -> Result<f64, PredictionError> {
        let url = format!("{}/score", base_url.trim_end_matches('/'));

        let body = json!({
            "age": input.age,
            "bmi": input.bmi(),
            "children": input.num_children,
            "smoker": input.smoker,
            "region": input.region,
            "sex": input.sex,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PredictionError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Scoring service returned {}", status);
            return Err(PredictionError::Upstream(format!(
                "scoring service returned {}",
                status
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| PredictionError::Upstream(e.to_string()))?;

        payload
            .get("prediction")
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                PredictionError::Upstream("scoring response missing prediction".to_string())
            })
    }
}

/// Ordinary-least-squares fit of the standard insurance-charges dataset,
/// on age, BMI, children, smoker, sex and region. Intercept and
/// coefficients are fixed, so the estimate is reproducible.
fn score_builtin(input: &PredictionInput) -> f64 {
    const INTERCEPT: f64 = -11938.5;
    const PER_YEAR: f64 = 257.85;
    const PER_BMI: f64 = 339.19;
    const PER_CHILD: f64 = 475.50;
    const SMOKER: f64 = 23848.53;
    const MALE: f64 = -131.31;

    let region_effect = match input.region {
        Region::Northeast => 0.0,
        Region::Northwest => -352.96,
        Region::Southeast => -1035.02,
        Region::Southwest => -960.05,
    };

    let mut charges = INTERCEPT
        + PER_YEAR * input.age as f64
        + PER_BMI * input.bmi()
        + PER_CHILD * input.num_children as f64
        + region_effect;

    if input.smoker == Smoker::Yes {
        charges += SMOKER;
    }
    if input.sex == Sex::Male {
        charges += MALE;
    }

    round_cents(charges.max(0.0))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
