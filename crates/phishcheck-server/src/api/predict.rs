//! POST /predict

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use phishcheck_core::service::PredictionResponse;
use serde::Deserialize;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Classifies the `url` field of the JSON body.
///
/// A body that is not JSON, or whose `url` is missing, null or not a string,
/// is treated the same as an empty URL: 400 `{"error": "Missing URL"}`.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> (StatusCode, Json<PredictionResponse>) {
    let url = match payload {
        Ok(Json(req)) => req.url,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected predict body");
            None
        }
    };

    let outcome = state.service.classify(url.as_deref());
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(PredictionResponse::from(&outcome)))
}

pub fn predict_routes() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}
