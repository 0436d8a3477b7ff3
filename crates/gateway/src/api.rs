//! JSON API handlers.
//!
//! - `POST /api/verify`              check an access code
//! - `POST /api/generate-menu`       five menu ideas for a set of preferences
//! - `POST /api/generate-cookbook`   full cookbook for one selected menu
//!
//! The generation endpoints check `accessCode` before looking at `data`.

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use supperplan_core::{Error, ProviderError};
use supperplan_planner::{CookbookRequest, MenuPreferences};
use tracing::{error, info, warn};

use crate::SharedState;
use crate::access::access_granted;

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    code: Value,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    valid: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    access_code: Value,
    #[serde(default)]
    data: Value,
}

// ── Errors ────────────────────────────────────────────────────────────────

/// Errors surfaced to API clients as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    BadRequest(String),
    /// The body could not be read as JSON; keeps the extractor's status.
    Rejected { status: StatusCode, message: String },
    Generation(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Generation(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: format!("Invalid request body: {}", rejection.body_text()),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Generation(Error::InvalidRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Generation(e) if e.is_not_configured() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Unauthorized".into(),
            ApiError::BadRequest(msg) | ApiError::Rejected { message: msg, .. } => msg.clone(),
            ApiError::Generation(Error::InvalidRequest(msg)) => msg.clone(),
            ApiError::Generation(Error::Provider(inner @ ProviderError::NotConfigured(_))) => {
                inner.to_string()
            }
            ApiError::Generation(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Generation failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────

pub async fn verify_handler(
    State(state): State<SharedState>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VerifyResponse>), ApiError> {
    let Json(body) = body?;
    if access_granted(&body.code, &state.access_code) {
        info!("Access code accepted");
        Ok((StatusCode::OK, Json(VerifyResponse { valid: true })))
    } else {
        warn!("Access code rejected");
        Ok((StatusCode::UNAUTHORIZED, Json(VerifyResponse { valid: false })))
    }
}

pub async fn generate_menu_handler(
    State(state): State<SharedState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    authorize(&state, &body)?;
    let prefs: MenuPreferences = parse_data(body.data)?;

    let menus = state.planner.generate_menus(&prefs).await?;
    Ok(Json(menus))
}

pub async fn generate_cookbook_handler(
    State(state): State<SharedState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body?;
    authorize(&state, &body)?;
    let request: CookbookRequest = parse_data(body.data)?;

    let cookbook = state.planner.generate_cookbook(&request).await?;
    Ok(Json(cookbook))
}

fn authorize(state: &SharedState, body: &GenerateRequest) -> Result<(), ApiError> {
    if access_granted(&body.access_code, &state.access_code) {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

fn parse_data<T: DeserializeOwned>(data: Value) -> Result<T, ApiError> {
    if data.is_null() {
        return Err(ApiError::BadRequest("Missing data".into()));
    }
    serde_json::from_value(data).map_err(|e| ApiError::BadRequest(format!("Invalid data: {e}")))
}
