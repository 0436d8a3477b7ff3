//! End-to-end tests for the Supperplan planning flow.
//!
//! These drive the real gateway router and planner with a scripted
//! upstream, walking the same path the browser does: access check, menu
//! ideas, then the cookbook for the chosen menu.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use supperplan_config::AppConfig;
use supperplan_core::error::ProviderError;
use supperplan_core::provider::{CompletionRequest, CompletionResponse, Provider, Usage};
use supperplan_gateway::{GatewayState, build_router};
use supperplan_planner::Planner;
use supperplan_planner::planner::MISSING_KEY_MESSAGE;
use tower::ServiceExt;

const CODE: &str = "THAMES_CLUB_VIP";

// ── Mock Provider ────────────────────────────────────────────────────────

/// Returns scripted replies in sequence and records every prompt it saw.
struct ScriptedProvider {
    replies: Vec<Result<String, ProviderError>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<Result<String, ProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            replies,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn texts(replies: &[&str]) -> Arc<Self> {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let mut prompts = self.prompts.lock().unwrap();
        let index = prompts.len();
        prompts.push(request.prompt);
        let reply = self
            .replies
            .get(index)
            .unwrap_or_else(|| panic!("ScriptedProvider exhausted at call #{index}"))
            .clone()?;
        Ok(CompletionResponse {
            text: reply,
            model: request.model,
            usage: Some(Usage {
                input_tokens: 1200,
                output_tokens: 900,
            }),
            stop_reason: Some("end_turn".into()),
        })
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────

fn app(provider: Option<Arc<dyn Provider>>) -> axum::Router {
    let planner = Arc::new(Planner::new(provider, "claude-3-5-sonnet-20240620", 8192));
    build_router(Arc::new(GatewayState::new(CODE, planner)), &[])
}

async fn post(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn preferences() -> Value {
    json!({
        "eventTitle": "Midsummer Supper",
        "guests": 8,
        "menuCategory": "regional",
        "categoryDetails": {"region": "Basque Country"},
        "foodBudget": "£200",
        "wineBudget": "£120",
        "likes": ["anchovies", "charred peppers"],
        "dislikes": ["coriander"],
        "restrictions": ["one pescatarian"],
        "cuisine": "Spanish",
        "skillLevel": "confident"
    })
}

const MENUS_REPLY: &str = r#"Here are your menus:
{"menus": [{"name": "Txoko Night", "description": "A Basque cider-house evening",
  "courses": {
    "amuse": {"name": "Gilda", "description": "Anchovy, olive, guindilla"},
    "first": {"name": "Piquillo peppers", "description": "Stuffed with salt cod"},
    "second": {"name": "Txangurro", "description": "Baked spider crab"},
    "main": {"name": "Txuleta", "description": "Charred aged beef"},
    "dessert": {"name": "Burnt cheesecake", "description": "La Viña style"}},
  "wine": "Txakoli then Rioja", "estimatedFoodCost": "£180"}]}
Enjoy!"#;

const COOKBOOK_REPLY: &str = r#"{"title": "Midsummer Supper", "recipes": {"main": {"name": "Txuleta"}},
  "shopping": {"proteins": ["1.2kg aged rib"]}, "finalChecklist": ["Open the Rioja"]}"#;

// ── Full flow ────────────────────────────────────────────────────────────

#[tokio::test]
async fn e2e_verify_menus_then_cookbook() {
    let provider = ScriptedProvider::texts(&[MENUS_REPLY, COOKBOOK_REPLY]);
    let app = app(Some(provider.clone()));

    // 1. Access check
    let (status, body) = post(&app, "/api/verify", json!({"code": CODE})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"valid": true}));
    assert_eq!(provider.calls(), 0, "verify must not reach upstream");

    // 2. Menu ideas
    let (status, body) = post(
        &app,
        "/api/generate-menu",
        json!({"accessCode": CODE, "data": preferences()}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let menu = body["menus"][0].clone();
    assert_eq!(menu["name"], "Txoko Night");
    assert_eq!(menu["courses"]["main"]["name"], "Txuleta");

    let menu_prompt = provider.prompt(0);
    assert!(menu_prompt.contains("Midsummer Supper"));
    assert!(menu_prompt.contains("Basque Country"));
    assert!(menu_prompt.contains("anchovies, charred peppers"));
    assert!(menu_prompt.contains("coriander"));

    // 3. Cookbook for the chosen menu
    let (status, body) = post(
        &app,
        "/api/generate-cookbook",
        json!({
            "accessCode": CODE,
            "data": {
                "eventTitle": "Midsummer Supper",
                "guests": 8,
                "skillLevel": "confident",
                "menu": menu,
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Midsummer Supper");
    assert_eq!(body["shopping"]["proteins"][0], "1.2kg aged rib");
    assert_eq!(provider.calls(), 2);

    let cookbook_prompt = provider.prompt(1);
    for dish in ["Gilda", "Piquillo peppers", "Txangurro", "Txuleta", "Burnt cheesecake"] {
        assert!(cookbook_prompt.contains(dish), "cookbook prompt is missing {dish}");
    }
    assert!(cookbook_prompt.contains("Txoko Night"));
}

#[tokio::test]
async fn e2e_wrong_code_never_reaches_upstream() {
    let provider = ScriptedProvider::texts(&[]);
    let app = app(Some(provider.clone()));

    let (status, body) = post(&app, "/api/verify", json!({"code": "thames_club_vip"})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"valid": false}));

    for uri in ["/api/generate-menu", "/api/generate-cookbook"] {
        let (status, body) = post(
            &app,
            uri,
            json!({"accessCode": "GUESS", "data": preferences()}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": "Unauthorized"}));
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn e2e_without_api_key_generation_is_unavailable() {
    let app = app(None);

    // The access check still works without an upstream.
    let (status, _) = post(&app, "/api/verify", json!({"code": CODE})).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(
        &app,
        "/api/generate-menu",
        json!({"accessCode": CODE, "data": preferences()}),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], MISSING_KEY_MESSAGE);
}

#[tokio::test]
async fn e2e_upstream_timeout_is_internal_error() {
    let provider = ScriptedProvider::new(vec![Err(ProviderError::Timeout("90s elapsed".into()))]);
    let app = app(Some(provider.clone()));

    let (status, body) = post(
        &app,
        "/api/generate-menu",
        json!({"accessCode": CODE, "data": preferences()}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("timed out"));
    assert_eq!(provider.calls(), 1, "no retry after a failed call");
}

#[tokio::test]
async fn e2e_prose_reply_is_internal_error() {
    let provider = ScriptedProvider::texts(&["Sorry, I can't plan that dinner."]);
    let app = app(Some(provider));

    let (status, body) = post(
        &app,
        "/api/generate-menu",
        json!({"accessCode": CODE, "data": preferences()}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("No JSON found"));
}

#[tokio::test]
async fn e2e_cookbook_without_menu_is_bad_request() {
    let provider = ScriptedProvider::texts(&[]);
    let app = app(Some(provider.clone()));

    let (status, body) = post(
        &app,
        "/api/generate-cookbook",
        json!({"accessCode": CODE, "data": {"eventTitle": "Supper", "guests": 4}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("menu"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn e2e_frontend_and_health_are_served() {
    let app = app(None);

    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let health: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health["provider_configured"], false);
}

// ── Configuration ────────────────────────────────────────────────────────

#[test]
fn e2e_default_config_matches_deployment_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.access_code, CODE);
    assert_eq!(config.gateway.port, 5000);
    assert_eq!(config.anthropic.max_tokens, 8192);
    assert_eq!(config.anthropic.timeout_secs, 90);
    assert!(!config.has_api_key());
}

#[test]
fn e2e_onboard_template_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, AppConfig::default_toml()).unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.model, AppConfig::default().model);
    assert_eq!(config.bind_addr(), AppConfig::default().bind_addr());
}
