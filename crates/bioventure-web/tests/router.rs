//! End-to-end route tests through `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body, BodyDataStream};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bioventure_common::AiGeneratedPlan;
use bioventure_llm::{GenerationBackend, GenerationOptions, PlanGenerator};
use bioventure_test_utils::{sample_plan, scenario_context, FakeBackend, FakeReply};
use bioventure_web::controller::{Controller, FAILURE_NOTICE};
use bioventure_web::router::build_router;
use bioventure_web::state::AppState;
use bioventure_web::view::GenerationPhase;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio_stream::StreamExt;
use tower::ServiceExt;

fn app_with(fake: Arc<FakeBackend>) -> (Router, Arc<Controller>) {
    let backend: Arc<dyn GenerationBackend> = fake;
    let generator = PlanGenerator::new(backend, GenerationOptions::default());
    let state = AppState::new(generator, Duration::from_millis(250));
    let controller = state.controller.clone();
    (build_router(state), controller)
}

fn app() -> Router {
    app_with(Arc::new(FakeBackend::with_plan(&sample_plan()))).0
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn generate_request(body: &Value) -> Request<Body> {
    Request::post("/api/architect/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn scenario_json() -> Value {
    serde_json::to_value(scenario_context()).unwrap()
}

fn form_request(form: &'static str) -> Request<Body> {
    Request::post("/architect/generate")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap()
}

async fn open_events(app: &Router) -> BodyDataStream {
    let response = app
        .clone()
        .oneshot(Request::get("/api/events").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response.into_body().into_data_stream()
}

async fn next_frame(events: &mut BodyDataStream) -> String {
    let chunk = events.next().await.unwrap().unwrap();
    String::from_utf8(chunk.to_vec()).unwrap()
}

async fn wait_until_settled(controller: &Controller) {
    while controller.phase() == GenerationPhase::Loading {
        tokio::task::yield_now().await;
    }
}

// ── Market ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_market_page_lists_catalog() {
    let (status, html) = get(&app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Established Models"));
    assert!(html.contains("Precision GLP-1 Optimization"));
    assert!(html.contains("Exosome Distribution Network"));
}

#[tokio::test]
async fn test_market_page_filters_by_sector() {
    let (status, html) = get(&app(), "/?sector=clinical").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Cognitive Peptide Concierge"));
    assert!(!html.contains("Exosome Distribution Network"));
}

#[tokio::test]
async fn test_empty_sector_renders_empty_state() {
    let (status, html) = get(&app(), "/?sector=supply-chain").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No established models in Supply Chain &amp; Distribution yet."));
}

#[tokio::test]
async fn test_unknown_sector_falls_back_to_all() {
    let (status, body) = get(&app(), "/api/opportunities?sector=astrology").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["sector"], "all");
    assert_eq!(json["count"], 12);
}

#[tokio::test]
async fn test_opportunities_api_filters() {
    let (_, body) = get(&app(), "/api/opportunities?sector=clinical").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["sector"], "clinical");
    assert_eq!(json["count"], 3);
    for opp in json["opportunities"].as_array().unwrap() {
        assert_eq!(opp["sector"], "Clinical Services");
    }
}

#[tokio::test]
async fn test_chart_endpoints() {
    let app = app();

    let (_, body) = get(&app, "/api/charts/risk-reward?sector=product").await;
    let points: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(points.len(), 2);
    assert!(points.iter().all(|p| p["color"] == points[0]["color"]));

    let (_, body) = get(&app, "/api/charts/market-projection").await;
    let series: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(series.first().unwrap()["year"], 2023);
    assert_eq!(series.last().unwrap()["year"], 2030);
    assert_eq!(series.last().unwrap()["glp1"], 150.0);
}

// ── Architect API ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_generate_returns_plan() {
    let fake = Arc::new(FakeBackend::with_plan(&sample_plan()));
    let (app, _) = app_with(fake.clone());

    let response = app.clone().oneshot(generate_request(&scenario_json())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let plan: AiGeneratedPlan = serde_json::from_slice(&body).unwrap();
    assert_eq!(plan, sample_plan());
    assert_eq!(fake.call_count(), 1);

    let (_, body) = get(&app, "/api/architect").await;
    let snap: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(snap["phase"], "success");
    assert_eq!(snap["resultTab"], "blueprint");
    assert_eq!(snap["context"]["location"], "Arizona, USA");
    assert_eq!(snap["plan"]["businessName"], "Sonoran Longevity Labs");
}

#[tokio::test]
async fn test_generate_failure_is_bad_gateway_with_notice() {
    let fake = Arc::new(FakeBackend::replying(FakeReply::ApiError {
        status: 429,
        message: "quota exceeded".into(),
    }));
    let (app, controller) = app_with(fake);

    let response = app.oneshot(generate_request(&scenario_json())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], FAILURE_NOTICE);
    assert!(!json.to_string().contains("quota"));
    assert_eq!(controller.plan(), None);
}

#[tokio::test]
async fn test_generate_while_loading_is_conflict() {
    let (fake, gate) = FakeBackend::with_plan(&sample_plan()).gated();
    let fake = Arc::new(fake);
    let (app, _) = app_with(fake.clone());

    let first = tokio::spawn(app.clone().oneshot(generate_request(&scenario_json())));
    fake.wait_for_calls(1).await;

    let second = app.clone().oneshot(generate_request(&scenario_json())).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    gate.release();
    assert_eq!(first.await.unwrap().unwrap().status(), StatusCode::OK);
    assert_eq!(fake.call_count(), 1);
}

#[tokio::test]
async fn test_generate_rejects_unknown_labels() {
    let mut body = scenario_json();
    body["budget"] = Value::from("A billion dollars");

    let response = app().oneshot(generate_request(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Architect page ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_architect_page_shows_defaults() {
    let (status, html) = get(&app(), "/architect").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"value="Marketing &amp; Sales""#));
    assert!(html.contains(r#"<option value="$10k - $50k" selected>"#));
    assert!(html.contains("Configure your profile and hit Generate"));
}

#[tokio::test]
async fn test_form_post_redirects_and_generates() {
    let fake = Arc::new(FakeBackend::with_plan(&sample_plan()));
    let (app, controller) = app_with(fake.clone());

    let form = "budget=%2450k+-+%24200k&skills=Nursing&location=+&targetMarket=GLP-1+Weight+Loss&businessModel=Any+%2F+Best+Fit";
    let response = app.clone().oneshot(form_request(form)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/architect");

    wait_until_settled(&controller).await;
    assert_eq!(fake.call_count(), 1);
    let ctx = controller.context();
    assert_eq!(ctx.skills, "Nursing");
    assert_eq!(ctx.location, "Arizona, USA");
    assert!(fake.calls()[0].prompt.contains("$50k - $200k"));

    let (_, html) = get(&app, "/architect?tab=financials").await;
    assert!(html.contains("Startup Costs"));
    assert!(html.contains("11 months"));
}

#[tokio::test]
async fn test_plan_text_is_escaped() {
    let mut plan = sample_plan();
    plan.business_name = "<script>alert(1)</script>".into();
    let fake = Arc::new(FakeBackend::replying(FakeReply::plan(&plan)));
    let (app, _) = app_with(fake);

    let response = app.clone().oneshot(generate_request(&scenario_json())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (_, html) = get(&app, "/architect").await;
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_failure_notice_rendered() {
    let fake = Arc::new(FakeBackend::replying(FakeReply::Empty));
    let (app, _) = app_with(fake);

    app.clone().oneshot(generate_request(&scenario_json())).await.unwrap();

    let (_, html) = get(&app, "/architect").await;
    assert!(html.contains(FAILURE_NOTICE));
    assert!(!html.contains("Recommended Strategy"));
}

// ── Events ───────────────────────────────────────────────────────────────────

const SCENARIO_FORM: &str = "budget=%2410k+-+%2450k&skills=Marketing+%26+Sales&location=Arizona%2C+USA&targetMarket=Longevity+%26+Anti-aging&businessModel=Any+%2F+Best+Fit";

#[tokio::test]
async fn test_late_subscriber_learns_settled_phase() {
    let (fake, gate) = FakeBackend::with_plan(&sample_plan()).gated();
    let fake = Arc::new(fake);
    let (app, controller) = app_with(fake.clone());

    let response = app.clone().oneshot(form_request(SCENARIO_FORM)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let (_, html) = get(&app, "/architect").await;
    assert!(html.contains(r#"data-phase="loading""#));

    // The result lands before the page's event stream connects.
    gate.release();
    wait_until_settled(&controller).await;

    let mut events = open_events(&app).await;
    let frame = next_frame(&mut events).await;
    assert!(frame.contains("event: phase"), "unexpected frame {frame:?}");
    assert!(frame.contains(r#"{"phase":"success"}"#), "unexpected frame {frame:?}");
}

#[tokio::test]
async fn test_early_subscriber_sees_loading_then_result() {
    let (fake, gate) = FakeBackend::with_plan(&sample_plan()).gated();
    let fake = Arc::new(fake);
    let (app, _) = app_with(fake.clone());

    app.clone().oneshot(form_request(SCENARIO_FORM)).await.unwrap();
    let mut events = open_events(&app).await;
    let frame = next_frame(&mut events).await;
    assert!(frame.contains(r#"{"phase":"loading"}"#), "unexpected frame {frame:?}");

    gate.release();
    let mut seen = Vec::new();
    while !seen.iter().any(|f: &String| f.contains("event: plan_ready")) {
        seen.push(next_frame(&mut events).await);
    }
    assert!(seen.last().unwrap().contains("Sonoran Longevity Labs"));
}
