//! Generation lifecycle tests against a scripted backend.

use std::sync::Arc;
use std::time::Duration;

use bioventure_catalog::SectorFilter;
use bioventure_common::{FieldEdit, Sector};
use bioventure_llm::{GenerationBackend, GenerationOptions, PlanGenerator};
use bioventure_test_utils::{sample_plan, scenario_context, FakeBackend, FakeReply};
use bioventure_web::controller::{Controller, SubmitOutcome, FAILURE_NOTICE};
use bioventure_web::state::AppEvent;
use bioventure_web::ticker::LOADING_MESSAGES;
use bioventure_web::view::{GenerationPhase, ResultTab};
use pretty_assertions::assert_eq;
use tokio::sync::broadcast::{self, error::TryRecvError};

const INTERVAL: Duration = Duration::from_millis(250);

fn controller_with(fake: Arc<FakeBackend>) -> (Arc<Controller>, broadcast::Receiver<AppEvent>) {
    let backend: Arc<dyn GenerationBackend> = fake;
    let generator = PlanGenerator::new(backend, GenerationOptions::default());
    let (tx, rx) = broadcast::channel(64);
    (Arc::new(Controller::new(generator, tx, INTERVAL)), rx)
}

fn drain(rx: &mut broadcast::Receiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(e) = rx.try_recv() {
        events.push(e);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn test_arizona_longevity_scenario() {
    let fake = Arc::new(FakeBackend::with_plan(&sample_plan()));
    let (controller, _rx) = controller_with(fake.clone());
    controller.replace_context(scenario_context());

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Completed(sample_plan()));
    assert_eq!(fake.call_count(), 1);
    let prompt = &fake.calls()[0].prompt;
    for value in ["$10k - $50k", "Arizona, USA", "Marketing & Sales", "Longevity & Anti-aging", "Any / Best Fit"] {
        assert!(prompt.contains(value), "prompt is missing {value:?}");
    }

    let snap = controller.snapshot();
    assert_eq!(snap.phase, GenerationPhase::Success);
    assert_eq!(snap.plan, Some(sample_plan()));
    assert_eq!(snap.notice, None);
    assert!(snap.submit_enabled);
}

#[tokio::test(start_paused = true)]
async fn test_submit_while_loading_sends_nothing() {
    let (fake, gate) = FakeBackend::with_plan(&sample_plan()).gated();
    let fake = Arc::new(fake);
    let (controller, _rx) = controller_with(fake.clone());

    let c = controller.clone();
    let first = tokio::spawn(async move { c.submit().await });
    fake.wait_for_calls(1).await;

    assert_eq!(controller.phase(), GenerationPhase::Loading);
    assert!(!controller.snapshot().submit_enabled);
    assert_eq!(controller.submit().await, SubmitOutcome::AlreadyLoading);
    assert!(controller.begin().is_none());

    gate.release();
    assert!(matches!(first.await.unwrap(), SubmitOutcome::Completed(_)));
    assert_eq!(fake.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_success_stops_ticker_and_resets_tab() {
    let (fake, gate) = FakeBackend::with_plan(&sample_plan()).gated();
    let fake = Arc::new(fake);
    let (controller, mut rx) = controller_with(fake.clone());
    controller.set_result_tab(ResultTab::Financials);

    let c = controller.clone();
    let pending = tokio::spawn(async move { c.submit().await });
    fake.wait_for_calls(1).await;
    assert_eq!(controller.snapshot().loading_message, Some(LOADING_MESSAGES[0]));

    tokio::time::sleep(INTERVAL + Duration::from_millis(1)).await;
    assert_eq!(controller.snapshot().loading_message, Some(LOADING_MESSAGES[1]));

    gate.release();
    pending.await.unwrap();

    let snap = controller.snapshot();
    assert_eq!(snap.result_tab, ResultTab::Blueprint);
    assert_eq!(snap.loading_message, None);

    drain(&mut rx);
    tokio::time::sleep(INTERVAL * 10).await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test(start_paused = true)]
async fn test_events_follow_lifecycle() {
    let fake = Arc::new(FakeBackend::with_plan(&sample_plan()));
    let (controller, mut rx) = controller_with(fake);

    controller.submit().await;

    assert_eq!(
        drain(&mut rx),
        vec![
            AppEvent::GenerationStarted { request_id: 1 },
            AppEvent::LoadingMessage {
                request_id: 1,
                step: 0,
                message: LOADING_MESSAGES[0].to_string(),
            },
            AppEvent::PlanReady {
                request_id: 1,
                business_name: "Sonoran Longevity Labs".to_string(),
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_failure_clears_prior_plan() {
    let fake = Arc::new(
        FakeBackend::replying(FakeReply::ApiError { status: 503, message: "overloaded".into() })
            .then(FakeReply::plan(&sample_plan())),
    );
    let (controller, mut rx) = controller_with(fake.clone());

    assert!(matches!(controller.submit().await, SubmitOutcome::Completed(_)));
    assert!(controller.plan().is_some());
    drain(&mut rx);

    let outcome = controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed(FAILURE_NOTICE.to_string()));
    let snap = controller.snapshot();
    assert_eq!(snap.phase, GenerationPhase::Error);
    assert_eq!(snap.plan, None);
    assert_eq!(snap.notice.as_deref(), Some(FAILURE_NOTICE));
    assert!(snap.submit_enabled);
    assert!(drain(&mut rx).contains(&AppEvent::GenerationFailed {
        request_id: 2,
        notice: FAILURE_NOTICE.to_string(),
    }));
    assert_eq!(fake.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_failure_stops_ticker() {
    let (fake, gate) = FakeBackend::replying(FakeReply::ApiError {
        status: 429,
        message: "quota exceeded".into(),
    })
    .gated();
    let fake = Arc::new(fake);
    let (controller, mut rx) = controller_with(fake.clone());

    let c = controller.clone();
    let pending = tokio::spawn(async move { c.submit().await });
    fake.wait_for_calls(1).await;
    tokio::time::sleep(INTERVAL + Duration::from_millis(1)).await;
    assert_eq!(controller.snapshot().loading_message, Some(LOADING_MESSAGES[1]));

    gate.release();
    assert_eq!(pending.await.unwrap(), SubmitOutcome::Failed(FAILURE_NOTICE.to_string()));

    let events = drain(&mut rx);
    assert_eq!(
        events.last(),
        Some(&AppEvent::GenerationFailed { request_id: 1, notice: FAILURE_NOTICE.to_string() })
    );
    tokio::time::sleep(INTERVAL * 10).await;
    assert_eq!(controller.snapshot().loading_message, None);
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test(start_paused = true)]
async fn test_new_request_hides_previous_plan_while_loading() {
    let (fake, gate) = FakeBackend::with_plan(&sample_plan()).gated();
    let fake = Arc::new(fake);
    let (controller, _rx) = controller_with(fake.clone());

    gate.release();
    controller.submit().await;
    assert!(controller.plan().is_some());

    let c = controller.clone();
    let second = tokio::spawn(async move { c.submit().await });
    fake.wait_for_calls(2).await;
    assert_eq!(controller.plan(), None);

    gate.release();
    second.await.unwrap();
    assert_eq!(controller.plan(), Some(sample_plan()));
}

#[tokio::test(start_paused = true)]
async fn test_malformed_and_empty_replies_fail_with_generic_notice() {
    let fake = Arc::new(FakeBackend::replying(FakeReply::Empty).then(FakeReply::Text("{\"businessName\":".into())));
    let (controller, _rx) = controller_with(fake);

    for _ in 0..2 {
        assert_eq!(controller.submit().await, SubmitOutcome::Failed(FAILURE_NOTICE.to_string()));
        assert_eq!(controller.plan(), None);
    }
}

#[tokio::test(start_paused = true)]
async fn test_teardown_ignores_late_result() {
    let (fake, gate) = FakeBackend::with_plan(&sample_plan()).gated();
    let fake = Arc::new(fake);
    let (controller, mut rx) = controller_with(fake.clone());

    let c = controller.clone();
    let pending = tokio::spawn(async move { c.submit().await });
    fake.wait_for_calls(1).await;

    controller.teardown();
    assert_eq!(controller.phase(), GenerationPhase::Idle);
    drain(&mut rx);

    gate.release();
    assert_eq!(pending.await.unwrap(), SubmitOutcome::Discarded);

    let snap = controller.snapshot();
    assert_eq!(snap.phase, GenerationPhase::Idle);
    assert_eq!(snap.plan, None);
    assert_eq!(snap.loading_message, None);

    tokio::time::sleep(INTERVAL * 10).await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn test_blank_edits_fall_back_to_defaults() {
    let (controller, _rx) = controller_with(Arc::new(FakeBackend::with_plan(&sample_plan())));

    controller.edit(FieldEdit::Skills("Clinical pharmacology".into()));
    controller.edit(FieldEdit::Location("   ".into()));

    let ctx = controller.context();
    assert_eq!(ctx.skills, "Clinical pharmacology");
    assert_eq!(ctx.location, "Arizona, USA");
}

#[tokio::test]
async fn test_sector_selection_recomputes_only_on_change() {
    let (controller, _rx) = controller_with(Arc::new(FakeBackend::with_plan(&sample_plan())));

    assert_eq!(controller.visible_opportunities().len(), 12);
    assert!(controller.select_sector(SectorFilter::Only(Sector::Clinical)));
    assert!(!controller.select_sector(SectorFilter::Only(Sector::Clinical)));
    assert!(controller
        .visible_opportunities()
        .iter()
        .all(|o| o.sector == Sector::Clinical));

    assert!(controller.select_sector(SectorFilter::Only(Sector::SupplyChain)));
    assert!(controller.visible_opportunities().is_empty());
}
