//! View/State controller: owns the page state and the generation lifecycle.
//!
//! State lives behind a `std::sync::Mutex` that is never held across an
//! `.await`. At most one request is in flight: the phase check and the
//! transition to `Loading` happen under the same lock. Each request gets a
//! sequence number; a result that settles after `teardown()` or after a newer
//! request started no longer matches and is ignored.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use bioventure_catalog::{catalog, MarketView, SectorFilter};
use bioventure_common::{AiGeneratedPlan, BusinessOpportunity, FieldEdit, UserContext};
use bioventure_llm::PlanGenerator;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::state::AppEvent;
use crate::ticker::LoadingTicker;
use crate::view::{GenerationPhase, ResultTab, ViewSnapshot, ViewTab};

/// The only failure text users see; details go to the log.
pub const FAILURE_NOTICE: &str = "Failed to generate plan. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request is already in flight; nothing was sent.
    AlreadyLoading,
    Completed(AiGeneratedPlan),
    Failed(String),
    /// The controller was torn down or moved on before the result arrived.
    Discarded,
}

/// A request that has entered `Loading` and still has to be sent.
#[derive(Debug)]
pub struct PendingGeneration {
    request_id: u64,
    context: UserContext,
}

impl PendingGeneration {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }
}

struct Inner {
    view: ViewTab,
    market: MarketView,
    context: UserContext,
    phase: GenerationPhase,
    plan: Option<AiGeneratedPlan>,
    notice: Option<String>,
    result_tab: ResultTab,
    ticker: Option<LoadingTicker>,
    request_seq: u64,
}

impl Inner {
    fn is_current(&self, request_id: u64) -> bool {
        self.request_seq == request_id && self.phase == GenerationPhase::Loading
    }
}

pub struct Controller {
    inner: Mutex<Inner>,
    generator: PlanGenerator,
    events: broadcast::Sender<AppEvent>,
    loading_interval: Duration,
}

impl Controller {
    pub fn new(
        generator: PlanGenerator,
        events: broadcast::Sender<AppEvent>,
        loading_interval: Duration,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                view: ViewTab::default(),
                market: MarketView::new(catalog()),
                context: UserContext::default(),
                phase: GenerationPhase::Idle,
                plan: None,
                notice: None,
                result_tab: ResultTab::default(),
                ticker: None,
                request_seq: 0,
            }),
            generator,
            events,
            loading_interval,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: AppEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    // ── View & market ────────────────────────────────────────────────────────

    pub fn set_view(&self, view: ViewTab) {
        self.lock().view = view;
    }

    /// Returns true when the visible subset was recomputed.
    pub fn select_sector(&self, filter: SectorFilter) -> bool {
        self.lock().market.select(filter)
    }

    pub fn visible_opportunities(&self) -> Vec<&'static BusinessOpportunity> {
        self.lock().market.visible().to_vec()
    }

    pub fn set_result_tab(&self, tab: ResultTab) {
        self.lock().result_tab = tab;
    }

    // ── Context ──────────────────────────────────────────────────────────────

    pub fn edit(&self, edit: FieldEdit) {
        self.lock().context.apply(edit);
    }

    pub fn replace_context(&self, context: UserContext) {
        self.lock().context = context.normalized();
    }

    pub fn context(&self) -> UserContext {
        self.lock().context.clone()
    }

    pub fn phase(&self) -> GenerationPhase {
        self.lock().phase
    }

    pub fn plan(&self) -> Option<AiGeneratedPlan> {
        self.lock().plan.clone()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let inner = self.lock();
        ViewSnapshot {
            view: inner.view,
            sector: inner.market.filter(),
            context: inner.context.clone(),
            phase: inner.phase,
            loading_message: inner.ticker.as_ref().map(LoadingTicker::message),
            plan: inner.plan.clone(),
            notice: inner.notice.clone(),
            result_tab: inner.result_tab,
            submit_enabled: inner.phase != GenerationPhase::Loading,
        }
    }

    // ── Generation lifecycle ─────────────────────────────────────────────────

    /// Send one request for the current context and wait for it to settle.
    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin() {
            Some(pending) => self.run(pending).await,
            None => SubmitOutcome::AlreadyLoading,
        }
    }

    /// Enter `Loading`: clear the previous plan and notice, start the ticker.
    /// Returns `None` while a request is already in flight.
    pub fn begin(&self) -> Option<PendingGeneration> {
        let mut inner = self.lock();
        if inner.phase == GenerationPhase::Loading {
            debug!(request_id = inner.request_seq, "submit ignored, request in flight");
            return None;
        }

        inner.request_seq += 1;
        let request_id = inner.request_seq;
        inner.phase = GenerationPhase::Loading;
        inner.plan = None;
        inner.notice = None;
        self.publish(AppEvent::GenerationStarted { request_id });
        inner.ticker = Some(LoadingTicker::start(
            self.loading_interval,
            request_id,
            self.events.clone(),
        ));

        info!(
            request_id,
            budget = %inner.context.budget,
            target_market = %inner.context.target_market,
            "blueprint generation started"
        );
        Some(PendingGeneration { request_id, context: inner.context.clone() })
    }

    /// Await the request started by `begin` and apply its result.
    pub async fn run(&self, pending: PendingGeneration) -> SubmitOutcome {
        let PendingGeneration { request_id, context } = pending;
        let result = self.generator.generate(&context).await;

        let ticker = {
            let mut inner = self.lock();
            if !inner.is_current(request_id) {
                debug!(request_id, "generation settled after teardown, result ignored");
                return SubmitOutcome::Discarded;
            }
            inner.ticker.take()
        };
        // Settle only once no loading step can follow the result event.
        if let Some(ticker) = ticker {
            ticker.stop().await;
        }

        let mut inner = self.lock();
        if !inner.is_current(request_id) {
            debug!(request_id, "generation settled after teardown, result ignored");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(plan) => {
                info!(request_id, business_name = %plan.business_name, "blueprint ready");
                inner.phase = GenerationPhase::Success;
                inner.result_tab = ResultTab::default();
                inner.plan = Some(plan.clone());
                self.publish(AppEvent::PlanReady {
                    request_id,
                    business_name: plan.business_name.clone(),
                });
                SubmitOutcome::Completed(plan)
            }
            Err(e) => {
                warn!(request_id, kind = e.kind(), error = %e, "blueprint generation failed");
                inner.phase = GenerationPhase::Error;
                inner.notice = Some(FAILURE_NOTICE.to_string());
                self.publish(AppEvent::GenerationFailed {
                    request_id,
                    notice: FAILURE_NOTICE.to_string(),
                });
                SubmitOutcome::Failed(FAILURE_NOTICE.to_string())
            }
        }
    }

    /// Run a started request on its own task, so it settles even if the
    /// caller that started it goes away.
    pub fn spawn(self: &Arc<Self>, pending: PendingGeneration) -> JoinHandle<SubmitOutcome> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.run(pending).await })
    }

    /// Stop the ticker, drop the plan and return to `Idle`. Any request still
    /// in flight completes on the network but its result is ignored.
    pub fn teardown(&self) {
        let mut inner = self.lock();
        inner.ticker = None;
        inner.plan = None;
        inner.notice = None;
        inner.phase = GenerationPhase::Idle;
        inner.request_seq += 1;
        debug!("controller torn down");
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.teardown();
    }
}
