//! JSON API mirroring the two pages.

use axum::extract::{Query, State};
use axum::Json;
use bioventure_catalog::charts::{market_projection, risk_reward_points, ProjectionPoint, ScatterPoint};
use bioventure_catalog::{catalog, filter_opportunities, SectorFilter};
use bioventure_common::{AiGeneratedPlan, BusinessOpportunity, UserContext};
use serde::Serialize;

use crate::controller::SubmitOutcome;
use crate::error::WebError;
use crate::handlers::SectorQuery;
use crate::state::SharedState;
use crate::view::ViewSnapshot;

#[derive(Debug, Serialize)]
pub struct OpportunitiesResponse {
    pub sector: SectorFilter,
    pub count: usize,
    pub opportunities: Vec<&'static BusinessOpportunity>,
}

/// GET /api/opportunities?sector=
pub async fn api_opportunities(Query(query): Query<SectorQuery>) -> Json<OpportunitiesResponse> {
    let sector = query.filter();
    let opportunities = filter_opportunities(catalog(), sector);
    Json(OpportunitiesResponse { sector, count: opportunities.len(), opportunities })
}

/// GET /api/charts/risk-reward?sector=
pub async fn api_risk_reward(Query(query): Query<SectorQuery>) -> Json<Vec<ScatterPoint>> {
    Json(risk_reward_points(filter_opportunities(catalog(), query.filter())))
}

/// GET /api/charts/market-projection
pub async fn api_market_projection() -> Json<&'static [ProjectionPoint]> {
    Json(market_projection())
}

/// GET /api/architect
pub async fn api_architect(State(state): State<SharedState>) -> Json<ViewSnapshot> {
    Json(state.controller.snapshot())
}

/// POST /api/architect/generate: replace the context and wait for the plan.
/// The request runs on its own task, so a client disconnect does not leave
/// the controller stuck in `Loading`.
pub async fn api_generate(
    State(state): State<SharedState>,
    Json(context): Json<UserContext>,
) -> Result<Json<AiGeneratedPlan>, WebError> {
    let controller = &state.controller;
    controller.replace_context(context);

    let pending = controller.begin().ok_or(WebError::AlreadyLoading)?;
    let outcome = controller.spawn(pending).await.map_err(|e| {
        tracing::error!(error = %e, "generation task panicked");
        WebError::Cancelled
    })?;

    match outcome {
        SubmitOutcome::Completed(plan)   => Ok(Json(plan)),
        SubmitOutcome::Failed(notice)    => Err(WebError::GenerationFailed(notice)),
        SubmitOutcome::AlreadyLoading    => Err(WebError::AlreadyLoading),
        SubmitOutcome::Discarded         => Err(WebError::Cancelled),
    }
}
