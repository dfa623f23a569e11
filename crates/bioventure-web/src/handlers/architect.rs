//! AI Architect page: context form and blueprint result panel.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use bioventure_common::{
    AiGeneratedPlan, BudgetBracket, BusinessModel, RiskRewardScore, TargetMarket, UserContext,
};
use minijinja::context;
use serde::{Deserialize, Serialize};

use crate::error::WebError;
use crate::state::SharedState;
use crate::templates::Templates;
use crate::view::{ResultTab, ViewSnapshot, ViewTab};

#[derive(Debug, Default, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

#[derive(Debug, Serialize)]
struct SelectOption {
    value: &'static str,
    caption: &'static str,
    selected: bool,
}

#[derive(Debug, Serialize)]
struct TabLink {
    slug: &'static str,
    label: &'static str,
    active: bool,
}

#[derive(Debug, Serialize)]
struct ScoreBar {
    label: &'static str,
    value: f64,
    percent: u32,
    kind: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RiskSummary {
    profile: &'static str,
    average_risk: String,
    average_reward: String,
    scores: Vec<ScoreBar>,
}

impl RiskSummary {
    fn new(score: &RiskRewardScore) -> Self {
        let bar = |label, value: f64, kind| ScoreBar {
            label,
            value,
            percent: (value.clamp(0.0, 10.0) * 10.0).round() as u32,
            kind,
        };
        Self {
            profile: score.profile().as_str(),
            average_risk: format!("{:.1}", score.average_risk()),
            average_reward: format!("{:.1}", score.average_reward()),
            scores: vec![
                bar("Regulatory Risk", score.regulatory_risk, "risk"),
                bar("Market Risk", score.market_risk, "risk"),
                bar("Execution Risk", score.execution_risk, "risk"),
                bar("Financial Reward", score.financial_reward, "reward"),
                bar("Strategic Reward", score.strategic_reward, "reward"),
            ],
        }
    }
}

pub async fn architect_page(
    State(state): State<SharedState>,
    Query(query): Query<TabQuery>,
) -> Result<Html<String>, WebError> {
    let controller = &state.controller;
    controller.set_view(ViewTab::Architect);

    if let Some(raw) = query.tab.as_deref() {
        match raw.parse::<ResultTab>() {
            Ok(tab) => controller.set_result_tab(tab),
            Err(e) => tracing::debug!(error = %e, "unknown result tab ignored"),
        }
    }

    let html = render_architect(&state.templates, &controller.snapshot())?;
    Ok(Html(html))
}

/// Form post: replace the context, start a request in the background and
/// send the browser back to the page, which shows the loading state.
pub async fn architect_generate(
    State(state): State<SharedState>,
    Form(context): Form<UserContext>,
) -> Redirect {
    let controller = &state.controller;
    controller.replace_context(context);

    match controller.begin() {
        Some(pending) => {
            controller.spawn(pending);
        }
        None => tracing::debug!("generate ignored, request already in flight"),
    }
    Redirect::to("/architect")
}

pub fn render_architect(templates: &Templates, snap: &ViewSnapshot) -> Result<String, WebError> {
    let ctx = &snap.context;
    let budgets: Vec<SelectOption> = BudgetBracket::ALL
        .into_iter()
        .map(|b| SelectOption { value: b.label(), caption: b.caption(), selected: b == ctx.budget })
        .collect();
    let markets: Vec<SelectOption> = TargetMarket::ALL
        .into_iter()
        .map(|m| SelectOption { value: m.label(), caption: m.label(), selected: m == ctx.target_market })
        .collect();
    let models: Vec<SelectOption> = BusinessModel::ALL
        .into_iter()
        .map(|m| SelectOption { value: m.label(), caption: m.label(), selected: m == ctx.business_model })
        .collect();
    let tabs: Vec<TabLink> = ResultTab::ALL
        .into_iter()
        .map(|t| TabLink { slug: t.slug(), label: t.label(), active: t == snap.result_tab })
        .collect();
    let risk = snap.plan.as_ref().map(|p: &AiGeneratedPlan| RiskSummary::new(&p.risk_reward_score));

    templates.render(
        "architect.html",
        context! {
            active => "architect",
            phase => snap.phase.as_str(),
            context => ctx,
            budgets => budgets,
            markets => markets,
            models => models,
            submit_enabled => snap.submit_enabled,
            loading_message => snap.loading_message,
            notice => &snap.notice,
            plan => &snap.plan,
            risk => risk,
            tabs => tabs,
            result_tab => snap.result_tab.slug(),
        },
    )
}
