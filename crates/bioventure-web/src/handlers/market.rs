//! Market opportunities page: stats, charts and the filtered catalog.

use axum::extract::{Query, State};
use axum::response::Html;
use bioventure_catalog::charts::{market_projection, risk_reward_points, sector_color};
use bioventure_catalog::{catalog, sector_counts, SectorFilter};
use bioventure_common::{BarrierToEntry, BusinessOpportunity};
use minijinja::context;
use serde::Serialize;

use crate::error::WebError;
use crate::handlers::SectorQuery;
use crate::state::SharedState;
use crate::view::ViewTab;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCard {
    #[serde(flatten)]
    pub opportunity: &'static BusinessOpportunity,
    pub sector_slug: &'static str,
    pub color: &'static str,
    pub barrier_class: &'static str,
}

impl OpportunityCard {
    fn new(opportunity: &'static BusinessOpportunity) -> Self {
        Self {
            opportunity,
            sector_slug: opportunity.sector.slug(),
            color: sector_color(opportunity.sector),
            barrier_class: barrier_class(opportunity.barrier_to_entry),
        }
    }
}

fn barrier_class(barrier: BarrierToEntry) -> &'static str {
    match barrier {
        BarrierToEntry::Low      => "low",
        BarrierToEntry::Medium   => "medium",
        BarrierToEntry::High     => "high",
        BarrierToEntry::VeryHigh => "very-high",
    }
}

#[derive(Debug, Serialize)]
pub struct FilterChip {
    pub slug: &'static str,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

fn filter_chips(selected: SectorFilter) -> Vec<FilterChip> {
    let counts = sector_counts(catalog());
    SectorFilter::options()
        .map(|f| {
            let count = match f {
                SectorFilter::All => catalog().len(),
                SectorFilter::Only(sector) => counts
                    .iter()
                    .find(|(s, _)| *s == sector)
                    .map_or(0, |(_, n)| *n),
            };
            FilterChip { slug: f.slug(), label: f.label(), count, active: f == selected }
        })
        .collect()
}

pub async fn market_page(
    State(state): State<SharedState>,
    Query(query): Query<SectorQuery>,
) -> Result<Html<String>, WebError> {
    let filter = query.filter();
    let controller = &state.controller;
    controller.set_view(ViewTab::Market);
    controller.select_sector(filter);

    let visible = controller.visible_opportunities();
    let risk_reward_json = serde_json::to_string(&risk_reward_points(visible.iter().copied()))?;
    let projection_json = serde_json::to_string(market_projection())?;
    let opportunities: Vec<OpportunityCard> = visible.into_iter().map(OpportunityCard::new).collect();

    let html = state.templates.render(
        "market.html",
        context! {
            active => "market",
            filters => filter_chips(filter),
            sector_label => filter.label(),
            opportunities => opportunities,
            risk_reward_json => risk_reward_json,
            projection_json => projection_json,
        },
    )?;
    Ok(Html(html))
}
