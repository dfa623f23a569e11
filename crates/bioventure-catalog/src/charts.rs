//! Chart adapters: pure mappings from catalog data into the shapes the
//! front-end chart widgets consume.

use bioventure_common::{BusinessOpportunity, Sector};
use serde::Serialize;

/// One point on the risk-vs-yield scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub id: &'static str,
    pub title: &'static str,
    pub sector: Sector,
    /// x-axis: regulatory & execution risk (0–10)
    pub risk: f64,
    /// y-axis: financial yield potential (0–10)
    pub yield_score: f64,
    pub color: &'static str,
}

/// One year of the projected market-size series, billions USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u16,
    pub glp1: f64,
    pub peptides: f64,
}

pub fn sector_color(sector: Sector) -> &'static str {
    match sector {
        Sector::Clinical      => "#10b981",
        Sector::SupplyChain   => "#3b82f6",
        Sector::Product       => "#f43f5e",
        Sector::TechSaas      => "#8b5cf6",
        Sector::Manufacturing => "#64748b",
        Sector::Regenerative  => "#f59e0b",
    }
}

pub fn risk_reward_points<'a, I>(opportunities: I) -> Vec<ScatterPoint>
where
    I: IntoIterator<Item = &'a BusinessOpportunity>,
{
    opportunities
        .into_iter()
        .map(|opp| ScatterPoint {
            id: opp.id,
            title: opp.title,
            sector: opp.sector,
            risk: opp.risk_score,
            yield_score: opp.yield_score,
            color: sector_color(opp.sector),
        })
        .collect()
}

const MARKET_PROJECTION: [ProjectionPoint; 6] = [
    ProjectionPoint { year: 2023, glp1: 20.0,  peptides: 40.0 },
    ProjectionPoint { year: 2024, glp1: 35.0,  peptides: 48.0 },
    ProjectionPoint { year: 2025, glp1: 55.0,  peptides: 58.0 },
    ProjectionPoint { year: 2026, glp1: 80.0,  peptides: 68.0 },
    ProjectionPoint { year: 2028, glp1: 110.0, peptides: 80.0 },
    ProjectionPoint { year: 2030, glp1: 150.0, peptides: 90.0 },
];

/// Fixed GLP-1 vs general-peptide market projection.
pub fn market_projection() -> &'static [ProjectionPoint] {
    &MARKET_PROJECTION
}
