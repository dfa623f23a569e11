//! HTTP handlers for all web routes.

pub mod api;
pub mod architect;
pub mod market;

use bioventure_catalog::SectorFilter;
use serde::Deserialize;

/// `?sector=` query shared by the market page and the catalog API.
#[derive(Debug, Default, Deserialize)]
pub struct SectorQuery {
    pub sector: Option<String>,
}

impl SectorQuery {
    /// Unknown or blank values fall back to `All`.
    pub fn filter(&self) -> SectorFilter {
        match self.sector.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => SectorFilter::All,
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "unknown sector filter, showing all");
                SectorFilter::All
            }),
        }
    }
}
