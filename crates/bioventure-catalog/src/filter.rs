//! Sector filtering over the catalog.

use std::fmt;
use std::str::FromStr;

use bioventure_common::{BusinessOpportunity, LabelError, Sector};
use serde::{Serialize, Serializer};

/// Category selector: the closed sector set plus an "All" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectorFilter {
    #[default]
    All,
    Only(Sector),
}

impl SectorFilter {
    /// Every selectable value, "All" first.
    pub fn options() -> impl Iterator<Item = SectorFilter> {
        std::iter::once(SectorFilter::All).chain(Sector::ALL.into_iter().map(SectorFilter::Only))
    }

    pub fn matches(&self, opp: &BusinessOpportunity) -> bool {
        match self {
            SectorFilter::All     => true,
            SectorFilter::Only(s) => opp.sector == *s,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            SectorFilter::All     => "all",
            SectorFilter::Only(s) => s.slug(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectorFilter::All     => "All",
            SectorFilter::Only(s) => s.label(),
        }
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SectorFilter {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SectorFilter::All);
        }
        s.parse::<Sector>()
            .map(SectorFilter::Only)
            .map_err(|_| LabelError::new("sector filter", s))
    }
}

impl Serialize for SectorFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

/// Records whose sector equals the selector, or the whole catalog for `All`.
/// Catalog order is preserved.
pub fn filter_opportunities(
    catalog: &'static [BusinessOpportunity],
    filter: SectorFilter,
) -> Vec<&'static BusinessOpportunity> {
    catalog.iter().filter(|opp| filter.matches(opp)).collect()
}

/// Number of records per sector, in `Sector::ALL` order. Sectors with no
/// records are reported with a zero count.
pub fn sector_counts(catalog: &[BusinessOpportunity]) -> Vec<(Sector, usize)> {
    Sector::ALL
        .into_iter()
        .map(|sector| (sector, catalog.iter().filter(|o| o.sector == sector).count()))
        .collect()
}

/// The visible subset of the catalog for the current selector.
/// Recomputed only when the selector actually changes.
#[derive(Debug, Clone)]
pub struct MarketView {
    catalog: &'static [BusinessOpportunity],
    filter: SectorFilter,
    visible: Vec<&'static BusinessOpportunity>,
}

impl MarketView {
    pub fn new(catalog: &'static [BusinessOpportunity]) -> Self {
        Self {
            catalog,
            filter: SectorFilter::All,
            visible: filter_opportunities(catalog, SectorFilter::All),
        }
    }

    pub fn filter(&self) -> SectorFilter {
        self.filter
    }

    pub fn visible(&self) -> &[&'static BusinessOpportunity] {
        &self.visible
    }

    /// Change the selector. Returns `true` if the visible set was recomputed.
    pub fn select(&mut self, filter: SectorFilter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.visible = filter_opportunities(self.catalog, filter);
        tracing::debug!(filter = filter.slug(), visible = self.visible.len(), "market filter changed");
        true
    }
}
