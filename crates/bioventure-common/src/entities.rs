/// Catalog entity types: sectors, ordinal ratings and the opportunity record.
/// Opportunity records are authored at compile time and borrowed for the
/// lifetime of the process.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

// ---------------------------------------------------------------------------
// Sector
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Clinical Services")]
    Clinical,
    #[serde(rename = "Supply Chain & Distribution")]
    SupplyChain,
    #[serde(rename = "Product & Retail")]
    Product,
    #[serde(rename = "Tech & SaaS")]
    TechSaas,
    #[serde(rename = "Manufacturing & R&D")]
    Manufacturing,
    #[serde(rename = "Regenerative Medicine")]
    Regenerative,
}

impl Sector {
    pub const ALL: [Sector; 6] = [
        Sector::Clinical,
        Sector::SupplyChain,
        Sector::Product,
        Sector::TechSaas,
        Sector::Manufacturing,
        Sector::Regenerative,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Clinical      => "Clinical Services",
            Sector::SupplyChain   => "Supply Chain & Distribution",
            Sector::Product       => "Product & Retail",
            Sector::TechSaas      => "Tech & SaaS",
            Sector::Manufacturing => "Manufacturing & R&D",
            Sector::Regenerative  => "Regenerative Medicine",
        }
    }

    /// URL-safe identifier used in query strings.
    pub fn slug(&self) -> &'static str {
        match self {
            Sector::Clinical      => "clinical",
            Sector::SupplyChain   => "supply-chain",
            Sector::Product       => "product",
            Sector::TechSaas      => "tech-saas",
            Sector::Manufacturing => "manufacturing",
            Sector::Regenerative  => "regenerative",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = LabelError;

    /// Accepts either the slug or the display label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Sector::ALL
            .into_iter()
            .find(|sector| {
                sector.slug().eq_ignore_ascii_case(needle)
                    || sector.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| LabelError::new("sector", s))
    }
}

// ---------------------------------------------------------------------------
// Ordinal ratings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BarrierToEntry {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl BarrierToEntry {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarrierToEntry::Low      => "Low",
            BarrierToEntry::Medium   => "Medium",
            BarrierToEntry::High     => "High",
            BarrierToEntry::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for BarrierToEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegulatoryRisk {
    Low,
    Medium,
    High,
}

impl RegulatoryRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegulatoryRisk::Low    => "Low",
            RegulatoryRisk::Medium => "Medium",
            RegulatoryRisk::High   => "High",
        }
    }
}

impl fmt::Display for RegulatoryRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Business opportunity
// ---------------------------------------------------------------------------

/// One pre-authored business archetype with its risk/reward metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOpportunity {
    pub id: &'static str,
    pub title: &'static str,
    pub sector: Sector,
    pub description: &'static str,
    pub regulatory_hurdles: &'static str,
    pub funding_landscape: &'static str,
    pub revenue_potential: &'static str,
    pub barrier_to_entry: BarrierToEntry,
    pub regulatory_risk: RegulatoryRisk,
    /// Financial yield potential, 0–10 (scatter y-axis).
    pub yield_score: f64,
    /// Regulatory and execution risk, 0–10 (scatter x-axis).
    pub risk_score: f64,
    pub tags: &'static [&'static str],
}
