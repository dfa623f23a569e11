//! bioventure-common: Shared domain types used across all BioVenture crates.

pub mod error;
pub mod entities;
pub mod context;
pub mod plan;

// Re-export commonly used types
pub use context::{BudgetBracket, BusinessModel, FieldEdit, TargetMarket, UserContext};
pub use entities::{BarrierToEntry, BusinessOpportunity, RegulatoryRisk, Sector};
pub use error::LabelError;
pub use plan::{
    AiGeneratedPlan, CompetitorAnalysis, CompetitorProfile, CostLineItem,
    FinancialTransparency, RiskProfile, RiskRewardScore,
};
