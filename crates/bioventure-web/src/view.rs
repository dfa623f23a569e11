//! View-level enums and the serialisable snapshot rendered by pages and API.

use std::fmt;
use std::str::FromStr;

use bioventure_catalog::SectorFilter;
use bioventure_common::{AiGeneratedPlan, LabelError, UserContext};
use serde::Serialize;

/// Top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewTab {
    #[default]
    Market,
    Architect,
}

/// Section of the blueprint result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultTab {
    #[default]
    Blueprint,
    RiskReward,
    Competitors,
    Financials,
}

impl ResultTab {
    pub const ALL: [ResultTab; 4] = [
        ResultTab::Blueprint,
        ResultTab::RiskReward,
        ResultTab::Competitors,
        ResultTab::Financials,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ResultTab::Blueprint   => "blueprint",
            ResultTab::RiskReward  => "risk-reward",
            ResultTab::Competitors => "competitors",
            ResultTab::Financials  => "financials",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Blueprint   => "Blueprint",
            ResultTab::RiskReward  => "Risk & Reward",
            ResultTab::Competitors => "Competitors",
            ResultTab::Financials  => "Financials",
        }
    }
}

impl fmt::Display for ResultTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResultTab {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ResultTab::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s) || t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| LabelError::new("result tab", s))
    }
}

/// Lifecycle of the single in-flight generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Idle    => "idle",
            GenerationPhase::Loading => "loading",
            GenerationPhase::Success => "success",
            GenerationPhase::Error   => "error",
        }
    }
}

/// Everything a page or API client needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub view: ViewTab,
    pub sector: SectorFilter,
    pub context: UserContext,
    pub phase: GenerationPhase,
    pub loading_message: Option<&'static str>,
    pub plan: Option<AiGeneratedPlan>,
    pub notice: Option<String>,
    pub result_tab: ResultTab,
    pub submit_enabled: bool,
}
