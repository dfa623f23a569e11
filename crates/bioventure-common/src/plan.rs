//! The structured blueprint returned by one generation request.
//!
//! Field names serialize in camelCase, matching the response schema handed
//! to the generation service.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiGeneratedPlan {
    pub business_name: String,
    pub elevator_pitch: String,
    pub monetization_strategy: String,
    pub moat_strategy: String,
    pub risk_reward_score: RiskRewardScore,
    pub compliance_note: String,
    pub steps_to_launch: Vec<String>,
    pub competitor_analysis: CompetitorAnalysis,
    pub financial_transparency: FinancialTransparency,
}

/// Five independent 1–10 sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRewardScore {
    pub regulatory_risk: f64,
    pub market_risk: f64,
    pub execution_risk: f64,
    pub financial_reward: f64,
    pub strategic_reward: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    pub profiles: Vec<CompetitorProfile>,
    pub suggested_search_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorProfile {
    pub name: String,
    pub description: String,
    pub competitive_edge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTransparency {
    pub startup_costs: Vec<CostLineItem>,
    pub pricing_model: String,
    pub funding_options: Vec<String>,
    pub estimated_margin: String,
    pub break_even_timeline: String,
    pub exit_valuation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostLineItem {
    pub item: String,
    pub estimated_cost: String,
}

// ---------------------------------------------------------------------------
// Derived risk/reward verdict
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskProfile {
    #[serde(rename = "Asymmetric Upside")]
    AsymmetricUpside,
    Balanced,
    #[serde(rename = "High Exposure")]
    HighExposure,
}

impl RiskProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::AsymmetricUpside => "Asymmetric Upside",
            RiskProfile::Balanced         => "Balanced",
            RiskProfile::HighExposure     => "High Exposure",
        }
    }
}

impl RiskRewardScore {
    /// Gap between average reward and average risk that tips the verdict.
    const VERDICT_MARGIN: f64 = 2.0;

    pub fn average_risk(&self) -> f64 {
        (self.regulatory_risk + self.market_risk + self.execution_risk) / 3.0
    }

    pub fn average_reward(&self) -> f64 {
        (self.financial_reward + self.strategic_reward) / 2.0
    }

    pub fn profile(&self) -> RiskProfile {
        let spread = self.average_reward() - self.average_risk();
        if spread >= Self::VERDICT_MARGIN {
            RiskProfile::AsymmetricUpside
        } else if spread <= -Self::VERDICT_MARGIN {
            RiskProfile::HighExposure
        } else {
            RiskProfile::Balanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(risks: [f64; 3], rewards: [f64; 2]) -> RiskRewardScore {
        RiskRewardScore {
            regulatory_risk: risks[0],
            market_risk: risks[1],
            execution_risk: risks[2],
            financial_reward: rewards[0],
            strategic_reward: rewards[1],
        }
    }

    #[test]
    fn test_averages() {
        let s = score([3.0, 6.0, 9.0], [8.0, 6.0]);
        assert!((s.average_risk() - 6.0).abs() < 1e-9);
        assert!((s.average_reward() - 7.0).abs() < 1e-9);
        assert_eq!(s.profile(), RiskProfile::Balanced);
    }

    #[test]
    fn test_profile_extremes() {
        assert_eq!(score([2.0, 2.0, 2.0], [9.0, 8.0]).profile(), RiskProfile::AsymmetricUpside);
        assert_eq!(score([9.0, 8.0, 9.0], [3.0, 4.0]).profile(), RiskProfile::HighExposure);
    }

    #[test]
    fn test_plan_deserializes_camel_case() {
        let json = serde_json::json!({
            "businessName": "Helix Hub",
            "elevatorPitch": "Pitch.",
            "monetizationStrategy": "Subscriptions.",
            "moatStrategy": "Local licensing.",
            "riskRewardScore": {
                "regulatoryRisk": 6, "marketRisk": 4, "executionRisk": 5,
                "financialReward": 8, "strategicReward": 7
            },
            "complianceNote": "Check state pharmacy board rules.",
            "stepsToLaunch": ["Form LLC", "Hire medical director"],
            "competitorAnalysis": {
                "profiles": [{"name": "A", "description": "B", "competitiveEdge": "C"}],
                "suggestedSearchTerms": ["peptide clinic phoenix"]
            },
            "financialTransparency": {
                "startupCosts": [{"item": "Licensing", "estimatedCost": "$4,000"}],
                "pricingModel": "$299/mo",
                "fundingOptions": ["Angel syndicate"],
                "estimatedMargin": "60%",
                "breakEvenTimeline": "14 months",
                "exitValuation": "$8M"
            }
        });
        let plan: AiGeneratedPlan = serde_json::from_value(json).unwrap();
        assert_eq!(plan.business_name, "Helix Hub");
        assert_eq!(plan.steps_to_launch.len(), 2);
        assert_eq!(plan.risk_reward_score.financial_reward, 8.0);
        assert_eq!(plan.financial_transparency.startup_costs[0].estimated_cost, "$4,000");
    }
}
