//! Canned domain values.

use bioventure_common::{
    AiGeneratedPlan, BudgetBracket, BusinessModel, CompetitorAnalysis, CompetitorProfile,
    CostLineItem, FinancialTransparency, RiskRewardScore, TargetMarket, UserContext,
};

/// Arizona longevity scenario used across the controller tests.
pub fn scenario_context() -> UserContext {
    UserContext {
        budget: BudgetBracket::SmallStart,
        skills: "Marketing & Sales".to_string(),
        location: "Arizona, USA".to_string(),
        target_market: TargetMarket::Longevity,
        business_model: BusinessModel::BestFit,
    }
}

pub fn sample_plan() -> AiGeneratedPlan {
    AiGeneratedPlan {
        business_name: "Sonoran Longevity Labs".to_string(),
        elevator_pitch: "Membership longevity diagnostics for Phoenix professionals. \
                         We turn biomarker data into clinician-guided protocols."
            .to_string(),
        monetization_strategy: "$249/mo membership with quarterly panels; 62% gross margin, \
                                projected 28-month LTV of $6,900."
            .to_string(),
        moat_strategy: "Marketing-led community plus exclusive partnerships with two Scottsdale medspas."
            .to_string(),
        risk_reward_score: RiskRewardScore {
            regulatory_risk: 5.0,
            market_risk: 4.0,
            execution_risk: 6.0,
            financial_reward: 8.0,
            strategic_reward: 7.0,
        },
        compliance_note: "Operate under a CLIA-waived partner lab; review Arizona telehealth statute A.R.S. 36-3602."
            .to_string(),
        steps_to_launch: vec![
            "Form an Arizona LLC and retain a healthcare attorney".to_string(),
            "Sign a medical director and partner lab".to_string(),
            "Launch a founding-member waitlist".to_string(),
            "Run a 90-day pilot cohort".to_string(),
            "Open the first diagnostics suite".to_string(),
        ],
        competitor_analysis: CompetitorAnalysis {
            profiles: vec![
                CompetitorProfile {
                    name: "Desert Vitality Clinic".to_string(),
                    description: "Hormone and peptide clinic in Scottsdale.".to_string(),
                    competitive_edge: "We lead with diagnostics, not prescriptions.".to_string(),
                },
                CompetitorProfile {
                    name: "National DTC biomarker app".to_string(),
                    description: "Mail-in blood panels with an app dashboard.".to_string(),
                    competitive_edge: "In-person coaching and local referrals.".to_string(),
                },
            ],
            suggested_search_terms: vec![
                "longevity clinic phoenix".to_string(),
                "biological age test scottsdale".to_string(),
            ],
        },
        financial_transparency: FinancialTransparency {
            startup_costs: vec![
                CostLineItem { item: "Legal & licensing".to_string(), estimated_cost: "$6,000".to_string() },
                CostLineItem { item: "Lab partnership setup".to_string(), estimated_cost: "$12,000".to_string() },
            ],
            pricing_model: "$249/mo membership, $1,200 annual prepay".to_string(),
            funding_options: vec!["Friends & family".to_string(), "Wellness angel syndicate".to_string()],
            estimated_margin: "62%".to_string(),
            break_even_timeline: "11 months".to_string(),
            exit_valuation: "$10M - $15M".to_string(),
        },
    }
}

pub fn sample_plan_json() -> String {
    serde_json::to_string(&sample_plan()).expect("fixture plan serializes")
}
