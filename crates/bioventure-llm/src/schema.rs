//! Response schema for `AiGeneratedPlan`, in the OpenAPI subset Gemini
//! accepts as `responseSchema`.
//!
//! Objects are declared as ordered property lists; `required` and
//! `propertyOrdering` are both derived from that list, so every declared
//! property is required and ordered.

use serde_json::{json, Map, Value};

fn string(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn score(description: &str) -> Value {
    json!({
        "type": "NUMBER",
        "description": description,
        "minimum": 1,
        "maximum": 10,
    })
}

fn list(items: Value, description: &str) -> Value {
    json!({ "type": "ARRAY", "items": items, "description": description })
}

fn object(properties: &[(&str, Value)]) -> Value {
    let names: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let props: Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": props,
        "required": names,
        "propertyOrdering": names,
    })
}

/// The complete blueprint schema.
pub fn plan_schema() -> Value {
    let risk_reward = object(&[
        ("regulatoryRisk",  score("Regulatory risk, 1-10 scale")),
        ("marketRisk",      score("Market risk, 1-10 scale")),
        ("executionRisk",   score("Execution risk, 1-10 scale")),
        ("financialReward", score("Financial reward, 1-10 scale")),
        ("strategicReward", score("Strategic reward, 1-10 scale")),
    ]);

    let competitor_profile = object(&[
        ("name",            string("Competitor or representative archetype name.")),
        ("description",     string("What they offer and to whom.")),
        ("competitiveEdge", string("How the proposed business beats them.")),
    ]);

    let competitor_analysis = object(&[
        ("profiles",             list(competitor_profile, "3 direct or indirect competitor profiles.")),
        ("suggestedSearchTerms", list(string("Search query."), "5 precise local market research search terms.")),
    ]);

    let cost_item = object(&[
        ("item",          string("Cost category, e.g. licensing, inventory, legal.")),
        ("estimatedCost", string("Estimated amount in USD.")),
    ]);

    let financial_transparency = object(&[
        ("startupCosts",      list(cost_item, "Itemized startup cost breakdown.")),
        ("pricingModel",      string("How customers are charged and at what price points.")),
        ("fundingOptions",    list(string("Funding source."), "Realistic funding options for this budget.")),
        ("estimatedMargin",   string("Expected gross margin.")),
        ("breakEvenTimeline", string("Expected time to break even.")),
        ("exitValuation",     string("Plausible exit or valuation estimate.")),
    ]);

    object(&[
        ("businessName",          string("A catchy, modern name for the business.")),
        ("elevatorPitch",         string("A 2-sentence value proposition.")),
        ("monetizationStrategy",  string("Detailed revenue model including margins and projected LTV.")),
        ("moatStrategy",          string("The unique competitive advantage (e.g., specific skills integration, local regulatory arbitrage).")),
        ("riskRewardScore",       risk_reward),
        ("complianceNote",        string("Detailed regulatory guidance (e.g., specific legal statutes to research in the target location).")),
        ("stepsToLaunch",         list(string("Launch step."), "5 actionable, high-level strategic steps.")),
        ("competitorAnalysis",    competitor_analysis),
        ("financialTransparency", financial_transparency),
    ])
}
