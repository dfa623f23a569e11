//! Plan Request Builder: turns a `UserContext` into the prompt and the
//! response schema sent to the generation service.

use bioventure_common::UserContext;

use crate::schema::plan_schema;

/// Market research nuggets embedded in every prompt.
pub const RESEARCH_CONTEXT: &str = "\
1. Regenerative Medicine: MSC-derived exosomes for tissue remodeling. New focus on \"Cell-Free\" therapies.
2. Cognitive Enhancement: Rising demand for \"Nootropics 2.0\" featuring intranasal peptides like Semax and Selank.
3. 15-PGDH Inhibition: Emerging \"Holy Grail\" for regenerating cartilage/muscle via PGE2 restoration.
4. Bio-Banking: \"Biological Insurance\" trend where patients bank young stem cells.
5. Bio-Electronic Medicine: Vagus Nerve Stimulation (VNS) and Photobiomodulation (PBM) as \"digital drugs\".
6. Microbiome: The \"Gut-Brain Axis\" market is shifting from generic probiotics to precision bacteriophage.
7. DeSci: Use of IP-NFTs to fund research that traditional Big Pharma ignores.
8. Economics: \"Longevity-as-a-Service\" models show 300% higher retention than traditional wellness programs.
9. Compounding: the 503A/503B divide and \"Research Use Only\" channels define what can legally be sold to whom.";

/// Everything one generation call needs, derived deterministically from a
/// user context.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub prompt: String,
    pub schema: serde_json::Value,
}

impl PlanRequest {
    pub fn from_context(ctx: &UserContext) -> Self {
        Self {
            prompt: build_prompt(ctx),
            schema: plan_schema(),
        }
    }
}

pub fn build_prompt(ctx: &UserContext) -> String {
    format!(
        "You are a world-class Biotech Strategist and Partner at a Tier-1 VC firm.

RESEARCH NUGGETS:
{research}

USER CONTEXT:
- Budget: {budget}
- Skills/Edge: {skills}
- Location: {location}
- Target Market: {market}
- Business Model: {model}

OBJECTIVE:
Generate a transformative business blueprint that exploits current regulatory openings in health and biotech.

RISK/REWARD TASK:
Score regulatory risk, market risk and execution risk, plus financial reward and strategic reward, each on a 1-10 scale.

COMPETITOR ANALYSIS TASK:
Analyze the competitive landscape for this specific idea in {location}.
Provide 3 hypothetical or representative competitor profiles (Direct or Indirect).
Suggest 5 precise search terms for the user to conduct deep local market research.

FINANCIAL TRANSPARENCY TASK:
Itemize startup costs that fit within the {budget} budget, state the pricing model, list realistic funding options,
and estimate gross margin, break-even timeline and exit valuation.

STRATEGIC REQUIREMENTS:
1. PROPOSED MOAT: Identify a \"moat\" based on the user's specific location and skills.
2. REGULATORY ARBITRAGE: Suggest ways to navigate the 503A/503B compounding divide or \"Research Only\" paths safely.
3. NUMBERS: Provide realistic financial benchmarks based on the research context.
4. LAUNCH: Give exactly 5 actionable, high-level strategic steps.",
        research = RESEARCH_CONTEXT,
        budget = ctx.budget.label(),
        skills = ctx.skills,
        location = ctx.location,
        market = ctx.target_market.label(),
        model = ctx.business_model.label(),
    )
}
