//! Seed table of established business models.

use bioventure_common::{BarrierToEntry, BusinessOpportunity, RegulatoryRisk, Sector};

/// The full catalog, in display order.
pub fn catalog() -> &'static [BusinessOpportunity] {
    &OPPORTUNITIES
}

static OPPORTUNITIES: [BusinessOpportunity; 12] = [
    BusinessOpportunity {
        id: "glp1-1",
        title: "Precision GLP-1 Optimization",
        sector: Sector::Clinical,
        description: "Combining metabolic peptides with continuous glucose monitoring (CGM) and AI coaching for long-term weight maintenance.",
        regulatory_hurdles: "Requires 503A sourcing compliance and medical oversight licenses.",
        funding_landscape: "High PE/VC interest; massive M&A potential from big-box retailers.",
        revenue_potential: "$450/mo per patient",
        barrier_to_entry: BarrierToEntry::Medium,
        regulatory_risk: RegulatoryRisk::Medium,
        yield_score: 7.5,
        risk_score: 5.0,
        tags: &["Metabolic", "Telehealth", "AI"],
    },
    BusinessOpportunity {
        id: "reg-1",
        title: "Exosome Distribution Network",
        sector: Sector::Regenerative,
        description: "Cold-chain logistics for MSC-derived exosomes used in topical aesthetics and localized joint repair applications.",
        regulatory_hurdles: "Strict biologic storage requirements and FDA IND pathways for non-topical use.",
        funding_landscape: "High-growth niche; popular with family offices focused on biotech logistics.",
        revenue_potential: "$5M - $15M Annual",
        barrier_to_entry: BarrierToEntry::High,
        regulatory_risk: RegulatoryRisk::High,
        yield_score: 8.8,
        risk_score: 8.5,
        tags: &["Biologics", "Logistics", "Supply Chain"],
    },
    BusinessOpportunity {
        id: "noot-1",
        title: "Cognitive Peptide Concierge",
        sector: Sector::Clinical,
        description: "Telehealth platform for executive performance, prescribing intranasal Semax, Selank, and Cerebrolysin protocols.",
        regulatory_hurdles: "Navigating off-label compounding regulations; strictly clinician-guided.",
        funding_landscape: "High-net-worth target demographic; strong subscription potential.",
        revenue_potential: "$300-$500/mo subscription",
        barrier_to_entry: BarrierToEntry::Medium,
        regulatory_risk: RegulatoryRisk::Medium,
        yield_score: 6.5,
        risk_score: 6.0,
        tags: &["Nootropics", "Peptides", "Performance"],
    },
    BusinessOpportunity {
        id: "mito-1",
        title: "Mitochondrial Energy (MEO) Hubs",
        sector: Sector::Product,
        description: "Subscription service for Urolithin A, NAD+ precursors, and CoQ10, coupled with cellular energy (ATP) testing.",
        regulatory_hurdles: "DSHEA compliance for supplement claims; FTC oversight on anti-aging marketing.",
        funding_landscape: "High LTV; appealing to wellness-focused Angel syndicates.",
        revenue_potential: "75% Gross Margin",
        barrier_to_entry: BarrierToEntry::Low,
        regulatory_risk: RegulatoryRisk::Low,
        yield_score: 5.5,
        risk_score: 2.5,
        tags: &["Mitochondria", "Supplements", "NAD+"],
    },
    BusinessOpportunity {
        id: "pgdh-1",
        title: "15-PGDH Inhibitor Therapeutics",
        sector: Sector::Regenerative,
        description: "Development of small molecule inhibitors to elevate Prostaglandin E2 (PGE2), reversing cartilage degeneration and sarcopenia.",
        regulatory_hurdles: "High FDA scrutiny for novel small molecules; Phase I/II safety trials required.",
        funding_landscape: "Top-tier Biotech VC target due to massive osteoarthritis addressable market.",
        revenue_potential: "Billion-dollar Exit Potential",
        barrier_to_entry: BarrierToEntry::VeryHigh,
        regulatory_risk: RegulatoryRisk::High,
        yield_score: 9.8,
        risk_score: 9.5,
        tags: &["Osteoarthritis", "Sarcopenia", "Biotech"],
    },
    BusinessOpportunity {
        id: "neuro-1",
        title: "VNS Neuro-Recovery Centers",
        sector: Sector::Clinical,
        description: "Clinics using non-invasive Vagus Nerve Stimulation (VNS) and Photobiomodulation for systemic inflammation and PTSD.",
        regulatory_hurdles: "FDA 510(k) clearance for devices; state medical board oversight.",
        funding_landscape: "High growth in \"Bio-Electronic\" medicine; MedTech VC interest.",
        revenue_potential: "$350/session",
        barrier_to_entry: BarrierToEntry::High,
        regulatory_risk: RegulatoryRisk::Medium,
        yield_score: 7.2,
        risk_score: 4.5,
        tags: &["Bio-Electronics", "Neurology", "VNS"],
    },
    BusinessOpportunity {
        id: "bank-1",
        title: "Autologous Bio-Banking",
        sector: Sector::Regenerative,
        description: "Cryopreservation service for client's own adipose-derived stem cells and immune cells for future immunotherapies.",
        regulatory_hurdles: "FDA 21 CFR 1271 (HCT/Ps) compliance for autologous use.",
        funding_landscape: "Asset-heavy startup costs; steady recurring revenue (storage fees).",
        revenue_potential: "$2k Extraction + $500/yr",
        barrier_to_entry: BarrierToEntry::High,
        regulatory_risk: RegulatoryRisk::Low,
        yield_score: 6.8,
        risk_score: 3.5,
        tags: &["Stem Cells", "Banking", "Insurance"],
    },
    BusinessOpportunity {
        id: "reg-2",
        title: "Longevity Diagnostics Hub",
        sector: Sector::Regenerative,
        description: "Retail centers offering biological age testing (Epigenetic clocks), DEXA scans, and VO2 Max assessment.",
        regulatory_hurdles: "CLIA waiver for in-house blood work and state-level lab regulations.",
        funding_landscape: "High LTV; attractive to franchise-model private equity.",
        revenue_potential: "$1,200/initial assessment",
        barrier_to_entry: BarrierToEntry::Medium,
        regulatory_risk: RegulatoryRisk::Low,
        yield_score: 6.0,
        risk_score: 3.0,
        tags: &["Diagnostics", "Retail", "Longevity"],
    },
    BusinessOpportunity {
        id: "desci-1",
        title: "DeSci IP-NFT Foundry",
        sector: Sector::TechSaas,
        description: "Incubator that funds \"unpatentable\" longevity molecules and tokenizes the resulting IP.",
        regulatory_hurdles: "SEC/FinCEN compliance for digital assets; complex IP licensing.",
        funding_landscape: "Crypto-native VCs and Decentralized Autonomous Organizations (DAOs).",
        revenue_potential: "Equity + Royalty Stream",
        barrier_to_entry: BarrierToEntry::VeryHigh,
        regulatory_risk: RegulatoryRisk::Medium,
        yield_score: 9.0,
        risk_score: 7.0,
        tags: &["Web3", "IP", "DeSci"],
    },
    BusinessOpportunity {
        id: "micro-1",
        title: "Precision Microbiome Modulation",
        sector: Sector::Product,
        description: "AI-driven gut sequencing paired with custom-compounded synbiotics and bacteriophages for metabolic health.",
        regulatory_hurdles: "GRAS status for supplements vs FDA biologic pathways for phages.",
        funding_landscape: "Hot sector; significant VC interest in \"Food as Medicine\" tech.",
        revenue_potential: "$150/mo + Testing",
        barrier_to_entry: BarrierToEntry::Medium,
        regulatory_risk: RegulatoryRisk::Medium,
        yield_score: 5.8,
        risk_score: 4.0,
        tags: &["Microbiome", "AI", "Gut Health"],
    },
    BusinessOpportunity {
        id: "mat-1",
        title: "Intergenerational Epigenetic Coaching",
        sector: Sector::TechSaas,
        description: "AI platform for expectant mothers to optimize fetal epigenetics through targeted multi-omic intervention.",
        regulatory_hurdles: "HIPAA compliance; ethical review boards (IRB) for research-adjacent data.",
        funding_landscape: "FemTech and Longevity cross-over; significant seed interest.",
        revenue_potential: "$2k - $5k LTV",
        barrier_to_entry: BarrierToEntry::Medium,
        regulatory_risk: RegulatoryRisk::Low,
        yield_score: 6.2,
        risk_score: 2.0,
        tags: &["FemTech", "Epigenetics", "AI"],
    },
    BusinessOpportunity {
        id: "api-1",
        title: "API Manufacturing (Peptides)",
        sector: Sector::Manufacturing,
        description: "Scaling domestic production of high-purity Peptide APIs for compounding pharmacies.",
        regulatory_hurdles: "cGMP facility certification and DEA/ISO standards compliance.",
        funding_landscape: "Capital intensive; Private Equity and Government grants/subsidies.",
        revenue_potential: "$100M+ Capacity",
        barrier_to_entry: BarrierToEntry::VeryHigh,
        regulatory_risk: RegulatoryRisk::High,
        yield_score: 8.5,
        risk_score: 8.0,
        tags: &["Manufacturing", "Biotech", "B2B"],
    },
];
