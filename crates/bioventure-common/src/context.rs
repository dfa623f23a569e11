//! User-supplied inputs that drive one blueprint generation request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

// ── Budget ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BudgetBracket {
    #[serde(rename = "Under $5k (Bootstrap)")]
    Bootstrap,
    #[default]
    #[serde(rename = "$10k - $50k")]
    SmallStart,
    #[serde(rename = "$50k - $200k")]
    ClinicRetail,
    #[serde(rename = "$200k+")]
    Scale,
}

impl BudgetBracket {
    pub const ALL: [BudgetBracket; 4] = [
        BudgetBracket::Bootstrap,
        BudgetBracket::SmallStart,
        BudgetBracket::ClinicRetail,
        BudgetBracket::Scale,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetBracket::Bootstrap    => "Under $5k (Bootstrap)",
            BudgetBracket::SmallStart   => "$10k - $50k",
            BudgetBracket::ClinicRetail => "$50k - $200k",
            BudgetBracket::Scale        => "$200k+",
        }
    }

    /// Longer caption shown next to the option in the form.
    pub fn caption(&self) -> &'static str {
        match self {
            BudgetBracket::Bootstrap    => "Under $5k (Bootstrap)",
            BudgetBracket::SmallStart   => "$10k - $50k (Small Start)",
            BudgetBracket::ClinicRetail => "$50k - $200k (Clinic/Retail)",
            BudgetBracket::Scale        => "$200k+ (Manufacturing/Scale)",
        }
    }
}

// ── Target market ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TargetMarket {
    #[serde(rename = "GLP-1 Weight Loss")]
    WeightLoss,
    #[default]
    #[serde(rename = "Longevity & Anti-aging")]
    Longevity,
    #[serde(rename = "Fitness & Performance")]
    Performance,
    #[serde(rename = "Skincare & Beauty")]
    Skincare,
    #[serde(rename = "Cognitive Enhancement")]
    Cognitive,
    #[serde(rename = "Regenerative Medicine")]
    Regenerative,
    #[serde(rename = "Tech & SaaS")]
    TechSaas,
}

impl TargetMarket {
    pub const ALL: [TargetMarket; 7] = [
        TargetMarket::WeightLoss,
        TargetMarket::Longevity,
        TargetMarket::Performance,
        TargetMarket::Skincare,
        TargetMarket::Cognitive,
        TargetMarket::Regenerative,
        TargetMarket::TechSaas,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TargetMarket::WeightLoss   => "GLP-1 Weight Loss",
            TargetMarket::Longevity    => "Longevity & Anti-aging",
            TargetMarket::Performance  => "Fitness & Performance",
            TargetMarket::Skincare     => "Skincare & Beauty",
            TargetMarket::Cognitive    => "Cognitive Enhancement",
            TargetMarket::Regenerative => "Regenerative Medicine",
            TargetMarket::TechSaas     => "Tech & SaaS",
        }
    }
}

// ── Business model ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusinessModel {
    #[default]
    #[serde(rename = "Any / Best Fit")]
    BestFit,
    #[serde(rename = "SaaS / Digital Platform")]
    DigitalPlatform,
    #[serde(rename = "Physical Clinic / Medspa")]
    PhysicalClinic,
    #[serde(rename = "E-commerce / D2C")]
    Ecommerce,
    #[serde(rename = "B2B Distribution / Supply Chain")]
    Distribution,
    #[serde(rename = "Manufacturing / R&D")]
    Manufacturing,
}

impl BusinessModel {
    pub const ALL: [BusinessModel; 6] = [
        BusinessModel::BestFit,
        BusinessModel::DigitalPlatform,
        BusinessModel::PhysicalClinic,
        BusinessModel::Ecommerce,
        BusinessModel::Distribution,
        BusinessModel::Manufacturing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BusinessModel::BestFit         => "Any / Best Fit",
            BusinessModel::DigitalPlatform => "SaaS / Digital Platform",
            BusinessModel::PhysicalClinic  => "Physical Clinic / Medspa",
            BusinessModel::Ecommerce       => "E-commerce / D2C",
            BusinessModel::Distribution    => "B2B Distribution / Supply Chain",
            BusinessModel::Manufacturing   => "Manufacturing / R&D",
        }
    }
}

macro_rules! label_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = LabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.label() == s.trim())
                    .ok_or_else(|| LabelError::new($kind, s))
            }
        }
    };
}

label_traits!(BudgetBracket, "budget");
label_traits!(TargetMarket, "target market");
label_traits!(BusinessModel, "business model");

// ── UserContext ──────────────────────────────────────────────────────────────

pub const DEFAULT_SKILLS: &str = "Marketing & Sales";
pub const DEFAULT_LOCATION: &str = "Arizona, USA";

/// The five form fields. Every field always holds a usable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub budget: BudgetBracket,
    pub skills: String,
    pub location: String,
    pub target_market: TargetMarket,
    pub business_model: BusinessModel,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            budget: BudgetBracket::default(),
            skills: DEFAULT_SKILLS.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            target_market: TargetMarket::default(),
            business_model: BusinessModel::default(),
        }
    }
}

/// A single form-field edit. Enumerated fields can only carry valid members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Budget(BudgetBracket),
    Skills(String),
    Location(String),
    TargetMarket(TargetMarket),
    BusinessModel(BusinessModel),
}

impl UserContext {
    /// Apply one field edit. Blank free text falls back to the field default.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Budget(b)        => self.budget = b,
            FieldEdit::Skills(s)        => self.skills = non_blank(s, DEFAULT_SKILLS),
            FieldEdit::Location(l)      => self.location = non_blank(l, DEFAULT_LOCATION),
            FieldEdit::TargetMarket(t)  => self.target_market = t,
            FieldEdit::BusinessModel(m) => self.business_model = m,
        }
    }

    /// Re-establish the non-empty invariant on a context built elsewhere
    /// (form posts, JSON bodies).
    pub fn normalized(mut self) -> Self {
        self.skills = non_blank(self.skills, DEFAULT_SKILLS);
        self.location = non_blank(self.location, DEFAULT_LOCATION);
        self
    }
}

fn non_blank(value: String, fallback: &str) -> String {
    match value.trim() {
        ""      => fallback.to_string(),
        trimmed => trimmed.to_string(),
    }
}
