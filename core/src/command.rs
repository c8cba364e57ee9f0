use crate::{
    router::Page,
    types::{ApplicationId, Country, Product, ProductStatus, RuleVersion},
};
use serde::{Deserialize, Serialize};

/// Every interaction the presentation layer can send.
/// Omitted optional fields leave the current form value unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DeskCommand {
    // ── Navigation ────────────────────────────────
    SelectPage { page: Page },

    // ── Rule Builder ──────────────────────────────
    SetRuleInputs {
        product:      Option<Product>,
        income:       Option<i64>,
        credit_score: Option<i64>,
        country:      Option<Country>,
    },
    SimulateRule,
    SelectRuleVersion { version: RuleVersion },
    RollbackRuleVersion,

    // ── Applications ──────────────────────────────
    SelectApplication { id: ApplicationId },

    // ── Product Config ────────────────────────────
    SetProductConfig {
        product:               Option<Product>,
        min_score:             Option<i64>,
        credit_limit:          Option<f64>,
        use_bank_transactions: Option<bool>,
        use_digital_footprint: Option<bool>,
        status:                Option<ProductStatus>,
    },
}

impl DeskCommand {
    /// The page whose form this command edits. None for navigation.
    pub fn target_page(&self) -> Option<Page> {
        match self {
            Self::SelectPage { .. } => None,
            Self::SetRuleInputs { .. }
            | Self::SimulateRule
            | Self::SelectRuleVersion { .. }
            | Self::RollbackRuleVersion => Some(Page::RuleBuilder),
            Self::SelectApplication { .. } => Some(Page::Applications),
            Self::SetProductConfig { .. } => Some(Page::ProductConfig),
        }
    }

    /// Stable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectPage { .. }          => "select_page",
            Self::SetRuleInputs { .. }       => "set_rule_inputs",
            Self::SimulateRule               => "simulate_rule",
            Self::SelectRuleVersion { .. }   => "select_rule_version",
            Self::RollbackRuleVersion        => "rollback_rule_version",
            Self::SelectApplication { .. }   => "select_application",
            Self::SetProductConfig { .. }    => "set_product_config",
        }
    }
}
