//! Rule Builder: renders the rule implied by the current draft.
//!
//! Simulation and rollback are display-only: there is no rule store,
//! so neither touches any application or any other session.

use crate::{
    config::RuleBuilderConfig,
    form::RuleDraft,
    router::Page,
    types::{Country, Product, RuleVersion},
    view::Notice,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleBuilderView {
    pub title:        String,
    pub draft:        RuleDraft,
    pub rule_logic:   String,
    pub products:     Vec<Product>,
    pub countries:    Vec<Country>,
    pub versions:     Vec<RuleVersion>,
    pub income_range: (u32, u32),
    pub score_range:  (u32, u32),
    pub notices:      Vec<Notice>,
}

/// `If Income > {income} AND Credit Score > {score} AND Country == {country} THEN Approve`
pub fn rule_logic(income: u32, credit_score: u32, country: Country) -> String {
    format!("If Income > {income} AND Credit Score > {credit_score} AND Country == {country} THEN Approve")
}

pub fn simulate_ack(draft: &RuleDraft) -> Notice {
    Notice::info(format!(
        "Simulation requested for {} rule {}",
        draft.product_scope, draft.rule_version
    ))
}

pub fn rollback_ack(version: RuleVersion) -> Notice {
    Notice::success(format!("Rolled back to rule version {version}"))
}

pub fn build(draft: &RuleDraft, cfg: &RuleBuilderConfig) -> RuleBuilderView {
    RuleBuilderView {
        title:        Page::RuleBuilder.title().to_string(),
        rule_logic:   rule_logic(draft.income_threshold, draft.credit_score_threshold, draft.country_scope),
        draft:        draft.clone(),
        products:     Product::ALL.to_vec(),
        countries:    Country::ALL.to_vec(),
        versions:     RuleVersion::ALL.to_vec(),
        income_range: (cfg.income_min, cfg.income_max),
        score_range:  (cfg.score_min, cfg.score_max),
        notices:      Vec::new(),
    }
}
