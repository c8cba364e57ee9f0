//! Product configuration: echoes the form. Nothing is persisted.

use crate::{
    config::ProductConfigDefaults,
    form::ProductConfigForm,
    router::Page,
    types::{Product, ProductStatus},
    view::Notice,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductConfigView {
    pub title:           String,
    pub config:          ProductConfigForm,
    pub products:        Vec<Product>,
    pub statuses:        Vec<ProductStatus>,
    pub min_score_range: (u32, u32),
    pub notices:         Vec<Notice>,
}

pub fn build(form: &ProductConfigForm, defaults: &ProductConfigDefaults) -> ProductConfigView {
    ProductConfigView {
        title:           Page::ProductConfig.title().to_string(),
        config:          form.clone(),
        products:        Product::ALL.to_vec(),
        statuses:        ProductStatus::ALL.to_vec(),
        min_score_range: (defaults.min_score_floor, defaults.min_score_ceiling),
        notices:         Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_form_state() {
        let defaults = ProductConfigDefaults::default();
        let (mut form, _) = ProductConfigForm::from_config(&defaults);
        form.product = Product::LineOfCredit;
        form.status = ProductStatus::Inactive;

        let view = build(&form, &defaults);
        assert_eq!(view.title, "Product Configuration");
        assert_eq!(view.config, form);
        assert_eq!(view.min_score_range, (300, 1_000));
        assert!(view.config.use_bank_transactions);
        assert!(!view.config.use_digital_footprint);
    }
}
