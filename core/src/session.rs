//! Session: one user's view of the desk.
//!
//! A session owns its dataset snapshot, the router and the form inputs.
//! Nothing is shared between sessions. `render()` is a pure function of
//! that state; `apply()` is the only way to change it.
//!
//! RULES:
//!   - Changing page rebuilds every form from config defaults. A default
//!     outside its slider range is clamped and warned about on its page.
//!   - Acknowledgements and clamp warnings live for exactly one render:
//!     they are dropped at the start of the next `apply()`.
//!   - A form command for a page other than the current one is rejected
//!     and leaves the session untouched.

use crate::{
    analytics_view, applications_view,
    command::DeskCommand,
    config::DeskConfig,
    dashboard_view,
    dataset::{generate_with, Dataset},
    error::{DeskError, DeskResult},
    form::{clamp_credit_limit, clamp_slider, Clamped, FormInputs},
    product_config_view,
    router::{Page, Router},
    rule_builder_view,
    types::Seed,
    view::{Notice, ViewModel},
};

pub struct Session {
    config: DeskConfig,
    data:   Dataset,
    router: Router,
    forms:  FormInputs,
    flash:  Vec<Notice>,
}

impl Session {
    /// Generate a fresh dataset for `seed` and start on the Dashboard.
    pub fn new(seed: Seed, config: DeskConfig) -> Self {
        let data = generate_with(seed, &config.data);
        Self::with_dataset(data, config)
    }

    pub fn with_dataset(data: Dataset, config: DeskConfig) -> Self {
        let (forms, _) = FormInputs::from_config(&config.rule_builder, &config.product_config);
        Self {
            config,
            data,
            router: Router::new(),
            forms,
            flash: Vec::new(),
        }
    }

    pub fn current_page(&self) -> Page {
        self.router.current()
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn forms(&self) -> &FormInputs {
        &self.forms
    }

    /// Shorthand for `apply(SelectPage)`; navigation cannot fail.
    pub fn select_page(&mut self, page: Page) {
        self.flash.clear();
        self.navigate(page);
    }

    pub fn apply(&mut self, command: DeskCommand) -> DeskResult<()> {
        self.flash.clear();

        if let Some(expected) = command.target_page() {
            let current = self.router.current();
            if expected != current {
                log::warn!("rejected {}: {expected} form while on {current}", command.name());
                return Err(DeskError::WrongPage { expected, current });
            }
        }
        log::debug!("apply {}", command.name());

        match command {
            DeskCommand::SelectPage { page } => self.navigate(page),

            DeskCommand::SetRuleInputs { product, income, credit_score, country } => {
                let cfg = &self.config.rule_builder;
                let rule = &mut self.forms.rule;
                if let Some(product) = product {
                    rule.product_scope = product;
                }
                if let Some(income) = income {
                    let c = clamp_slider("income", income, cfg.income_min, cfg.income_max);
                    rule.income_threshold = c.value;
                    Self::flash_clamp(&mut self.flash, c.error);
                }
                if let Some(score) = credit_score {
                    let c = clamp_slider("credit_score", score, cfg.score_min, cfg.score_max);
                    rule.credit_score_threshold = c.value;
                    Self::flash_clamp(&mut self.flash, c.error);
                }
                if let Some(country) = country {
                    rule.country_scope = country;
                }
            }

            DeskCommand::SimulateRule => {
                self.flash.push(rule_builder_view::simulate_ack(&self.forms.rule));
            }

            DeskCommand::SelectRuleVersion { version } => {
                self.forms.rule.rule_version = version;
            }

            DeskCommand::RollbackRuleVersion => {
                let version = self.forms.rule.rule_version;
                log::info!("rollback requested to rule version {version} (display only)");
                self.flash.push(rule_builder_view::rollback_ack(version));
            }

            DeskCommand::SelectApplication { id } => {
                self.forms.selected_application = Some(id);
            }

            DeskCommand::SetProductConfig {
                product,
                min_score,
                credit_limit,
                use_bank_transactions,
                use_digital_footprint,
                status,
            } => {
                let cfg = &self.config.product_config;
                let form = &mut self.forms.product_config;
                if let Some(product) = product {
                    form.product = product;
                }
                if let Some(score) = min_score {
                    let c = clamp_slider("min_score", score, cfg.min_score_floor, cfg.min_score_ceiling);
                    form.min_score = c.value;
                    Self::flash_clamp(&mut self.flash, c.error);
                }
                if let Some(limit) = credit_limit {
                    let Clamped { value, error } = clamp_credit_limit(limit);
                    form.credit_limit = value;
                    Self::flash_clamp(&mut self.flash, error);
                }
                if let Some(flag) = use_bank_transactions {
                    form.use_bank_transactions = flag;
                }
                if let Some(flag) = use_digital_footprint {
                    form.use_digital_footprint = flag;
                }
                if let Some(status) = status {
                    form.status = status;
                }
            }
        }
        Ok(())
    }

    /// Build the view model for the current page.
    pub fn render(&self) -> ViewModel {
        let mut view = match self.router.current() {
            Page::Dashboard => ViewModel::Dashboard(dashboard_view::build(&self.data)),
            Page::RuleBuilder => ViewModel::RuleBuilder(rule_builder_view::build(
                &self.forms.rule,
                &self.config.rule_builder,
            )),
            Page::Applications => ViewModel::Applications(applications_view::build(
                &self.data,
                self.forms.selected_application.as_deref(),
            )),
            Page::ProductConfig => ViewModel::ProductConfig(product_config_view::build(
                &self.forms.product_config,
                &self.config.product_config,
            )),
            Page::Analytics => {
                ViewModel::Analytics(analytics_view::build(&self.data, &self.config.analytics))
            }
        };
        view.notices_mut().extend(self.flash.iter().cloned());
        view
    }

    /// CSV body of the applications table.
    pub fn export_csv(&self) -> String {
        applications_view::export_body(&self.data)
    }

    fn navigate(&mut self, page: Page) {
        if !self.router.select(page) {
            return;
        }
        let (forms, issues) = FormInputs::from_config(&self.config.rule_builder, &self.config.product_config);
        self.forms = forms;
        let issues = match page {
            Page::RuleBuilder => issues.rule,
            Page::ProductConfig => issues.product_config,
            Page::Dashboard | Page::Applications | Page::Analytics => Vec::new(),
        };
        for e in issues {
            Self::flash_clamp(&mut self.flash, Some(e));
        }
    }

    fn flash_clamp(flash: &mut Vec<Notice>, error: Option<DeskError>) {
        if let Some(e) = error {
            flash.push(Notice::warning(e.to_string()));
        }
    }
}
