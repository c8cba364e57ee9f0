//! Router and session behaviour: page changes, form commands, clamping,
//! and isolation between pages and sessions.

use scoring_core::{
    command::DeskCommand,
    config::DeskConfig,
    error::DeskError,
    router::Page,
    session::Session,
    types::{Country, Product, ProductStatus, RuleVersion},
    view::{NoticeLevel, ViewModel},
};

const SEED: u64 = 0xC0FF_EE00;

fn session() -> Session {
    let _ = env_logger::builder().is_test(true).try_init();
    Session::new(SEED, DeskConfig::default())
}

fn rule_inputs(income: i64, score: i64, country: Country) -> DeskCommand {
    DeskCommand::SetRuleInputs {
        product:      None,
        income:       Some(income),
        credit_score: Some(score),
        country:      Some(country),
    }
}

/// Drive a page into a non-default state so leaks would be visible.
fn dirty(session: &mut Session, page: Page) {
    session.select_page(page);
    let cmd = match page {
        Page::RuleBuilder => rule_inputs(15_000, 900, Country::Egypt),
        Page::Applications => DeskCommand::SelectApplication { id: "USR1004".into() },
        Page::ProductConfig => DeskCommand::SetProductConfig {
            product:               Some(Product::PersonalLoan),
            min_score:             Some(-5),
            credit_limit:          Some(9_000.0),
            use_bank_transactions: Some(false),
            use_digital_footprint: Some(true),
            status:                Some(ProductStatus::Inactive),
        },
        Page::Dashboard | Page::Analytics => return,
    };
    session.apply(cmd).expect("form command on its own page");
}

#[test]
fn starts_on_dashboard() {
    let s = session();
    assert_eq!(s.current_page(), Page::Dashboard);
    assert!(matches!(s.render(), ViewModel::Dashboard(_)));
    assert_eq!(s.render().page(), Page::Dashboard);
}

#[test]
fn revisiting_a_page_matches_a_direct_visit() {
    for p1 in Page::ALL {
        let mut direct = session();
        direct.apply(DeskCommand::SelectPage { page: p1 }).unwrap();
        let expected = direct.render();

        for p2 in Page::ALL.into_iter().filter(|p| *p != p1) {
            let mut detour = session();
            dirty(&mut detour, p1);
            dirty(&mut detour, p2);
            detour.apply(DeskCommand::SelectPage { page: p1 }).unwrap();
            assert_eq!(detour.render().page(), p1);
            assert_eq!(detour.render(), expected, "state leaked via {p2} into {p1}");
        }
    }
}

#[test]
fn rule_builder_renders_requested_rule() {
    let mut s = session();
    s.select_page(Page::RuleBuilder);
    s.apply(rule_inputs(3000, 650, Country::Uae)).unwrap();

    let ViewModel::RuleBuilder(view) = s.render() else { panic!("expected rule builder view") };
    assert_eq!(
        view.rule_logic,
        "If Income > 3000 AND Credit Score > 650 AND Country == UAE THEN Approve"
    );
}

#[test]
fn out_of_bounds_sliders_clamp_with_warning() {
    let mut s = session();
    s.select_page(Page::RuleBuilder);
    s.apply(rule_inputs(-100, 2_000, Country::Ksa)).unwrap();

    let ViewModel::RuleBuilder(view) = s.render() else { panic!("expected rule builder view") };
    assert_eq!(view.draft.income_threshold, 0);
    assert_eq!(view.draft.credit_score_threshold, 1_000);
    let warnings = view.notices.iter().filter(|n| n.level == NoticeLevel::Warning).count();
    assert_eq!(warnings, 2);

    // Warnings last exactly one render cycle.
    s.apply(DeskCommand::SelectRuleVersion { version: RuleVersion::V1_0 }).unwrap();
    assert!(s.render().notices().iter().all(|n| n.level != NoticeLevel::Warning));
}

#[test]
fn rollback_confirms_selected_version_without_other_changes() {
    let mut s = session();
    s.select_page(Page::RuleBuilder);
    let before = s.forms().clone();

    s.apply(DeskCommand::SelectRuleVersion { version: RuleVersion::V1_1 }).unwrap();
    s.apply(DeskCommand::RollbackRuleVersion).unwrap();

    let view = s.render();
    assert!(view
        .notices()
        .iter()
        .any(|n| n.level == NoticeLevel::Success && n.message == "Rolled back to rule version v1.1"));
    assert_eq!(s.forms().rule.income_threshold, before.rule.income_threshold);
    assert_eq!(s.forms().product_config, before.product_config);
}

#[test]
fn simulate_is_acknowledged_and_changes_nothing() {
    let mut s = session();
    s.select_page(Page::RuleBuilder);
    let before = s.forms().clone();
    let data_before = s.data().clone();

    s.apply(DeskCommand::SimulateRule).unwrap();

    assert_eq!(s.forms(), &before);
    assert_eq!(s.data(), &data_before);
    assert_eq!(s.render().notices().len(), 1);
}

#[test]
fn form_command_for_another_page_is_rejected() {
    let mut s = session();
    let before = s.forms().clone();

    let err = s.apply(DeskCommand::SimulateRule).unwrap_err();
    assert!(matches!(
        err,
        DeskError::WrongPage { expected: Page::RuleBuilder, current: Page::Dashboard }
    ));
    assert_eq!(s.forms(), &before);
    assert_eq!(s.current_page(), Page::Dashboard);
}

#[test]
fn negative_credit_limit_clamps_to_zero() {
    let mut s = session();
    s.select_page(Page::ProductConfig);
    s.apply(DeskCommand::SetProductConfig {
        product:               None,
        min_score:             None,
        credit_limit:          Some(-1.0),
        use_bank_transactions: None,
        use_digital_footprint: None,
        status:                None,
    })
    .unwrap();

    let ViewModel::ProductConfig(view) = s.render() else { panic!("expected product config view") };
    assert_eq!(view.config.credit_limit, 0.0);
    assert_eq!(view.config.min_score, 600);
    assert!(view.notices.iter().any(|n| n.message.contains("credit_limit")));
}

#[test]
fn selecting_unknown_application_surfaces_error_not_failure() {
    let mut s = session();
    s.select_page(Page::Applications);
    s.apply(DeskCommand::SelectApplication { id: "USR0000".into() }).unwrap();

    let ViewModel::Applications(view) = s.render() else { panic!("expected applications view") };
    assert!(view.detail.is_none());
    assert!(view.error.is_some());
    assert!(view.notices.iter().any(|n| n.level == NoticeLevel::Error));
}

#[test]
fn sessions_do_not_share_form_state() {
    let mut a = session();
    let b = session();
    dirty(&mut a, Page::ProductConfig);
    assert_ne!(a.forms(), b.forms());
    assert_eq!(b.current_page(), Page::Dashboard);
}

#[test]
fn out_of_range_config_default_is_clamped_and_warned_on_its_page() {
    let mut config = DeskConfig::default();
    config.rule_builder.income_default = 50_000;
    let mut s = Session::new(SEED, config);

    // The dashboard has no income slider, so nothing to warn about there.
    assert!(s.render().notices().iter().all(|n| n.level != NoticeLevel::Warning));

    s.select_page(Page::RuleBuilder);
    let ViewModel::RuleBuilder(view) = s.render() else { panic!("expected rule builder view") };
    assert_eq!(view.draft.income_threshold, 20_000);
    assert_eq!(view.income_range, (0, 20_000));
    let warnings: Vec<_> = view.notices.iter().filter(|n| n.level == NoticeLevel::Warning).collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("income"), "got: {}", warnings[0].message);
}

#[test]
fn inverted_slider_bounds_never_panic() {
    let mut config = DeskConfig::default();
    config.rule_builder.income_min = 20_000;
    config.rule_builder.income_max = 0;
    config.product_config.min_score_floor = 1_000;
    config.product_config.min_score_ceiling = 300;
    let mut s = Session::new(SEED, config);

    s.select_page(Page::RuleBuilder);
    s.apply(rule_inputs(5_000, 650, Country::Uae)).unwrap();
    assert_eq!(s.forms().rule.income_threshold, 5_000);

    s.select_page(Page::ProductConfig);
    s.apply(DeskCommand::SetProductConfig {
        product:               None,
        min_score:             Some(2_000),
        credit_limit:          None,
        use_bank_transactions: None,
        use_digital_footprint: None,
        status:                None,
    })
    .unwrap();
    assert_eq!(s.forms().product_config.min_score, 1_000);
}
