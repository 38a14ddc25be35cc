use disputedesk::app::DeskApp;
use disputedesk::classifier;
use disputedesk::commands::StateRequest;
use disputedesk::config::AppConfig;
use disputedesk::negative_section::NegativeSectionView;
use disputedesk::report::parse_report;
use disputedesk::types::{DisputeEntry, DisputeRecord};

const SAMPLE_REPORT: &str = include_str!("fixtures/reports/sample-report.json");
const ALL_SAVED_REPORT: &str = include_str!("fixtures/reports/all-saved.json");

fn quiet_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.logging.enabled = false;
    cfg
}

fn sample_app() -> DeskApp {
    DeskApp::new(parse_report(SAMPLE_REPORT).expect("sample report"), &quiet_config())
}

#[test]
fn one_header_toggle_moves_collapsed_and_show_flag_once() {
    let mut app = sample_app();
    assert!(app.negative_state().collapsed);
    assert!(!app.show_negative());

    app.toggle_negative();
    assert!(!app.negative_state().collapsed);
    assert!(app.show_negative());

    app.toggle_negative();
    assert!(app.negative_state().collapsed);
    assert!(!app.show_negative());
}

#[test]
fn saving_the_remaining_negative_account_switches_to_the_card() {
    let mut app = sample_app();
    // Fixture ships with TL-NEG-001 already saved; 522222 is still open.
    assert!(matches!(app.view().negative, NegativeSectionView::Panel(_)));

    app.apply(StateRequest::SaveDispute {
        account_id: "522222".to_string(),
        dispute: DisputeRecord {
            reason: "Not my account".to_string(),
            instruction: "Please remove this account".to_string(),
            violations: None,
        },
    });

    let view = app.view();
    let NegativeSectionView::SavedCard(card) = &view.negative else {
        panic!("expected the saved card");
    };
    assert_eq!(
        card.summary_text,
        "You've saved disputes for 2 negative account(s) across TransUnion, Equifax, and Experian."
    );

    // No negative rows exist while the card shows; the cursor only walks
    // the positive section.
    assert!(view.negative_rows().is_empty());
}

#[test]
fn card_survives_expand_until_a_dispute_is_reset() {
    let mut app = DeskApp::new(
        parse_report(ALL_SAVED_REPORT).expect("all-saved report"),
        &quiet_config(),
    );
    assert!(matches!(app.view().negative, NegativeSectionView::SavedCard(_)));

    // The card's expand interaction updates the flags, but precedence keeps
    // the card in place while every account stays saved.
    app.toggle_negative();
    assert!(app.show_negative());
    assert!(!app.negative_state().collapsed);
    assert!(matches!(app.view().negative, NegativeSectionView::SavedCard(_)));

    app.apply(StateRequest::ResetDispute {
        account_id: "522222".to_string(),
    });
    let view = app.view();
    let NegativeSectionView::Panel(panel) = &view.negative else {
        panic!("expected the panel after reset");
    };
    // Flags were already open, so the rows are immediately visible.
    let rows = panel.rows.as_deref().expect("rows");
    assert_eq!(rows.len(), 2);
}

#[test]
fn mixed_entry_shapes_both_count_as_saved() {
    let report = parse_report(ALL_SAVED_REPORT).expect("all-saved report");
    assert_eq!(
        classifier::count_saved(&report.negative_accounts, &report.saved_disputes),
        2
    );
    assert!(classifier::is_section_fully_saved(
        &report.negative_accounts,
        &report.saved_disputes
    ));
    assert!(matches!(
        report.saved_disputes.get("TL-NEG-001"),
        Some(DisputeEntry::Flag(true))
    ));
    assert!(matches!(
        report.saved_disputes.get("522222"),
        Some(DisputeEntry::Saved(_))
    ));
}

#[test]
fn violations_only_reach_rows_keyed_by_credit_liability_id() {
    let mut app = sample_app();
    app.toggle_negative();
    let view = app.view();
    let rows = view.negative_rows();

    // TL-NEG-001 carries a liability id, so its scan results surface.
    assert_eq!(rows[0].violations.len(), 2);
    // 522222 resolves through the account-number fallback for dispute
    // matching, but the violation lookup never consults that key.
    assert_eq!(rows[1].account_id, Some("522222"));
    assert!(rows[1].violations.is_empty());
}

#[test]
fn positive_rows_render_open_first_with_parent_gated_body() {
    let mut app = sample_app();
    assert!(app.view().positive_rows().is_empty());

    app.toggle_positive();
    let view = app.view();
    let rows = view.positive_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].account_id, Some("TL-POS-002"));
    assert!(!rows[0].closed);
    assert!(rows[1].closed);
    assert!(rows[2].closed);

    // Taxonomies ride on the panel unmodified for the row renderer.
    assert_eq!(view.positive.dispute_reasons.len(), 2);
    assert_eq!(view.positive.dispute_instructions.len(), 2);
}

#[test]
fn expand_and_detail_toggles_reach_every_positive_row() {
    let mut app = sample_app();
    app.toggle_positive();
    app.toggle_expand_all();
    app.toggle_show_all_details();

    let view = app.view();
    let rows = view.positive_rows();
    assert!(rows.iter().all(|row| row.expand_all));
    assert!(rows.iter().all(|row| row.show_all_details));

    // The negative section's detail flag is its own local state and is not
    // driven by the positive section's toggle.
    assert!(!app.negative_state().show_all_details);
}

#[test]
fn cursor_walks_negative_rows_then_positive_rows() {
    let mut app = sample_app();
    app.toggle_negative();
    app.toggle_positive();

    let first = app.selected_row().expect("first row");
    assert_eq!(first.account_id, "TL-NEG-001");
    assert_eq!(first.violations.len(), 2);

    app.apply(StateRequest::CursorDown);
    let second = app.selected_row().expect("second row");
    assert_eq!(second.account_id, "522222");
    assert!(second.violations.is_empty());

    app.apply(StateRequest::CursorDown);
    let third = app.selected_row().expect("third row");
    assert_eq!(third.account_id, "TL-POS-002");
}
