use disputedesk::app::DeskApp;
use disputedesk::config::AppConfig;
use disputedesk::report::parse_report;
use disputedesk::tui::render_review;

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
fn collapsed_review_shows_counts_subtitles_and_legend() {
    let mut app = sample_app();
    let frame = render_review(&app.view(), 120, 32);

    assert!(frame.contains("Negative Accounts (2)"));
    assert!(frame.contains("2 negative accounts need dispute review"));
    assert!(frame.contains("Positive & Closed Accounts (3)"));
    assert!(frame.contains("3 accounts in good standing helping your credit score"));
    assert!(frame.contains("Keys: "));
    // Rows stay lazy while both sections are collapsed.
    assert!(!frame.contains("Midland Credit"));
    assert!(!frame.contains("Hometown Mortgage"));
}

#[test]
fn expanded_negative_section_lists_creditors_and_saved_markers() {
    let mut app = sample_app();
    app.toggle_negative();
    let frame = render_review(&app.view(), 120, 32);

    assert!(frame.contains("Midland Credit"));
    assert!(frame.contains("Cavalry Portfolio"));
    assert!(frame.contains("[dispute saved]"));
    assert!(frame.contains("2 violation(s)"));
}

#[test]
fn expanded_positive_section_orders_open_accounts_first() {
    let mut app = sample_app();
    app.toggle_positive();
    let frame = render_review(&app.view(), 120, 32);

    assert!(frame.contains("[Expand All]"));
    assert!(frame.contains("[Show All Details]"));

    let mortgage = frame.find("Hometown Mortgage").expect("open account");
    let auto = frame.find("First Auto Finance").expect("closed account");
    let retail = frame.find("Retail Card Services").expect("date-closed account");
    assert!(mortgage < auto, "open account must render before closed ones");
    assert!(mortgage < retail, "open account must render before closed ones");
    assert!(frame.contains("[closed]"));
}

#[test]
fn expand_all_and_details_add_row_lines() {
    let mut app = sample_app();
    app.toggle_negative();
    app.toggle_positive();
    app.toggle_expand_all();
    app.toggle_show_all_details();
    let frame = render_review(&app.view(), 120, 40);

    // Expanded rows spell out scanned violations.
    assert!(frame.contains("- Re-aged delinquency date"));
    // Detail lines surface on positive rows, driven by the parent flag.
    assert!(frame.contains("closed_date=2022-11-04"));
}

#[test]
fn fully_saved_negative_section_renders_only_the_card() {
    let mut app = DeskApp::new(
        parse_report(ALL_SAVED_REPORT).expect("all-saved report"),
        &quiet_config(),
    );
    let frame = render_review(&app.view(), 120, 32);

    assert!(frame.contains("Negative Accounts – Disputes Saved"));
    assert!(frame.contains("You've saved disputes for 2 negative account(s)"));
    assert!(!frame.contains("need dispute review"));
    assert!(!frame.contains("Negative Accounts (2)"));
}

#[test]
fn narrow_viewport_still_renders_headers() {
    let mut app = sample_app();
    let frame = render_review(&app.view(), 60, 18);
    assert!(frame.contains("Negative Accounts (2)"));
}

#[test]
fn empty_report_renders_the_zero_account_subtitle() {
    let mut app = DeskApp::new(parse_report("{}").expect("empty"), &quiet_config());
    let frame = render_review(&app.view(), 100, 24);
    assert!(frame.contains("There are 0 accounts currently helping your credit score"));
    assert!(frame.contains("Negative Accounts (0)"));
}
