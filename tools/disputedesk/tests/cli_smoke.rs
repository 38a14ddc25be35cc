use assert_cmd::cargo::cargo_bin_cmd;

fn fixture(path: &str) -> String {
    format!("{}/tests/fixtures/{path}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn help_lists_review_flags() {
    let mut cmd = cargo_bin_cmd!("disputedesk");
    cmd.arg("--help");
    let out = cmd.assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");

    assert!(stdout.contains("--report"));
    assert!(stdout.contains("--once"));
    assert!(stdout.contains("--summary-only"));
    assert!(stdout.contains("--expanded"));
}

#[test]
fn once_renders_both_section_headers() {
    let mut cmd = cargo_bin_cmd!("disputedesk");
    cmd.arg("--once")
        .arg("--report")
        .arg(fixture("reports/sample-report.json"))
        .arg("--config")
        .arg(fixture("configs/quiet.toml"));
    let out = cmd.assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");

    assert!(stdout.contains("Negative Accounts (2)"));
    assert!(stdout.contains("Positive & Closed Accounts (3)"));
}

#[test]
fn expanded_once_renders_rows() {
    let mut cmd = cargo_bin_cmd!("disputedesk");
    cmd.arg("--once")
        .arg("--expanded")
        .arg("--report")
        .arg(fixture("reports/sample-report.json"))
        .arg("--config")
        .arg(fixture("configs/quiet.toml"));
    let out = cmd.assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");

    assert!(stdout.contains("Midland Credit"));
    assert!(stdout.contains("Hometown Mortgage"));
}

#[test]
fn summary_only_prints_one_line_per_section() {
    let mut cmd = cargo_bin_cmd!("disputedesk");
    cmd.arg("--summary-only")
        .arg("--report")
        .arg(fixture("reports/sample-report.json"))
        .arg("--config")
        .arg(fixture("configs/quiet.toml"));
    let out = cmd.assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");

    assert!(stdout.contains("negative accounts: total=2 saved=1 fully_saved=false"));
    assert!(stdout.contains("positive accounts: total=3 open=1 closed=2"));
}

#[test]
fn fully_saved_report_prints_the_card_in_once_mode() {
    let mut cmd = cargo_bin_cmd!("disputedesk");
    cmd.arg("--once")
        .arg("--report")
        .arg(fixture("reports/all-saved.json"))
        .arg("--config")
        .arg(fixture("configs/quiet.toml"));
    let out = cmd.assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");

    assert!(stdout.contains("Disputes Saved"));
}

#[test]
fn missing_report_path_exits_nonzero() {
    let mut cmd = cargo_bin_cmd!("disputedesk");
    cmd.arg("--once");
    cmd.assert().failure();
}

#[test]
fn unreadable_report_file_exits_nonzero() {
    let mut cmd = cargo_bin_cmd!("disputedesk");
    cmd.arg("--once")
        .arg("--report")
        .arg(fixture("reports/does-not-exist.json"));
    cmd.assert().failure();
}
