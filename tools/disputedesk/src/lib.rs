pub mod app;
pub mod classifier;
pub mod commands;
pub mod config;
pub mod errors;
pub mod hotkeys;
pub mod log_retention;
pub mod logging;
pub mod negative_section;
pub mod positive_section;
pub mod report;
pub mod row;
pub mod runtime;
pub mod saved_card;
pub mod tradeline;
pub mod tui;
pub mod types;

use app::DeskApp;
use clap::{error::ErrorKind, CommandFactory, Parser};
use commands::StateRequest;
use config::{load_config, CliOverrides};
use errors::DisputeDeskError;
use hotkeys::HotkeyAction;
use runtime::ProductionRuntime;

#[derive(Debug, Clone, Parser)]
#[command(name = "disputedesk")]
#[command(about = "Terminal review of credit-report dispute sections")]
pub struct Cli {
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,
    /// Parsed credit-report input (JSON).
    #[arg(long)]
    pub report: Option<std::path::PathBuf>,
    /// Render a single frame and exit.
    #[arg(long, default_value_t = false)]
    pub once: bool,
    /// Print one summary line per section and exit.
    #[arg(long, default_value_t = false)]
    pub summary_only: bool,
    /// Open both sections before rendering.
    #[arg(long, default_value_t = false)]
    pub expanded: bool,
    #[arg(long)]
    pub width: Option<u16>,
    #[arg(long)]
    pub height: Option<u16>,
}

pub fn run() -> Result<i32, DisputeDeskError> {
    let args = std::env::args_os().collect::<Vec<_>>();
    let runtime = ProductionRuntime::new();
    run_with_runtime(&args, &runtime)
}

pub fn run_with_runtime(
    args: &[std::ffi::OsString],
    runtime: &ProductionRuntime,
) -> Result<i32, DisputeDeskError> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{error}");
                return Ok(0);
            }
            _ => return Err(DisputeDeskError::Cli(error.to_string())),
        },
    };

    let overrides = CliOverrides {
        config_path: cli.config.clone(),
        report_path: cli.report.clone(),
        width: cli.width,
        height: cli.height,
    };
    let cfg = load_config(&overrides, runtime.file_system.as_ref())?;

    let report_path = cfg.report.path.clone().ok_or_else(|| {
        DisputeDeskError::InvalidConfig(
            "no report path: pass --report or set report.path in the config".to_string(),
        )
    })?;
    let report = report::load_report(runtime.file_system.as_ref(), &report_path)?;
    let mut app = DeskApp::new(report, &cfg);

    if cli.summary_only {
        for line in app.summary_lines() {
            runtime.terminal.write_line(&line)?;
        }
        return Ok(0);
    }

    if cli.expanded {
        app.toggle_negative();
        app.toggle_positive();
    }

    if cli.once || !runtime.terminal.stdin_is_tty() {
        let frame = tui::render_review(&app.view(), cfg.display.width, cfg.display.height);
        runtime.terminal.draw(&frame)?;
        return Ok(0);
    }

    run_review_loop(&mut app, runtime, cfg.display.width, cfg.display.height)?;
    Ok(0)
}

fn run_review_loop(
    app: &mut DeskApp,
    runtime: &ProductionRuntime,
    width: u16,
    height: u16,
) -> Result<(), DisputeDeskError> {
    crossterm::terminal::enable_raw_mode().map_err(|e| DisputeDeskError::Io(e.to_string()))?;
    let outcome = review_loop(app, runtime, width, height);
    let _ = crossterm::terminal::disable_raw_mode();
    outcome
}

fn review_loop(
    app: &mut DeskApp,
    runtime: &ProductionRuntime,
    width: u16,
    height: u16,
) -> Result<(), DisputeDeskError> {
    use crossterm::event::{read, Event, KeyCode, KeyEventKind};

    loop {
        let frame = tui::render_review(&app.view(), width, height);
        runtime.terminal.draw(&frame)?;

        let event = read().map_err(|e| DisputeDeskError::Io(e.to_string()))?;
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let KeyCode::Char(ch) = key.code else {
            continue;
        };
        match hotkeys::action_for_key(ch) {
            Some(HotkeyAction::Quit) => return Ok(()),
            Some(HotkeyAction::ToggleNegative) => app.toggle_negative(),
            Some(HotkeyAction::TogglePositive) => app.toggle_positive(),
            Some(HotkeyAction::ExpandAll) => app.toggle_expand_all(),
            Some(HotkeyAction::ShowDetails) => app.toggle_show_all_details(),
            Some(HotkeyAction::CursorDown) => app.apply(StateRequest::CursorDown),
            Some(HotkeyAction::CursorUp) => app.apply(StateRequest::CursorUp),
            Some(HotkeyAction::SaveDispute) => app.save_selected_dispute(),
            Some(HotkeyAction::ResetDispute) => app.reset_selected_dispute(),
            None => {}
        }
    }
}

pub fn render_help() -> String {
    let mut cmd = Cli::command();
    let mut buffer = Vec::new();
    cmd.write_long_help(&mut buffer).expect("write help to vec");
    String::from_utf8(buffer).expect("utf8")
}

#[cfg(test)]
mod tests {
    use super::render_help;

    #[test]
    fn help_covers_the_review_flags() {
        let help = render_help();
        assert!(help.contains("--report"));
        assert!(help.contains("--once"));
        assert!(help.contains("--summary-only"));
    }
}
