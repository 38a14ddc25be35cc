use crate::errors::DisputeDeskError;
use crate::logging::DEFAULT_DISK_BUDGET_BYTES;
use crate::runtime::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub report: ReportConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    pub path: Option<PathBuf>,
    /// Bureau names woven into the saved-card summary sentence.
    pub bureaus: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub max_payload_bytes: usize,
    pub budget_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report: ReportConfig {
                path: None,
                bureaus: vec![
                    "TransUnion".to_string(),
                    "Equifax".to_string(),
                    "Experian".to_string(),
                ],
            },
            display: DisplayConfig {
                width: 120,
                height: 36,
            },
            logging: LoggingConfig {
                enabled: true,
                path: PathBuf::from(".cache/disputedesk/events.jsonl"),
                max_payload_bytes: 4096,
                budget_bytes: DEFAULT_DISK_BUDGET_BYTES,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialAppConfig {
    report: Option<PartialReportConfig>,
    display: Option<PartialDisplayConfig>,
    logging: Option<PartialLoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialReportConfig {
    path: Option<PathBuf>,
    bureaus: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialDisplayConfig {
    width: Option<u16>,
    height: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialLoggingConfig {
    enabled: Option<bool>,
    path: Option<PathBuf>,
    max_payload_bytes: Option<usize>,
    budget_bytes: Option<u64>,
}

pub fn load_config(
    overrides: &CliOverrides,
    fs: &dyn FileSystem,
) -> Result<AppConfig, DisputeDeskError> {
    let mut cfg = AppConfig::default();

    if let Some(path) = &overrides.config_path {
        let file_contents = fs.read_to_string(path)?;
        let partial: PartialAppConfig = toml::from_str(&file_contents)
            .map_err(|e| DisputeDeskError::ConfigParse(e.to_string()))?;
        merge_partial_config(&mut cfg, partial);
    }

    apply_cli_overrides(&mut cfg, overrides);
    validate_config(&cfg)?;
    Ok(cfg)
}

fn merge_partial_config(cfg: &mut AppConfig, partial: PartialAppConfig) {
    if let Some(report) = partial.report {
        if let Some(path) = report.path {
            cfg.report.path = Some(path);
        }
        if let Some(bureaus) = report.bureaus {
            cfg.report.bureaus = bureaus;
        }
    }

    if let Some(display) = partial.display {
        if let Some(width) = display.width {
            cfg.display.width = width;
        }
        if let Some(height) = display.height {
            cfg.display.height = height;
        }
    }

    if let Some(logging) = partial.logging {
        if let Some(enabled) = logging.enabled {
            cfg.logging.enabled = enabled;
        }
        if let Some(path) = logging.path {
            cfg.logging.path = path;
        }
        if let Some(max_payload_bytes) = logging.max_payload_bytes {
            cfg.logging.max_payload_bytes = max_payload_bytes;
        }
        if let Some(budget_bytes) = logging.budget_bytes {
            cfg.logging.budget_bytes = budget_bytes;
        }
    }
}

fn apply_cli_overrides(cfg: &mut AppConfig, overrides: &CliOverrides) {
    if let Some(report_path) = &overrides.report_path {
        cfg.report.path = Some(report_path.clone());
    }
    if let Some(width) = overrides.width {
        cfg.display.width = width;
    }
    if let Some(height) = overrides.height {
        cfg.display.height = height;
    }
}

fn validate_config(cfg: &AppConfig) -> Result<(), DisputeDeskError> {
    if cfg.display.width < 40 || cfg.display.height < 10 {
        return Err(DisputeDeskError::InvalidConfig(format!(
            "display {}x{} is below the 40x10 minimum",
            cfg.display.width, cfg.display.height
        )));
    }
    if cfg.report.bureaus.is_empty() {
        return Err(DisputeDeskError::InvalidConfig(
            "report.bureaus must name at least one bureau".to_string(),
        ));
    }
    if cfg.logging.max_payload_bytes == 0 {
        return Err(DisputeDeskError::InvalidConfig(
            "logging.max_payload_bytes must be positive".to_string(),
        ));
    }
    Ok(())
}
