use crate::errors::DisputeDeskError;
use crate::runtime::FileSystem;
use crate::tradeline::TradelineRecord;
use crate::types::{SavedDisputes, ViolationMap};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The already-parsed credit report handed to this tool: the two account
/// groupings, the AI scan output, previously saved disputes, and the
/// dispute taxonomies. Only the account arrays are required; everything
/// else defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditReportInput {
    pub negative_accounts: Vec<TradelineRecord>,
    pub positive_accounts: Vec<TradelineRecord>,
    pub ai_violations: ViolationMap,
    pub saved_disputes: SavedDisputes,
    pub dispute_reasons: Vec<String>,
    pub dispute_instructions: Vec<String>,
    pub ai_scan_completed: bool,
}

pub fn parse_report(input: &str) -> Result<CreditReportInput, DisputeDeskError> {
    serde_json::from_str(input).map_err(|e| DisputeDeskError::ReportParse(e.to_string()))
}

pub fn load_report(
    fs: &dyn FileSystem,
    path: &Path,
) -> Result<CreditReportInput, DisputeDeskError> {
    let contents = fs.read_to_string(path)?;
    parse_report(&contents)
}
