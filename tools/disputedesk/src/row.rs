use crate::classifier;
use crate::tradeline::TradelineRecord;
use crate::types::{SavedDisputes, ViolationMap};

const NO_VIOLATIONS: &[String] = &[];

/// Everything the row renderer needs for one tradeline. Built once per
/// render pass; section-wide values (`all_saved`, the taxonomies riding on
/// the panel) are computed by the section builder and passed in by value.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRowProps<'a> {
    /// Reconciliation key: `<section>-<resolved id>`, falling back to the
    /// positional index when no identifier is present. The index fallback
    /// breaks stable identity under reordering; that fragility comes from
    /// the upstream data and is kept as-is.
    pub row_key: String,
    pub account_id: Option<&'a str>,
    pub record: &'a TradelineRecord,
    /// Violations are looked up by `@CreditLiabilityID` alone, NOT by the
    /// three-key resolution chain used for dispute matching. A record keyed
    /// only by account number always sees an empty list here.
    pub violations: &'a [String],
    pub saved: bool,
    pub closed: bool,
    pub expand_all: bool,
    pub show_all_details: bool,
    pub ai_scan_completed: bool,
    pub is_first_in_connected_section: bool,
    pub all_saved: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RowFlags {
    pub expand_all: bool,
    pub show_all_details: bool,
    pub ai_scan_completed: bool,
    pub is_first_in_connected_section: bool,
    pub all_saved: bool,
}

pub fn build_row_props<'a>(
    record: &'a TradelineRecord,
    index: usize,
    section_prefix: &str,
    violations: &'a ViolationMap,
    saved_disputes: &SavedDisputes,
    flags: RowFlags,
) -> AccountRowProps<'a> {
    let account_id = classifier::resolve_account_id(record);
    let row_key = match account_id {
        Some(id) => format!("{section_prefix}-{id}"),
        None => format!("{section_prefix}-{index}"),
    };
    let violations = record
        .credit_liability_id
        .as_deref()
        .and_then(|id| violations.get(id))
        .map(Vec::as_slice)
        .unwrap_or(NO_VIOLATIONS);

    AccountRowProps {
        row_key,
        account_id,
        record,
        violations,
        saved: classifier::has_saved_dispute(record, saved_disputes),
        closed: classifier::is_closed(record),
        expand_all: flags.expand_all,
        show_all_details: flags.show_all_details,
        ai_scan_completed: flags.ai_scan_completed,
        is_first_in_connected_section: flags.is_first_in_connected_section,
        all_saved: flags.all_saved,
    }
}
