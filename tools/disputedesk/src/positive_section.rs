use crate::classifier;
use crate::commands::StateRequest;
use crate::row::{build_row_props, AccountRowProps, RowFlags};
use crate::tradeline::TradelineRecord;
use crate::types::{SavedDisputes, Section, ViolationMap};

/// The positive panel owns no local collapse state: its body is gated
/// solely by the parent-owned show flag, and a header interaction simply
/// requests the inverse.
pub fn toggle_show(show_accounts: bool) -> StateRequest {
    StateRequest::ShowPositiveAccounts(!show_accounts)
}

pub fn toggle_expand_all(expand_all: bool) -> StateRequest {
    StateRequest::SetExpandAll(!expand_all)
}

pub fn toggle_show_all_details(show_all_details: bool) -> StateRequest {
    StateRequest::SetShowAllDetails(!show_all_details)
}

/// Accounts are expected in display order; the view pass runs
/// `classifier::sort_open_first` over the owned list before building.
#[derive(Debug, Clone)]
pub struct PositiveSectionInputs<'a> {
    pub accounts: &'a [TradelineRecord],
    pub violations: &'a ViolationMap,
    pub saved_disputes: &'a SavedDisputes,
    pub dispute_reasons: &'a [String],
    pub dispute_instructions: &'a [String],
    pub show_accounts: bool,
    pub expand_all: bool,
    pub show_all_details: bool,
    pub ai_scan_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositiveHeaderProps {
    pub account_count: usize,
    pub subtitle: String,
    pub count_caption: String,
    pub has_saved_disputes: bool,
    pub expanded: bool,
}

/// Labels for the two section-wide toggles, visible only with the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionControls {
    pub expand_all_label: &'static str,
    pub details_label: &'static str,
}

pub fn control_labels(expand_all: bool, show_all_details: bool) -> SectionControls {
    SectionControls {
        expand_all_label: if expand_all { "Collapse All" } else { "Expand All" },
        details_label: if show_all_details {
            "Hide Details"
        } else {
            "Show All Details"
        },
    }
}

#[derive(Debug, Clone)]
pub struct PositiveSectionPanel<'a> {
    pub header: PositiveHeaderProps,
    pub dispute_reasons: &'a [String],
    pub dispute_instructions: &'a [String],
    pub controls: Option<SectionControls>,
    pub rows: Option<Vec<AccountRowProps<'a>>>,
}

pub fn build_positive_section<'a>(
    inputs: &PositiveSectionInputs<'a>,
) -> PositiveSectionPanel<'a> {
    let count = inputs.accounts.len();
    let subtitle = if count > 0 {
        format!("{count} accounts in good standing helping your credit score")
    } else {
        "There are 0 accounts currently helping your credit score".to_string()
    };
    let header = PositiveHeaderProps {
        account_count: count,
        subtitle,
        count_caption: format!("{count} accounts"),
        has_saved_disputes: inputs
            .accounts
            .iter()
            .any(|record| classifier::has_saved_dispute(record, inputs.saved_disputes)),
        expanded: inputs.show_accounts,
    };

    let controls = inputs
        .show_accounts
        .then(|| control_labels(inputs.expand_all, inputs.show_all_details));

    let rows = inputs.show_accounts.then(|| {
        inputs
            .accounts
            .iter()
            .enumerate()
            .map(|(index, record)| {
                build_row_props(
                    record,
                    index,
                    Section::Positive.as_str(),
                    inputs.violations,
                    inputs.saved_disputes,
                    RowFlags {
                        expand_all: inputs.expand_all,
                        show_all_details: inputs.show_all_details,
                        ai_scan_completed: inputs.ai_scan_completed,
                        is_first_in_connected_section: false,
                        all_saved: false,
                    },
                )
            })
            .collect::<Vec<_>>()
    });

    PositiveSectionPanel {
        header,
        dispute_reasons: inputs.dispute_reasons,
        dispute_instructions: inputs.dispute_instructions,
        controls,
        rows,
    }
}
