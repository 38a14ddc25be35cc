use crate::classifier;
use crate::commands::StateRequest;
use crate::row::{build_row_props, AccountRowProps, RowFlags};
use crate::saved_card::{saved_summary_text, SavedCardProps};
use crate::tradeline::TradelineRecord;
use crate::types::{SavedDisputes, Section, ViolationMap};

/// Section-local view state. Starts collapsed; the detail flag exists for
/// row pass-through but the negative panel exposes no control for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegativeSectionState {
    pub collapsed: bool,
    pub show_all_details: bool,
}

impl Default for NegativeSectionState {
    fn default() -> Self {
        Self {
            collapsed: true,
            show_all_details: false,
        }
    }
}

impl NegativeSectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One header interaction flips Collapsed<->Expanded exactly once and
    /// returns the request that mirrors the new state onto the parent-owned
    /// lazy-render gate.
    pub fn toggle(&mut self) -> StateRequest {
        self.collapsed = !self.collapsed;
        StateRequest::ShowNegativeAccounts(!self.collapsed)
    }

    /// The saved card's expand interaction: un-collapse and ask the parent
    /// to show the rows. While the section stays fully saved the card keeps
    /// rendering regardless; the flags matter once a dispute is reset.
    pub fn expand(&mut self) -> StateRequest {
        self.collapsed = false;
        StateRequest::ShowNegativeAccounts(true)
    }
}

#[derive(Debug, Clone)]
pub struct NegativeSectionInputs<'a> {
    pub accounts: &'a [TradelineRecord],
    pub violations: &'a ViolationMap,
    pub saved_disputes: &'a SavedDisputes,
    pub dispute_reasons: &'a [String],
    pub dispute_instructions: &'a [String],
    /// Parent-owned lazy-render gate (`showNegativeAccounts`).
    pub show_accounts: bool,
    pub expand_all: bool,
    pub ai_scan_completed: bool,
    pub bureaus: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeHeaderProps {
    pub account_count: usize,
    pub subtitle: String,
    pub count_caption: String,
    pub collapsed: bool,
}

#[derive(Debug, Clone)]
pub struct NegativeSectionPanel<'a> {
    pub header: NegativeHeaderProps,
    pub dispute_reasons: &'a [String],
    pub dispute_instructions: &'a [String],
    /// `Some` only when the section is expanded AND the parent gate is on.
    pub rows: Option<Vec<AccountRowProps<'a>>>,
}

#[derive(Debug, Clone)]
pub enum NegativeSectionView<'a> {
    /// Rendered exclusively once every account has a saved dispute,
    /// regardless of collapse state.
    SavedCard(SavedCardProps),
    Panel(NegativeSectionPanel<'a>),
}

pub fn build_negative_section<'a>(
    state: NegativeSectionState,
    inputs: &NegativeSectionInputs<'a>,
) -> NegativeSectionView<'a> {
    let all_saved = classifier::is_section_fully_saved(inputs.accounts, inputs.saved_disputes);
    if all_saved {
        let total_saved = classifier::count_saved(inputs.accounts, inputs.saved_disputes);
        return NegativeSectionView::SavedCard(SavedCardProps {
            section_name: Section::Negative.display_name().to_string(),
            success_message: "Negative Accounts – Disputes Saved".to_string(),
            summary_text: saved_summary_text(total_saved, inputs.bureaus),
        });
    }

    let count = inputs.accounts.len();
    let header = NegativeHeaderProps {
        account_count: count,
        subtitle: format!("{count} negative accounts need dispute review"),
        count_caption: format!("{count} accounts"),
        collapsed: state.collapsed,
    };

    let rows = (!state.collapsed && inputs.show_accounts).then(|| {
        inputs
            .accounts
            .iter()
            .enumerate()
            .map(|(index, record)| {
                build_row_props(
                    record,
                    index,
                    Section::Negative.as_str(),
                    inputs.violations,
                    inputs.saved_disputes,
                    RowFlags {
                        expand_all: inputs.expand_all,
                        show_all_details: state.show_all_details,
                        ai_scan_completed: inputs.ai_scan_completed,
                        is_first_in_connected_section: index == 0,
                        all_saved,
                    },
                )
            })
            .collect::<Vec<_>>()
    });

    NegativeSectionView::Panel(NegativeSectionPanel {
        header,
        dispute_reasons: inputs.dispute_reasons,
        dispute_instructions: inputs.dispute_instructions,
        rows,
    })
}
