use crate::classifier;
use crate::commands::StateRequest;
use crate::config::AppConfig;
use crate::logging::{JsonlLogger, LogEvent};
use crate::negative_section::{
    build_negative_section, NegativeSectionInputs, NegativeSectionState, NegativeSectionView,
};
use crate::positive_section::{build_positive_section, PositiveSectionInputs, PositiveSectionPanel};
use crate::report::CreditReportInput;
use crate::row::AccountRowProps;
use crate::types::{DisputeEntry, DisputeRecord};
use serde_json::json;

/// Single owner of the canonical dispute-session state. Sections and the
/// renderer read snapshots through `view()`; every mutation funnels through
/// `apply(StateRequest)`.
pub struct DeskApp {
    report: CreditReportInput,
    bureaus: Vec<String>,
    negative_state: NegativeSectionState,
    show_negative: bool,
    show_positive: bool,
    expand_all: bool,
    show_all_details: bool,
    cursor: usize,
    logger: Option<JsonlLogger>,
}

/// Both section view models, built in one pass so section-wide aggregates
/// are computed once and copied down.
pub struct DeskView<'a> {
    pub negative: NegativeSectionView<'a>,
    pub positive: PositiveSectionPanel<'a>,
    pub cursor: usize,
}

impl<'a> DeskView<'a> {
    pub fn negative_rows(&self) -> &[AccountRowProps<'a>] {
        match &self.negative {
            NegativeSectionView::Panel(panel) => panel.rows.as_deref().unwrap_or(&[]),
            NegativeSectionView::SavedCard(_) => &[],
        }
    }

    pub fn positive_rows(&self) -> &[AccountRowProps<'a>] {
        self.positive.rows.as_deref().unwrap_or(&[])
    }

    pub fn visible_row_count(&self) -> usize {
        self.negative_rows().len() + self.positive_rows().len()
    }

    /// Row under a flattened cursor: negative rows first, then positive.
    pub fn row_at(&self, index: usize) -> Option<&AccountRowProps<'a>> {
        let negative = self.negative_rows();
        if index < negative.len() {
            return negative.get(index);
        }
        self.positive_rows().get(index - negative.len())
    }
}

/// Owned snapshot of the row under the cursor, for dispute hotkeys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedRow {
    pub account_id: String,
    pub violations: Vec<String>,
}

impl DeskApp {
    pub fn new(report: CreditReportInput, cfg: &AppConfig) -> Self {
        let logger = cfg.logging.enabled.then(|| {
            let mut logger = JsonlLogger::new(&cfg.logging.path);
            logger.max_payload_bytes = cfg.logging.max_payload_bytes;
            logger.budget_bytes = cfg.logging.budget_bytes;
            logger
        });
        Self {
            report,
            bureaus: cfg.report.bureaus.clone(),
            negative_state: NegativeSectionState::new(),
            show_negative: false,
            show_positive: false,
            expand_all: false,
            show_all_details: false,
            cursor: 0,
            logger,
        }
    }

    pub fn report(&self) -> &CreditReportInput {
        &self.report
    }

    pub fn show_negative(&self) -> bool {
        self.show_negative
    }

    pub fn show_positive(&self) -> bool {
        self.show_positive
    }

    pub fn expand_all(&self) -> bool {
        self.expand_all
    }

    pub fn show_all_details(&self) -> bool {
        self.show_all_details
    }

    pub fn negative_state(&self) -> NegativeSectionState {
        self.negative_state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The only mutation path. Requests are logged before they land so the
    /// event stream reflects operator intent even if a lookup later misses.
    pub fn apply(&mut self, request: StateRequest) {
        self.log_request(&request);
        match request {
            StateRequest::ShowNegativeAccounts(show) => self.show_negative = show,
            StateRequest::ShowPositiveAccounts(show) => self.show_positive = show,
            StateRequest::SetExpandAll(expand) => self.expand_all = expand,
            StateRequest::SetShowAllDetails(show) => self.show_all_details = show,
            StateRequest::SaveDispute {
                account_id,
                dispute,
            } => self.on_dispute_saved(&account_id, dispute),
            StateRequest::ResetDispute { account_id } => self.on_dispute_reset(&account_id),
            StateRequest::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            StateRequest::CursorDown => {
                let last = self.visible_row_count().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
        }
    }

    pub fn on_dispute_saved(&mut self, account_id: &str, dispute: DisputeRecord) {
        self.report
            .saved_disputes
            .insert(account_id.to_string(), DisputeEntry::Saved(dispute));
    }

    pub fn on_dispute_reset(&mut self, account_id: &str) {
        self.report.saved_disputes.remove(account_id);
    }

    /// Header interaction for the negative section. While fully saved the
    /// compact card is showing, so the interaction is the card's expand;
    /// otherwise it is the collapse toggle.
    pub fn toggle_negative(&mut self) {
        let fully_saved = classifier::is_section_fully_saved(
            &self.report.negative_accounts,
            &self.report.saved_disputes,
        );
        let request = if fully_saved {
            self.negative_state.expand()
        } else {
            self.negative_state.toggle()
        };
        self.apply(request);
    }

    pub fn toggle_positive(&mut self) {
        let request = crate::positive_section::toggle_show(self.show_positive);
        self.apply(request);
    }

    pub fn toggle_expand_all(&mut self) {
        let request = crate::positive_section::toggle_expand_all(self.expand_all);
        self.apply(request);
    }

    pub fn toggle_show_all_details(&mut self) {
        let request = crate::positive_section::toggle_show_all_details(self.show_all_details);
        self.apply(request);
    }

    /// Build both section views for one render pass. Positive accounts are
    /// reordered open-first in place before the snapshot is taken.
    pub fn view(&mut self) -> DeskView<'_> {
        classifier::sort_open_first(&mut self.report.positive_accounts);

        let negative = build_negative_section(
            self.negative_state,
            &NegativeSectionInputs {
                accounts: &self.report.negative_accounts,
                violations: &self.report.ai_violations,
                saved_disputes: &self.report.saved_disputes,
                dispute_reasons: &self.report.dispute_reasons,
                dispute_instructions: &self.report.dispute_instructions,
                show_accounts: self.show_negative,
                expand_all: self.expand_all,
                ai_scan_completed: self.report.ai_scan_completed,
                bureaus: &self.bureaus,
            },
        );

        let positive = build_positive_section(&PositiveSectionInputs {
            accounts: &self.report.positive_accounts,
            violations: &self.report.ai_violations,
            saved_disputes: &self.report.saved_disputes,
            dispute_reasons: &self.report.dispute_reasons,
            dispute_instructions: &self.report.dispute_instructions,
            show_accounts: self.show_positive,
            expand_all: self.expand_all,
            show_all_details: self.show_all_details,
            ai_scan_completed: self.report.ai_scan_completed,
        });

        DeskView {
            negative,
            positive,
            cursor: self.cursor,
        }
    }

    /// Snapshot of the row under the cursor. Rows without a resolvable
    /// identifier cannot be matched against the saved-dispute map, so they
    /// are not a dispute target.
    pub fn selected_row(&mut self) -> Option<SelectedRow> {
        let cursor = self.cursor;
        let view = self.view();
        let row = view.row_at(cursor)?;
        let account_id = row.account_id?.to_string();
        let violations = row.violations.to_vec();
        Some(SelectedRow {
            account_id,
            violations,
        })
    }

    /// Record a dispute for the selected row from the first taxonomy
    /// entries plus the row's scanned violations. The row renderer owns the
    /// richer reason/instruction pickers; this is the session default.
    pub fn save_selected_dispute(&mut self) {
        let Some(selected) = self.selected_row() else {
            return;
        };
        let dispute = self.default_dispute(selected.violations);
        self.apply(StateRequest::SaveDispute {
            account_id: selected.account_id,
            dispute,
        });
    }

    pub fn reset_selected_dispute(&mut self) {
        let Some(selected) = self.selected_row() else {
            return;
        };
        self.apply(StateRequest::ResetDispute {
            account_id: selected.account_id,
        });
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let negative_total = self.report.negative_accounts.len();
        let negative_saved =
            classifier::count_saved(&self.report.negative_accounts, &self.report.saved_disputes);
        let fully_saved = classifier::is_section_fully_saved(
            &self.report.negative_accounts,
            &self.report.saved_disputes,
        );
        let positive_total = self.report.positive_accounts.len();
        let closed = self
            .report
            .positive_accounts
            .iter()
            .filter(|record| classifier::is_closed(record))
            .count();
        vec![
            format!(
                "negative accounts: total={negative_total} saved={negative_saved} fully_saved={fully_saved}"
            ),
            format!(
                "positive accounts: total={positive_total} open={} closed={closed}",
                positive_total - closed
            ),
        ]
    }

    fn visible_row_count(&mut self) -> usize {
        self.view().visible_row_count()
    }

    fn default_dispute(&self, violations: Vec<String>) -> DisputeRecord {
        DisputeRecord {
            reason: self
                .report
                .dispute_reasons
                .first()
                .cloned()
                .unwrap_or_else(|| "Inaccurate reporting".to_string()),
            instruction: self
                .report
                .dispute_instructions
                .first()
                .cloned()
                .unwrap_or_else(|| "Please correct or delete this account".to_string()),
            violations: (!violations.is_empty()).then_some(violations),
        }
    }

    fn log_request(&self, request: &StateRequest) {
        let Some(logger) = &self.logger else {
            return;
        };
        let payload = match request {
            StateRequest::ShowNegativeAccounts(show) => {
                json!({"section": "negative", "show": show})
            }
            StateRequest::ShowPositiveAccounts(show) => {
                json!({"section": "positive", "show": show})
            }
            StateRequest::SetExpandAll(expand) => json!({"expand_all": expand}),
            StateRequest::SetShowAllDetails(show) => json!({"show_all_details": show}),
            StateRequest::SaveDispute {
                account_id,
                dispute,
            } => json!({
                "account_id": account_id,
                "reason": dispute.reason,
                "instruction": dispute.instruction,
            }),
            StateRequest::ResetDispute { account_id } => json!({"account_id": account_id}),
            // Cursor motion is not worth a log line.
            StateRequest::CursorUp | StateRequest::CursorDown => return,
        };
        let _ = logger.append(&LogEvent {
            level: "info",
            event_type: request.event_type(),
            payload,
        });
    }
}
