use crate::types::DisputeRecord;

/// Upward state-transition requests. Sections never touch shared state:
/// an interaction returns a request and `DeskApp::apply` is the only
/// mutator.
#[derive(Debug, Clone, PartialEq)]
pub enum StateRequest {
    ShowNegativeAccounts(bool),
    ShowPositiveAccounts(bool),
    SetExpandAll(bool),
    SetShowAllDetails(bool),
    SaveDispute {
        account_id: String,
        dispute: DisputeRecord,
    },
    ResetDispute {
        account_id: String,
    },
    CursorUp,
    CursorDown,
}

impl StateRequest {
    /// Event name used for the JSONL log line this request produces.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ShowNegativeAccounts(_) | Self::ShowPositiveAccounts(_) => "section_toggled",
            Self::SetExpandAll(_) => "expand_all_toggled",
            Self::SetShowAllDetails(_) => "show_details_toggled",
            Self::SaveDispute { .. } => "dispute_saved",
            Self::ResetDispute { .. } => "dispute_reset",
            Self::CursorUp | Self::CursorDown => "cursor_moved",
        }
    }
}
