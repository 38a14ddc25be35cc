use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Negative,
    Positive,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Negative => "Negative Accounts",
            Self::Positive => "Positive & Closed Accounts",
        }
    }
}

/// Structured dispute payload as submitted by a row's dispute controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeRecord {
    pub reason: String,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<String>>,
}

/// One entry in the saved-dispute map. Legacy entries are bare booleans;
/// newer entries carry the full dispute record. A `Flag(false)` entry does
/// not count as saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisputeEntry {
    Flag(bool),
    Saved(DisputeRecord),
}

impl DisputeEntry {
    pub fn is_saved(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Saved(_) => true,
        }
    }
}

/// Account id -> dispute entry. Owned by `DeskApp`; everything else reads a
/// snapshot and requests mutations through `StateRequest`.
pub type SavedDisputes = BTreeMap<String, DisputeEntry>;

/// Account id -> ordered violation descriptions from the AI scan.
pub type ViolationMap = BTreeMap<String, Vec<String>>;
