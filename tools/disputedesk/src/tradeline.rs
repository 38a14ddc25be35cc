use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One tradeline as it arrives from the upstream bureau parser. The `@`-prefixed
/// key names are the external data contract; everything this tool does not
/// pattern-match against is carried opaquely in `extra` so records round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradelineRecord {
    #[serde(
        rename = "@CreditLiabilityID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_liability_id: Option<String>,
    #[serde(
        rename = "@_AccountNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_number: Option<String>,
    #[serde(
        rename = "@_AccountIdentifier",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_identifier: Option<String>,
    #[serde(
        rename = "@_AccountStatusType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_status: Option<String>,
    #[serde(
        rename = "@_AccountClosedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_closed_date: Option<String>,
    #[serde(rename = "_CREDITOR", default, skip_serializing_if = "Option::is_none")]
    pub creditor: Option<Creditor>,
    #[serde(
        rename = "_CURRENT_RATING",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_rating: Option<CurrentRating>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Creditor {
    #[serde(rename = "@_Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentRating {
    #[serde(rename = "@_Code", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "@_Type", default, skip_serializing_if = "Option::is_none")]
    pub rating_type: Option<String>,
}

impl TradelineRecord {
    /// Display label for a row: creditor name when the parser surfaced one,
    /// otherwise the strongest identifier the record carries.
    pub fn display_label(&self) -> Option<&str> {
        self.creditor
            .as_ref()
            .and_then(|creditor| creditor.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}
