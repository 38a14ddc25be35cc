use crate::tradeline::TradelineRecord;
use crate::types::{DisputeEntry, SavedDisputes};
use std::cmp::Ordering;

/// Closed-account detection, first match wins. Absent fields never match.
pub fn is_closed(record: &TradelineRecord) -> bool {
    if let Some(status) = non_empty(record.account_status.as_deref()) {
        let lowered = status.to_lowercase();
        if lowered.contains("closed") || lowered.contains("paid") || status == "C" {
            return true;
        }
    }

    if non_empty(record.account_closed_date.as_deref()).is_some() {
        return true;
    }

    matches!(
        record
            .current_rating
            .as_ref()
            .and_then(|rating| rating.code.as_deref()),
        Some("C")
    )
}

/// Canonical identifier for a record: credit-liability id, then account
/// number, then account identifier. `None` means the record cannot be
/// matched against the saved-dispute map.
pub fn resolve_account_id(record: &TradelineRecord) -> Option<&str> {
    non_empty(record.credit_liability_id.as_deref())
        .or_else(|| non_empty(record.account_number.as_deref()))
        .or_else(|| non_empty(record.account_identifier.as_deref()))
}

/// Partition open accounts before closed ones. The comparator answers
/// `Equal` for same-classification pairs, so within-partition order is
/// whatever the host sort does with ties.
pub fn sort_open_first(records: &mut [TradelineRecord]) {
    records.sort_by(|a, b| match (is_closed(a), is_closed(b)) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    });
}

pub fn has_saved_dispute(record: &TradelineRecord, saved: &SavedDisputes) -> bool {
    resolve_account_id(record)
        .and_then(|id| saved.get(id))
        .map(DisputeEntry::is_saved)
        .unwrap_or(false)
}

pub fn count_saved(records: &[TradelineRecord], saved: &SavedDisputes) -> usize {
    records
        .iter()
        .filter(|record| has_saved_dispute(record, saved))
        .count()
}

/// True iff the section is non-empty and every record has a saved dispute.
/// An empty section is deliberately NOT fully saved; this gates the compact
/// saved card, which must never replace an empty list.
pub fn is_section_fully_saved(records: &[TradelineRecord], saved: &SavedDisputes) -> bool {
    !records.is_empty()
        && records
            .iter()
            .all(|record| has_saved_dispute(record, saved))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
