//! Inventory summary aggregation.
//!
//! This is a pure function over a snapshot of product rows: the handler
//! fetches the whole table, the filter/group/sum pipeline runs in memory,
//! and the sorted result goes straight to the presentation layer. The
//! snapshot is owned by nobody but the caller; no state lives here.

use std::collections::BTreeMap;

use common::{InventorySummary, SummaryFilter, SummaryRow};
use model::entities::product;
use tracing::debug;

/// True when the record survives the vendor and date constraints.
///
/// An empty constraint never excludes anything. The date comparison is
/// lexicographic on the `YYYY-MM-DD` string, which orders correctly for
/// zero-padded ISO dates.
fn matches(record: &product::Model, filter: &SummaryFilter) -> bool {
    if !filter.vendor.is_empty() && !record.source.to_lowercase().contains(&filter.vendor) {
        return false;
    }
    if !filter.start_date.is_empty() && record.arrival_date < filter.start_date {
        return false;
    }
    if !filter.end_date.is_empty() && record.arrival_date > filter.end_date {
        return false;
    }
    true
}

/// Filter the snapshot, group the survivors by exact product name, and
/// accumulate per-group totals.
///
/// `total_value` is the sum of `quantity * unit_price` per record, never
/// `total_quantity * price`, so records that share a name but arrived at
/// different unit prices are valued correctly. Rows come back sorted
/// ascending by product name; an empty snapshot yields an empty payload.
pub fn summarize(records: &[product::Model], filter: &SummaryFilter) -> InventorySummary {
    // BTreeMap keeps the groups in the output order for free.
    let mut groups: BTreeMap<&str, (i64, f64)> = BTreeMap::new();

    let mut kept = 0usize;
    for record in records.iter().filter(|r| matches(r, filter)) {
        kept += 1;
        let entry = groups.entry(record.product_name.as_str()).or_insert((0, 0.0));
        entry.0 += record.quantity;
        entry.1 += record.quantity as f64 * record.unit_price;
    }

    debug!(
        total = records.len(),
        kept,
        groups = groups.len(),
        "summarized inventory snapshot"
    );

    let rows = groups
        .into_iter()
        .map(|(name, (total_quantity, total_value))| SummaryRow {
            product_name: name.to_string(),
            total_quantity,
            total_value,
        })
        .collect();

    InventorySummary::from_rows(rows)
}
