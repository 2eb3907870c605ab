use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Filter applied to the inventory snapshot before grouping.
///
/// Empty strings mean "no constraint". Vendor matching is a
/// case-insensitive substring test against a record's `source`; the date
/// bounds are inclusive and compared lexicographically against the
/// zero-padded `YYYY-MM-DD` arrival date.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SummaryFilter {
    /// Vendor substring, matched against `source` lower-cased.
    pub vendor: String,
    /// Inclusive lower bound on `arrival_date`.
    pub start_date: String,
    /// Inclusive upper bound on `arrival_date`.
    pub end_date: String,
}

impl SummaryFilter {
    /// Build a filter from raw query-parameter values. The vendor term is
    /// trimmed and lower-cased once here so the per-record test is a plain
    /// substring check.
    pub fn new(vendor: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            vendor: vendor.trim().to_lowercase(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    /// True when no constraint is set at all.
    pub fn is_unfiltered(&self) -> bool {
        self.vendor.is_empty() && self.start_date.is_empty() && self.end_date.is_empty()
    }
}

/// One row of the summary table: a product name with its accumulated
/// quantity and monetary value across every matching record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SummaryRow {
    pub product_name: String,
    pub total_quantity: i64,
    /// Sum of `quantity * unit_price` per record, so records sharing a
    /// name may carry different unit prices.
    pub total_value: f64,
}

/// The full summary view payload.
///
/// The three chart vectors are index-aligned with `summary_rows`; the
/// presentation layer feeds them to its chart renderer without reshaping.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct InventorySummary {
    pub summary_rows: Vec<SummaryRow>,
    pub chart_labels: Vec<String>,
    pub chart_quantities: Vec<i64>,
    pub chart_values: Vec<f64>,
}

impl InventorySummary {
    /// Assemble the payload from sorted rows, deriving the chart vectors.
    pub fn from_rows(summary_rows: Vec<SummaryRow>) -> Self {
        let chart_labels = summary_rows.iter().map(|r| r.product_name.clone()).collect();
        let chart_quantities = summary_rows.iter().map(|r| r.total_quantity).collect();
        let chart_values = summary_rows.iter().map(|r| r.total_value).collect();
        Self {
            summary_rows,
            chart_labels,
            chart_quantities,
            chart_values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary_rows.is_empty()
    }
}
