//! Transport-layer types shared between the compute crate and the backend
//! handlers. These structs are the payload of the summary view; the backend
//! serializes them as-is and the presentation layer renders the table from
//! `summary_rows` and the charts from the three parallel vectors.

mod summary;

pub use summary::{InventorySummary, SummaryFilter, SummaryRow};
