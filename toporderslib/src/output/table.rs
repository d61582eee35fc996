//! Table-ready data structures for the report.
//!
//! This module provides `ReportTable`, a presentation-ready data structure
//! that can be directly rendered as text or serialized to JSON.
//!
//! The data flow is:
//! 1. Raw Data (OrderTable)
//! 2. RankedSet (sorted, truncated, projected)
//! 3. ReportTable (formatted strings for display)
//!
//! ReportTable is a pure presentation layer - it only formats data, no
//! sorting or selection logic. All computation happens in the RankedSet.

use serde::{Deserialize, Serialize};

use crate::data::orders::REQUIRED_COLUMNS;
use crate::data::profit::{format_profits, Profit};
use crate::query::queryset::RankedSet;

/// A single data row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell values, one per header (as strings, ready for display)
    pub values: Vec<String>,
}

/// Table-ready report data.
///
/// This is the final data structure before presentation. Renderers
/// iterate over title/headers/rows - no computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Heading line, e.g. "Top 3 Most Profitable Orders:"
    pub title: String,
    /// Column headers, in report order
    pub headers: Vec<String>,
    /// Data rows, most profitable first
    pub rows: Vec<TableRow>,
}

impl ReportTable {
    /// Create a ReportTable from a RankedSet.
    ///
    /// The RankedSet already holds the sorted and truncated orders.
    /// This method just formats them into displayable strings.
    pub fn from_ranked(set: &RankedSet) -> Self {
        let profits: Vec<Profit> = set.items.iter().map(|o| o.total_profit).collect();
        let formatted = format_profits(&profits, set.profit_kind);

        let rows = set
            .items
            .iter()
            .zip(formatted)
            .map(|(order, profit)| TableRow {
                values: vec![
                    order.order_id.clone(),
                    order.customer_id.clone(),
                    profit,
                    order.order_date.clone(),
                ],
            })
            .collect();

        ReportTable {
            title: build_title(set.limit),
            headers: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }
}

fn build_title(limit: usize) -> String {
    format!("Top {} Most Profitable Orders:", limit)
}
