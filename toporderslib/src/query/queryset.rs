//! Ranked set: the orders selected for the report.
//!
//! A RankedSet sits between the loaded table and the final table output.
//! It represents orders that have been:
//! - Sorted by `TotalProfit`, highest first, keeping file order among ties
//! - Truncated to the requested limit
//! - Projected to the report columns
//!
//! The data pipeline is:
//! 1. Raw Data (OrderTable)
//! 2. RankedSet (sorted, truncated, projected)
//! 3. ReportTable (formatted strings for display)

use tracing::debug;

use crate::data::orders::{OrderRecord, OrderTable};
use crate::data::profit::{NumericKind, Profit};

use super::options::RankOptions;

/// One selected order, projected to the report columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOrder {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Line of the order in the source file
    pub line: u64,
    pub order_id: String,
    pub customer_id: String,
    pub total_profit: Profit,
    pub order_date: String,
}

/// The most profitable orders of a table.
#[derive(Debug, Clone)]
pub struct RankedSet {
    /// Limit the set was built with
    pub limit: usize,
    /// Number of orders in the source table
    pub total_rows: usize,
    /// Type of the profit column, for formatting
    pub profit_kind: NumericKind,
    /// Selected orders, most profitable first
    pub items: Vec<RankedOrder>,
}

impl RankedSet {
    /// Rank a table's orders by profit and keep the first `options.limit`.
    pub fn from_table(table: &OrderTable, options: RankOptions) -> Self {
        let mut sorted: Vec<&OrderRecord> = table.records.iter().collect();

        // sort_by is stable, so equal profits stay in file order.
        // Missing profits compare lowest and so land last.
        sorted.sort_by(|a, b| b.total_profit.compare(&a.total_profit));

        let items: Vec<RankedOrder> = sorted
            .into_iter()
            .take(options.limit)
            .enumerate()
            .map(|(i, record)| project(i + 1, record))
            .collect();

        debug!(
            rows = table.len(),
            kept = items.len(),
            limit = options.limit,
            "ranked orders by profit"
        );

        RankedSet {
            limit: options.limit,
            total_rows: table.len(),
            profit_kind: table.profit_kind,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn project(rank: usize, record: &OrderRecord) -> RankedOrder {
    RankedOrder {
        rank,
        line: record.line,
        order_id: record.order_id.clone(),
        customer_id: record.customer_id.clone(),
        total_profit: record.total_profit,
        order_date: record.order_date.clone(),
    }
}
