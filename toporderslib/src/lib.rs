//! # toporderslib
//!
//! Load a CSV table of sales orders and report the most profitable ones.
//!
//! ## Overview
//!
//! The library is a small pipeline with one module per stage:
//!
//! - **data**: Read the CSV into an immutable [`OrderTable`]
//! - **query**: Rank orders by `TotalProfit` (highest first, stable among ties),
//!   keep the first N and project them to the report columns ([`RankedSet`])
//! - **output**: Format the ranked orders as display strings ([`ReportTable`])
//!
//! Input files must have a header row naming at least `OrderID`, `CustomerID`,
//! `TotalProfit` and `OrderDate`. Other columns are ignored.
//!
//! ## Features
//!
//! - **Typed profits**: `TotalProfit` is read as integers when possible, floats
//!   otherwise; empty cells are treated as missing and rank last
//! - **Stable ranking**: Orders with equal profit keep their file order
//! - **Pure data types**: Returns structured data, no I/O beyond reading the input
//!
//! ## Example
//!
//! ```rust
//! use toporderslib::{top_orders, RankOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("Order.csv");
//! fs::write(&path, "\
//! OrderID,CustomerID,TotalProfit,OrderDate
//! O1,C1,100,2020-01-01
//! O2,C2,500,2020-01-02
//! O3,C3,300,2020-01-03
//! O4,C4,50,2020-01-04
//! ").unwrap();
//!
//! let report = top_orders(&path, RankOptions::new()).unwrap();
//! assert_eq!(report.title, "Top 3 Most Profitable Orders:");
//! assert_eq!(report.rows.len(), 3);
//! assert_eq!(report.rows[0].values, vec!["O2", "C2", "500", "2020-01-02"]);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;

use std::path::Path;

pub use data::{load_orders, NumericKind, OrderRecord, OrderTable, Profit, REQUIRED_COLUMNS};
pub use error::{ErrorKind, TopOrdersError};
pub use output::{ReportTable, TableRow};
pub use query::{RankOptions, RankedOrder, RankedSet, DEFAULT_LIMIT};

/// Result type for toporderslib operations
pub type Result<T> = std::result::Result<T, TopOrdersError>;

/// Load a CSV file and build the report of its most profitable orders.
pub fn top_orders(path: impl AsRef<Path>, options: RankOptions) -> Result<ReportTable> {
    let table = load_orders(path)?;
    let ranked = RankedSet::from_table(&table, options);
    Ok(ReportTable::from_ranked(&ranked))
}
