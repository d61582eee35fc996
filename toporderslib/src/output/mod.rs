//! Output formatting: present ranked orders as a table.
//!
//! This module handles the third and final stage of the pipeline -
//! formatting ranked orders for display. It provides:
//!
//! - **ReportTable**: Table-ready data structure with title, headers, and rows
//! - **TableRow**: Individual row of formatted values
//!
//! ReportTable is a pure presentation layer - it only formats data into
//! strings. All sorting and selection happens in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use toporderslib::output::ReportTable;
//!
//! let table = ReportTable::from_ranked(&ranked);
//! // table.title: "Top 3 Most Profitable Orders:"
//! // table.headers: ["OrderID", "CustomerID", "TotalProfit", "OrderDate"]
//! // table.rows: [TableRow { values: ["O2", "C2", "500", "2020-01-02"] }]
//! ```

pub mod table;

pub use table::{ReportTable, TableRow};
