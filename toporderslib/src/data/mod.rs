//! Data collection: read the order table.
//!
//! This module handles the first stage of the pipeline - reading a CSV file
//! into memory. It provides:
//!
//! - **Loading**: `load_orders` / `OrderTable::from_reader`
//! - **Values**: `Profit` cells and the inferred `NumericKind` of the column
//!
//! ## Example
//!
//! ```rust,ignore
//! use toporderslib::data::load_orders;
//!
//! let table = load_orders("data/Order.csv")?;
//! println!("{} orders", table.len());
//! ```

pub mod orders;
pub mod profit;

pub use orders::{
    load_orders, OrderRecord, OrderTable, CUSTOMER_ID, ORDER_DATE, ORDER_ID, REQUIRED_COLUMNS,
    TOTAL_PROFIT,
};
pub use profit::{format_profits, NumericKind, Profit};
