//! Order table loading.
//!
//! Reads a CSV file with a header row into an [`OrderTable`]. The four
//! report columns are located by header name, so extra columns and any
//! column order are accepted. `TotalProfit` is parsed into [`Profit`]
//! values; every other field is kept as the cell's text.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::data::profit::{NumericKind, Profit};
use crate::error::TopOrdersError;
use crate::Result;

pub const ORDER_ID: &str = "OrderID";
pub const CUSTOMER_ID: &str = "CustomerID";
pub const TOTAL_PROFIT: &str = "TotalProfit";
pub const ORDER_DATE: &str = "OrderDate";

/// Columns every input file must have, in report order.
pub const REQUIRED_COLUMNS: [&str; 4] = [ORDER_ID, CUSTOMER_ID, TOTAL_PROFIT, ORDER_DATE];

/// One row of the order table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    /// 1-based line of this record in the source file (the header is line 1)
    pub line: u64,
    pub order_id: String,
    pub customer_id: String,
    pub total_profit: Profit,
    pub order_date: String,
}

/// An order table, in file order.
#[derive(Debug, Clone, Default)]
pub struct OrderTable {
    /// Header row as read from the file
    pub columns: Vec<String>,
    /// Inferred type of the `TotalProfit` column
    pub profit_kind: NumericKind,
    /// Records in file order
    pub records: Vec<OrderRecord>,
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    order_id: usize,
    customer_id: usize,
    total_profit: usize,
    order_date: usize,
}

impl ColumnIndex {
    fn locate(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| TopOrdersError::MissingColumn(name.to_string()))
        };

        Ok(ColumnIndex {
            order_id: find(ORDER_ID)?,
            customer_id: find(CUSTOMER_ID)?,
            total_profit: find(TOTAL_PROFIT)?,
            order_date: find(ORDER_DATE)?,
        })
    }
}

impl OrderTable {
    /// Read an order table from CSV text.
    ///
    /// The first row is the header. Rows must all have the header's length.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(rdr);

        let headers = reader.headers()?.clone();
        let index = ColumnIndex::locate(&headers)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let raw_profit = &row[index.total_profit];
            let total_profit =
                Profit::parse(raw_profit).ok_or_else(|| TopOrdersError::NonNumeric {
                    column: TOTAL_PROFIT.to_string(),
                    line,
                    value: raw_profit.to_string(),
                })?;

            records.push(OrderRecord {
                line,
                order_id: row[index.order_id].to_string(),
                customer_id: row[index.customer_id].to_string(),
                total_profit,
                order_date: row[index.order_date].to_string(),
            });
        }

        let profit_kind = NumericKind::infer(records.iter().map(|r| &r.total_profit));
        debug!(
            rows = records.len(),
            missing = records.iter().filter(|r| r.total_profit.is_missing()).count(),
            ?profit_kind,
            "loaded order table"
        );

        Ok(OrderTable {
            columns: headers.iter().map(str::to_string).collect(),
            profit_kind,
            records,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load an order table from a CSV file.
pub fn load_orders(path: impl AsRef<Path>) -> Result<OrderTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TopOrdersError::PathNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| TopOrdersError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading orders");

    OrderTable::from_reader(file)
}
