//! Query processing: rank, truncate, and project orders.
//!
//! This module handles the second stage of the pipeline - turning a loaded
//! order table into the set of orders to report. It provides:
//!
//! - **Options**: Configuration for ranking (`RankOptions`)
//! - **RankedSet**: Selected orders ready for presentation
//!
//! ## Example
//!
//! ```rust,ignore
//! use toporderslib::query::{RankOptions, RankedSet};
//!
//! let ranked = RankedSet::from_table(&table, RankOptions::new().limit(3));
//! ```

pub mod options;
pub mod queryset;

pub use options::{RankOptions, DEFAULT_LIMIT};
pub use queryset::{RankedOrder, RankedSet};
