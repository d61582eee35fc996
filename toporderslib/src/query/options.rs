//! Options for ranking orders.

use serde::{Deserialize, Serialize};

/// Number of orders reported when no limit is given.
pub const DEFAULT_LIMIT: usize = 3;

/// Ranking configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Maximum number of orders to keep
    pub limit: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RankOptions {
    /// Create options with the default limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the number of orders to keep
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
