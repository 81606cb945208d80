//! Pagination state supplied by the caller

use serde::{Deserialize, Serialize};

/// Position within a paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// 1-based page being displayed
    pub current_page: u64,
    /// Number of records across all pages
    pub total_items: u64,
    /// Records per page; zero is rejected by the calculator
    pub page_size: u64,
}

impl PaginationState {
    pub fn new(current_page: u64, total_items: u64, page_size: u64) -> Self {
        Self {
            current_page,
            total_items,
            page_size,
        }
    }

    /// Index of the first record on the current page (0-based)
    pub fn offset(&self) -> u64 {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
    }
}
