//! Worker-list pagination model
//!
//! The worker modal pages through `/api/wallet/<wallet>/workers`, which
//! answers `{ wallet, total, active, workers: [{ name, last_seen }] }`.
//! The endpoint clamps `limit` to [1, 200] and floors `offset` at 0, so
//! the query type applies the same bounds before a request goes out.

use serde::{Deserialize, Serialize};

/// Default page size
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Largest page the endpoint will serve
pub const MAX_PAGE_SIZE: u32 = 200;

/// One worker row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkerEntry {
    /// Worker name as reported to the pool
    pub name: String,
    /// Unix timestamp of the last accepted share
    #[serde(default)]
    pub last_seen: Option<i64>,
}

/// One page of the worker list
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerListPage {
    #[serde(default)]
    pub wallet: String,
    pub total: u64,
    #[serde(default)]
    pub active: u64,
    #[serde(default)]
    pub workers: Vec<WorkerEntry>,
}

/// Bounded limit/offset pair for a page request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerQuery {
    pub limit: u32,
    pub offset: u32,
}

impl Default for WorkerQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl WorkerQuery {
    /// Create a query with the endpoint's bounds applied
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset,
        }
    }

    /// Render as a URL query fragment
    pub fn query_string(&self) -> String {
        format!("limit={}&offset={}", self.limit, self.offset)
    }
}

/// Pagination state for the worker modal
#[derive(Clone, Debug, Default)]
pub struct WorkerListState {
    query: WorkerQuery,
    total: u64,
    entries: Vec<WorkerEntry>,
}

impl WorkerListState {
    /// Create an empty list with the given page size
    pub fn new(page_size: u32) -> Self {
        Self {
            query: WorkerQuery::new(page_size, 0),
            total: 0,
            entries: Vec::new(),
        }
    }

    /// Replace the current page with a fetched one
    pub fn apply(&mut self, page: WorkerListPage) {
        self.total = page.total;
        self.entries = page.workers;
    }

    /// The rows of the current page
    #[inline]
    pub fn entries(&self) -> &[WorkerEntry] {
        &self.entries
    }

    /// Total workers across all pages
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The query for the current page
    #[inline]
    pub fn query(&self) -> WorkerQuery {
        self.query
    }

    /// Zero-based index of the current page
    pub fn page(&self) -> u32 {
        self.query.offset / self.query.limit
    }

    /// Number of pages implied by `total`
    pub fn page_count(&self) -> u32 {
        self.total.div_ceil(self.query.limit as u64) as u32
    }

    /// Advance to the next page; false when already on the last one
    pub fn next(&mut self) -> bool {
        let next_offset = self.query.offset + self.query.limit;
        if (next_offset as u64) < self.total {
            self.query.offset = next_offset;
            true
        } else {
            false
        }
    }

    /// Go back one page; false when already on the first one
    pub fn prev(&mut self) -> bool {
        if self.query.offset == 0 {
            return false;
        }
        self.query.offset = self.query.offset.saturating_sub(self.query.limit);
        true
    }
}
