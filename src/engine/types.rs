//! Engine types
//!
//! Run state and per-run statistics for the pagination engine.

/// Where a pagination run stands between two pulls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// The next pull issues a request
    #[default]
    Requesting,
    /// No further requests will be made
    Done,
}

impl RunState {
    /// Check if the run has finished
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Counters collected while consuming a pagination run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of pages fetched
    pub pages: usize,
    /// Number of records across all pages
    pub records: usize,
    /// Number of pages with a non-2xx status
    pub error_pages: usize,
}

impl RunStats {
    /// Create empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one page
    pub fn add_page(&mut self, records: usize, success: bool) {
        self.pages += 1;
        self.records += records;
        if !success {
            self.error_pages += 1;
        }
    }
}
