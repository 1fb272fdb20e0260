//! Filtering and pagination over a ranked asset snapshot

use crate::market_provider::AssetRecord;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Case-insensitive substring filter on the display name.
///
/// Preserves the relative order of the input; an empty query matches
/// everything.
pub fn filter<'a>(records: &'a [AssetRecord], query: &str) -> Vec<&'a AssetRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

/// Number of pages needed to show `count` items, zero when empty.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Returns the window for a 1-based page index, clipped to the bounds
/// of `records`. Out-of-range pages yield an empty slice.
pub fn paginate<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page - 1).saturating_mul(page_size).min(records.len());
    let end = (start + page_size).min(records.len());
    &records[start..end]
}

/// The live search and pagination inputs for the list view.
///
/// Changing the query always snaps back to the first page; changing the
/// page leaves the query untouched.
#[derive(Debug, Clone)]
pub struct QueryState {
    query: String,
    page: usize,
    page_size: usize,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        QueryState {
            query: String::new(),
            page: 1,
            page_size,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}
