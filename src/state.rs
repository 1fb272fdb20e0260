//! Application state for the list view and its event reduction

use crate::market_provider::{AssetRecord, FetchError};
use crate::query::{self, QueryState};
use tracing::debug;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Please refresh.";

/// Events that mutate the list view state.
#[derive(Debug)]
pub enum Event {
    QueryChanged(String),
    PageChanged(usize),
    CurrencyChanged(String),
    RefreshRequested,
    FetchCompleted {
        generation: u64,
        result: Result<Vec<AssetRecord>, FetchError>,
    },
}

/// The filtered, paginated window to render for the current state.
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a AssetRecord>,
    /// Effective page after clamping to the filtered set.
    pub page: usize,
    pub total_pages: usize,
    /// Index of the first item within the filtered list, for rank numbering.
    pub offset: usize,
    pub filtered_count: usize,
}

/// Single owned container for the list view: the current snapshot, the
/// query state, and fetch bookkeeping.
///
/// Fetches are tagged with a generation counter. A completion whose
/// generation does not match the latest issued request is discarded, so
/// a slow response for an old currency can never overwrite a newer one.
#[derive(Debug)]
pub struct AppState {
    records: Vec<AssetRecord>,
    query: QueryState,
    currency: String,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl AppState {
    pub fn new(currency: &str, page_size: usize) -> Self {
        AppState {
            records: Vec::new(),
            query: QueryState::new(page_size),
            currency: currency.to_string(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generation tag to attach to the fetch issued for the latest
    /// `RefreshRequested` or `CurrencyChanged` event.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::QueryChanged(query) => {
                self.query.set_query(&query);
            }
            Event::PageChanged(page) => {
                self.query.set_page(page);
            }
            Event::CurrencyChanged(currency) => {
                // Values are denominated server-side, so a currency
                // switch invalidates the snapshot and needs a refetch.
                // The query carries over to the new list.
                self.currency = currency;
                self.begin_fetch();
            }
            Event::RefreshRequested => {
                self.begin_fetch();
            }
            Event::FetchCompleted { generation, result } => {
                if generation != self.generation {
                    debug!(
                        generation,
                        latest = self.generation,
                        "Discarding stale fetch completion"
                    );
                    return;
                }
                self.loading = false;
                match result {
                    Ok(records) => {
                        self.records = records;
                        self.error = None;
                    }
                    Err(err) => {
                        // Prior records are kept so the last good
                        // snapshot stays on screen behind the message.
                        debug!(error = %err, "Fetch failed");
                        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
                    }
                }
            }
        }
    }

    fn begin_fetch(&mut self) {
        self.generation += 1;
        self.loading = true;
        self.error = None;
    }

    /// Filters and paginates the current snapshot. The page index is
    /// clamped when the filtered set has fewer pages than the requested
    /// index, so a shrinking filter never surfaces an empty window.
    pub fn current_page(&self) -> PageView<'_> {
        let filtered = query::filter(&self.records, self.query.query());
        let total = query::total_pages(filtered.len(), self.query.page_size());
        let page = self.query.page().min(total.max(1));
        let offset = (page - 1) * self.query.page_size();
        let items = query::paginate(&filtered, page, self.query.page_size()).to_vec();
        PageView {
            items,
            page,
            total_pages: total,
            offset,
            filtered_count: filtered.len(),
        }
    }
}
