//! List screen state: server-side paging, submitted search, client filter

use crate::shared::number_format::format_number_int;
use contracts::domain::common::ApiResource;
use contracts::shared::page::{Page, PageQuery};

/// Filters already-loaded rows by a case-insensitive substring match
pub fn filter_list<T: ApiResource>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// State of a paginated list screen
///
/// The search box text (`search_input`) only reaches the server when the
/// search is submitted; until then the current page keeps its old term.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// 1-based page number
    pub page: u32,
    pub search_input: String,
    pub applied_search: String,
    pub count: u64,
    pub has_next: bool,
    pub has_previous: bool,
    min_search_chars: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ListState {
    pub fn new(min_search_chars: usize) -> Self {
        Self {
            page: 1,
            search_input: String::new(),
            applied_search: String::new(),
            count: 0,
            has_next: false,
            has_previous: false,
            min_search_chars,
        }
    }

    /// Query for the current page and applied search
    pub fn query(&self) -> PageQuery {
        PageQuery::page(self.page).with_search(self.applied_search.as_str())
    }

    /// Applies the typed search and goes back to page 1
    ///
    /// Terms shorter than the configured minimum search everything.
    pub fn submit_search(&mut self) -> PageQuery {
        let term = self.search_input.trim();
        self.applied_search = if term.chars().count() < self.min_search_chars {
            String::new()
        } else {
            term.to_string()
        };
        self.page = 1;
        self.query()
    }

    pub fn clear_search(&mut self) -> PageQuery {
        self.search_input.clear();
        self.submit_search()
    }

    /// Query for the next page, if the server announced one
    pub fn next(&mut self) -> Option<PageQuery> {
        if !self.has_next {
            return None;
        }
        self.page += 1;
        Some(self.query())
    }

    pub fn previous(&mut self) -> Option<PageQuery> {
        if !self.has_previous || self.page <= 1 {
            return None;
        }
        self.page -= 1;
        Some(self.query())
    }

    /// Record what the server returned for the current page
    pub fn apply_page<R>(&mut self, page: &Page<R>) {
        self.count = page.count;
        self.has_next = page.has_next();
        self.has_previous = page.has_previous();
    }

    /// "Página 2 · 1.057 registros"
    pub fn summary(&self) -> String {
        format!(
            "Página {} · {} registros",
            self.page,
            format_number_int(i64::try_from(self.count).unwrap_or(i64::MAX))
        )
    }
}
