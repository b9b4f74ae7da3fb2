//! Paginated list envelopes shared with the backend.

use serde::{Deserialize, Serialize};

/// One page of a paginated list endpoint: `{count, next, previous, results}`
///
/// `count` is the total across all pages, `next`/`previous` are cursors
/// (absolute or relative URLs) that the client follows verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// Query for a single page. Absent fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageQuery {
    pub fn first() -> Self {
        Self::default()
    }

    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            search: None,
        }
    }

    /// Sets the search term; blank terms clear the filter
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Page number with the backend default applied (pages start at 1)
    pub fn page_or_default(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// Normalized copy: page defaulted, blank search removed
    pub fn normalized(&self) -> Self {
        Self {
            page: Some(self.page_or_default()),
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

/// Every item of a collection, produced by walking all pages.
///
/// `count` is the first page's `count`, not the length of `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedList<T> {
    pub results: Vec<T>,
    pub count: u64,
}

impl<T> Default for AggregatedList<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserializes_backend_shape() {
        let raw = r#"{"count": 3, "next": "/api/postes/?page=2", "previous": null, "results": [1, 2]}"#;
        let page: Page<i32> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.count, 3);
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.results, vec![1, 2]);
    }

    #[test]
    fn test_query_normalization() {
        let q = PageQuery {
            page: Some(0),
            search: Some("   ".into()),
        };
        assert_eq!(
            q.normalized(),
            PageQuery {
                page: Some(1),
                search: None
            }
        );

        let q = PageQuery::page(4).with_search("  claro ");
        assert_eq!(q.page_or_default(), 4);
        assert_eq!(q.search.as_deref(), Some("claro"));
    }
}
