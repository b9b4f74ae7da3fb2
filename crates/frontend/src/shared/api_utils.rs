//! API utilities for frontend-backend communication
//!
//! Helpers for constructing API URLs.

use crate::shared::config::config;
use contracts::shared::page::PageQuery;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api.port)
}

/// `{base}{prefix}`, e.g. "http://localhost:8000/api"
pub fn join_root(base: &str, prefix: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        base.trim_end_matches('/').to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), prefix)
    }
}

/// Collection URL: `{root}/{resource}/`
pub fn collection_url(root: &str, resource_path: &str) -> String {
    format!("{}/{}/", root, resource_path.trim_matches('/'))
}

/// Item URL: `{root}/{resource}/{id}/`
pub fn item_url(root: &str, resource_path: &str, id: i64) -> String {
    format!("{}{}/", collection_url(root, resource_path), id)
}

/// Collection URL with `?page=N&search=S`
pub fn page_url(root: &str, resource_path: &str, query: &PageQuery) -> String {
    let url = collection_url(root, resource_path);
    match serde_qs::to_string(&query.normalized()) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", url, qs),
        Ok(_) => url,
        Err(e) => {
            log::warn!("Failed to encode query {:?}: {}", query, e);
            url
        }
    }
}

/// Resolve a pagination cursor against the API origin
///
/// Absolute cursors are used verbatim; relative ones are prefixed with `base`.
pub fn resolve_cursor(base: &str, cursor: &str) -> String {
    if cursor.starts_with("http://") || cursor.starts_with("https://") {
        cursor.to_string()
    } else if cursor.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), cursor)
    } else {
        format!("{}/{}", base.trim_end_matches('/'), cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_and_item_urls() {
        let root = join_root("http://host:8000", "/api/");
        assert_eq!(root, "http://host:8000/api");
        assert_eq!(
            collection_url(&root, "operadores"),
            "http://host:8000/api/operadores/"
        );
        assert_eq!(
            item_url(&root, "/postes/", 42),
            "http://host:8000/api/postes/42/"
        );
        assert_eq!(join_root("", ""), "");
    }

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("/api", "contratos", &PageQuery::first()),
            "/api/contratos/?page=1"
        );
        assert_eq!(
            page_url("/api", "contratos", &PageQuery::page(3).with_search("vigente")),
            "/api/contratos/?page=3&search=vigente"
        );
    }

    #[test]
    fn test_resolve_cursor() {
        assert_eq!(
            resolve_cursor("http://host:8000", "http://other/api/postes/?page=2"),
            "http://other/api/postes/?page=2"
        );
        assert_eq!(
            resolve_cursor("http://host:8000/", "/api/postes/?page=2"),
            "http://host:8000/api/postes/?page=2"
        );
        assert_eq!(
            resolve_cursor("", "api/postes/?page=2"),
            "/api/postes/?page=2"
        );
    }
}
