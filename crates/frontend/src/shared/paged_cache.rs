//! Paginated list access with a time-boxed full-collection cache
//!
//! - `fetch_page` returns one page of a list endpoint (optionally searched).
//! - `fetch_all` walks the `next` cursors to the end and memoizes the
//!   result in the key-value store under one key per resource, for
//!   `ttl` (5 minutes by default). A stale or unreadable entry is deleted
//!   on read. A failed walk caches nothing.
//!
//! Mutations never purge the cache; call `invalidate` explicitly when a
//! screen needs fresh reference data right after a write.

use crate::shared::api_utils::{api_base, join_root, page_url, resolve_cursor};
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::config::config;
use crate::shared::error::ApiError;
use crate::shared::http::{GlooTransport, HttpTransport};
use crate::shared::storage::{KeyValueStore, LocalStorage};
use chrono::Duration;
use contracts::shared::page::{AggregatedList, Page, PageQuery};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stored form: `{"timestamp": <ms>, "data": {"results": [...], "count": N}}`
#[derive(Debug, Deserialize)]
struct CacheEntry<R> {
    timestamp: i64,
    data: AggregatedList<R>,
}

#[derive(Serialize)]
struct CacheEntryRef<'a, R: Serialize> {
    timestamp: i64,
    data: &'a AggregatedList<R>,
}

pub struct PagedCache<T, S, C> {
    transport: T,
    store: S,
    clock: C,
    api_base: String,
    api_prefix: String,
    key_prefix: String,
    ttl: Duration,
}

/// Production wiring: fetch + localStorage + wall clock
pub type BrowserCache = PagedCache<GlooTransport, LocalStorage, SystemClock>;

pub fn browser_cache() -> BrowserCache {
    PagedCache::new(GlooTransport, LocalStorage, SystemClock).with_api_base(api_base())
}

impl<T, S, C> PagedCache<T, S, C>
where
    T: HttpTransport,
    S: KeyValueStore,
    C: Clock,
{
    /// Same-origin API (empty base) with the configured prefix and TTL
    pub fn new(transport: T, store: S, clock: C) -> Self {
        let cfg = config();
        Self {
            transport,
            store,
            clock,
            api_base: String::new(),
            api_prefix: cfg.api.prefix.clone(),
            key_prefix: cfg.cache.key_prefix.clone(),
            ttl: cfg.cache_ttl(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// `{base}{prefix}`, e.g. "http://host:8000/api"
    pub fn api_root(&self) -> String {
        join_root(&self.api_base, &self.api_prefix)
    }

    /// One key per resource; queries are never part of it
    pub fn cache_key(&self, resource_path: &str) -> String {
        format!("{}{}", self.key_prefix, resource_path.trim_matches('/'))
    }

    /// One page of `resource_path`
    pub async fn fetch_page<R: DeserializeOwned>(
        &self,
        resource_path: &str,
        query: &PageQuery,
    ) -> Result<Page<R>, ApiError> {
        let url = page_url(&self.api_root(), resource_path, query);
        log::debug!("Fetching page {}", url);
        self.get_page(&url).await
    }

    /// Every item of `resource_path`, served from the cache while fresh
    pub async fn fetch_all<R>(&self, resource_path: &str) -> Result<AggregatedList<R>, ApiError>
    where
        R: Serialize + DeserializeOwned,
    {
        let key = self.cache_key(resource_path);

        if let Some(cached) = self.read_fresh::<R>(&key) {
            log::debug!("Cache hit for {} ({} items)", key, cached.results.len());
            return Ok(cached);
        }
        log::debug!("Cache miss for {}", key);

        let list = match self.walk::<R>(resource_path).await {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Failed to load all of {}: {}", resource_path, e);
                return Err(e);
            }
        };

        self.write(&key, &list);
        Ok(list)
    }

    /// Drop the cached collection of `resource_path`
    pub fn invalidate(&self, resource_path: &str) {
        let key = self.cache_key(resource_path);
        log::debug!("Invalidating {}", key);
        self.store.delete(&key);
    }

    async fn get_page<R: DeserializeOwned>(&self, url: &str) -> Result<Page<R>, ApiError> {
        let value = self.transport.get_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Page 1, then every `next` cursor in order. `count` comes from page 1.
    async fn walk<R: DeserializeOwned>(
        &self,
        resource_path: &str,
    ) -> Result<AggregatedList<R>, ApiError> {
        let first_url = page_url(&self.api_root(), resource_path, &PageQuery::first());
        let first: Page<R> = self.get_page(&first_url).await?;

        let count = first.count;
        let mut results = first.results;
        let mut next = first.next;
        let mut visited = HashSet::from([first_url]);

        while let Some(cursor) = next {
            let url = resolve_cursor(&self.api_base, &cursor);
            if !visited.insert(url.clone()) {
                return Err(ApiError::PaginationLoop(url));
            }

            let page: Page<R> = self.get_page(&url).await?;
            results.extend(page.results);
            next = page.next;
        }

        Ok(AggregatedList { results, count })
    }

    fn read_fresh<R: DeserializeOwned>(&self, key: &str) -> Option<AggregatedList<R>> {
        let raw = self.store.get(key)?;

        let entry: CacheEntry<R> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Discarding unreadable cache entry {}: {}", key, e);
                self.store.delete(key);
                return None;
            }
        };

        let age_ms = self.clock.now().timestamp_millis() - entry.timestamp;
        if age_ms < self.ttl.num_milliseconds() {
            Some(entry.data)
        } else {
            log::debug!("Cache entry {} expired ({} ms old)", key, age_ms);
            self.store.delete(key);
            None
        }
    }

    fn write<R: Serialize>(&self, key: &str, list: &AggregatedList<R>) {
        let entry = CacheEntryRef {
            timestamp: self.clock.now().timestamp_millis(),
            data: list,
        };
        match serde_json::to_string(&entry) {
            Ok(raw) => self.store.set(key, &raw),
            Err(e) => log::warn!("Failed to serialize cache entry {}: {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;
    use crate::shared::testing::{ManualClock, ScriptedTransport};
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::{json, Value};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: i64,
    }

    type TestCache = PagedCache<Rc<ScriptedTransport>, Rc<MemoryStore>, Rc<ManualClock>>;

    struct Fixture {
        transport: Rc<ScriptedTransport>,
        store: Rc<MemoryStore>,
        clock: Rc<ManualClock>,
        cache: TestCache,
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
    }

    fn fixture() -> Fixture {
        let transport = Rc::new(ScriptedTransport::default());
        let store = Rc::new(MemoryStore::new());
        let clock = Rc::new(ManualClock::at(t0()));
        let cache = PagedCache::new(
            Rc::clone(&transport),
            Rc::clone(&store),
            Rc::clone(&clock),
        )
        .with_ttl(Duration::minutes(5));
        Fixture {
            transport,
            store,
            clock,
            cache,
        }
    }

    fn rows(ids: std::ops::Range<i64>) -> Value {
        Value::Array(ids.map(|id| json!({"id": id})).collect())
    }

    /// Three pages of 2, 2 and 1 rows under /api/postes/
    fn script_three_pages(transport: &ScriptedTransport) {
        transport.respond(
            "/api/postes/?page=1",
            Ok(json!({"count": 5, "next": "/api/postes/?page=2", "previous": null, "results": rows(1..3)})),
        );
        transport.respond(
            "/api/postes/?page=2",
            Ok(json!({"count": 5, "next": "http://elsewhere/api/postes/?page=3", "previous": "/api/postes/?page=1", "results": rows(3..5)})),
        );
        transport.respond(
            "http://elsewhere/api/postes/?page=3",
            Ok(json!({"count": 6, "next": null, "previous": "/api/postes/?page=2", "results": rows(5..6)})),
        );
    }

    fn ids(list: &AggregatedList<Row>) -> Vec<i64> {
        list.results.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_fetch_page_builds_query() {
        let f = fixture();
        f.transport.respond(
            "/api/operadores/?page=2&search=norte",
            Ok(json!({"count": 11, "next": null, "previous": "/api/operadores/?page=1&search=norte", "results": rows(10..11)})),
        );

        let page: Page<Row> = f
            .cache
            .fetch_page("operadores", &PageQuery::page(2).with_search("norte"))
            .await
            .unwrap();

        assert_eq!(page.count, 11);
        assert_eq!(page.results, vec![Row { id: 10 }]);
        assert!(page.has_previous());
        assert!(f.store.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_page_propagates_http_error() {
        let f = fixture();
        f.transport.respond(
            "/api/operadores/?page=1",
            Err(ApiError::Http {
                status: 403,
                body: Some(json!({"detail": "Sin permiso."})),
            }),
        );

        let err = f
            .cache
            .fetch_page::<Row>("operadores", &PageQuery::first())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.user_message(), "Sin permiso.");
    }

    #[tokio::test]
    async fn test_fetch_all_walks_every_page_in_order() {
        let f = fixture();
        script_three_pages(&f.transport);

        let list: AggregatedList<Row> = f.cache.fetch_all("postes").await.unwrap();

        assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
        // count from the first page, not from later pages or the length
        assert_eq!(list.count, 5);
        assert_eq!(
            f.transport.calls(),
            vec![
                "/api/postes/?page=1",
                "/api/postes/?page=2",
                "http://elsewhere/api/postes/?page=3",
            ]
        );
        assert!(f.store.contains(&f.cache.cache_key("postes")));
    }

    #[tokio::test]
    async fn test_fetch_all_served_from_cache_until_ttl() {
        let f = fixture();
        script_three_pages(&f.transport);

        let first: AggregatedList<Row> = f.cache.fetch_all("postes").await.unwrap();
        assert_eq!(f.transport.calls().len(), 3);

        f.clock.advance(Duration::minutes(4) + Duration::seconds(59));
        let cached: AggregatedList<Row> = f.cache.fetch_all("postes").await.unwrap();
        assert_eq!(cached, first);
        assert_eq!(f.transport.calls().len(), 3);

        f.clock.advance(Duration::seconds(2));
        let refreshed: AggregatedList<Row> = f.cache.fetch_all("postes").await.unwrap();
        assert_eq!(refreshed, first);
        assert_eq!(f.transport.calls().len(), 6);

        let raw = f.store.get(&f.cache.cache_key("postes")).unwrap();
        let stored: Value = serde_json::from_str(&raw).unwrap();
        let expected_ts = (t0() + Duration::minutes(5) + Duration::seconds(1)).timestamp_millis();
        assert_eq!(stored["timestamp"], json!(expected_ts));
        assert_eq!(stored["data"]["count"], json!(5));
    }

    #[tokio::test]
    async fn test_partial_failure_caches_nothing() {
        let f = fixture();
        script_three_pages(&f.transport);
        f.transport.respond(
            "/api/postes/?page=2",
            Err(ApiError::Network("connection reset".into())),
        );

        let err = f.cache.fetch_all::<Row>("postes").await.unwrap_err();

        assert_eq!(err, ApiError::Network("connection reset".into()));
        assert!(f.store.is_empty());
        // page 3 is never requested
        assert_eq!(f.transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_deleted_and_refetched() {
        let f = fixture();
        script_three_pages(&f.transport);
        let key = f.cache.cache_key("postes");
        f.store.set(&key, "{not json");

        let list: AggregatedList<Row> = f.cache.fetch_all("postes").await.unwrap();

        assert_eq!(list.results.len(), 5);
        assert_eq!(f.transport.calls().len(), 3);
        let raw = f.store.get(&key).unwrap();
        assert!(serde_json::from_str::<Value>(&raw).is_ok());
    }

    #[tokio::test]
    async fn test_corrupt_entry_removed_even_when_fetch_fails() {
        let f = fixture();
        let key = f.cache.cache_key("postes");
        f.store.set(&key, r#"{"timestamp": "yesterday"}"#);

        assert!(f.cache.fetch_all::<Row>("postes").await.is_err());
        assert!(!f.store.contains(&key));
    }

    #[tokio::test]
    async fn test_stale_entry_is_deleted_on_read() {
        let f = fixture();
        script_three_pages(&f.transport);
        f.cache.fetch_all::<Row>("postes").await.unwrap();

        f.clock.advance(Duration::minutes(6));
        f.transport.respond(
            "/api/postes/?page=1",
            Err(ApiError::Http {
                status: 500,
                body: None,
            }),
        );

        assert!(f.cache.fetch_all::<Row>("postes").await.is_err());
        assert!(f.store.is_empty());
    }

    #[tokio::test]
    async fn test_cursor_loop_is_an_error() {
        let f = fixture();
        f.transport.respond(
            "/api/postes/?page=1",
            Ok(json!({"count": 4, "next": "/api/postes/?page=2", "previous": null, "results": rows(1..3)})),
        );
        f.transport.respond(
            "/api/postes/?page=2",
            Ok(json!({"count": 4, "next": "/api/postes/?page=1", "previous": null, "results": rows(3..5)})),
        );

        let err = f.cache.fetch_all::<Row>("postes").await.unwrap_err();
        assert_eq!(err, ApiError::PaginationLoop("/api/postes/?page=1".into()));
        assert!(f.store.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let f = fixture();
        script_three_pages(&f.transport);
        f.cache.fetch_all::<Row>("postes").await.unwrap();

        f.cache.invalidate("/postes/");
        assert!(f.store.is_empty());

        f.cache.fetch_all::<Row>("postes").await.unwrap();
        assert_eq!(f.transport.calls().len(), 6);
    }

    #[tokio::test]
    async fn test_cache_keys_are_per_resource() {
        let f = fixture();
        script_three_pages(&f.transport);
        f.transport.respond(
            "/api/operadores/?page=1",
            Ok(json!({"count": 1, "next": null, "previous": null, "results": rows(100..101)})),
        );

        let poles: AggregatedList<Row> = f.cache.fetch_all("postes").await.unwrap();
        let operators: AggregatedList<Row> = f.cache.fetch_all("operadores").await.unwrap();

        assert_eq!(poles.results.len(), 5);
        assert_eq!(ids(&operators), vec![100]);
        assert_eq!(f.store.len(), 2);
        assert_ne!(f.cache.cache_key("postes"), f.cache.cache_key("operadores"));
    }

    #[tokio::test]
    async fn test_decode_error_on_unexpected_shape() {
        let f = fixture();
        f.transport
            .respond("/api/postes/?page=1", Ok(json!({"items": []})));

        let err = f.cache.fetch_all::<Row>("postes").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
