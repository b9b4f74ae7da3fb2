//! CRUD client for one REST resource
//!
//! Reads go through `PagedCache` (`list` is never cached, `list_all` is).
//! Writes hit the collection/item URLs directly and leave the cache alone.

use crate::shared::api_utils::{collection_url, item_url};
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::error::ApiError;
use crate::shared::http::{GlooTransport, HttpTransport, Method};
use crate::shared::paged_cache::{browser_cache, PagedCache};
use crate::shared::storage::{KeyValueStore, LocalStorage};
use contracts::domain::common::{ApiResource, ResourceId};
use contracts::shared::page::{AggregatedList, Page, PageQuery};
use std::marker::PhantomData;

pub struct ResourceApi<R, T = GlooTransport, S = LocalStorage, C = SystemClock> {
    cache: PagedCache<T, S, C>,
    _resource: PhantomData<R>,
}

impl<R: ApiResource> ResourceApi<R> {
    /// Browser wiring for `R`
    pub fn browser() -> Self {
        Self::new(browser_cache())
    }
}

impl<R, T, S, C> ResourceApi<R, T, S, C>
where
    R: ApiResource,
    T: HttpTransport,
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(cache: PagedCache<T, S, C>) -> Self {
        Self {
            cache,
            _resource: PhantomData,
        }
    }

    pub fn cache(&self) -> &PagedCache<T, S, C> {
        &self.cache
    }

    /// One server-side page, optionally searched
    pub async fn list(&self, query: &PageQuery) -> Result<Page<R>, ApiError> {
        self.cache.fetch_page(R::resource_path(), query).await
    }

    /// Every record, for selects and pickers
    pub async fn list_all(&self) -> Result<AggregatedList<R>, ApiError> {
        self.cache.fetch_all(R::resource_path()).await
    }

    pub async fn get(&self, id: ResourceId) -> Result<R, ApiError> {
        let url = item_url(&self.cache.api_root(), R::resource_path(), id);
        let value = self.cache.transport().get_json(&url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `POST {resource}/`; returns the created record as echoed by the server
    pub async fn create(&self, item: &R) -> Result<R, ApiError> {
        let url = collection_url(&self.cache.api_root(), R::resource_path());
        log::debug!("Creating {} at {}", R::element_name(), url);
        self.send_record(Method::Post, &url, item).await
    }

    /// `PUT {resource}/{id}/`
    pub async fn update(&self, id: ResourceId, item: &R) -> Result<R, ApiError> {
        let url = item_url(&self.cache.api_root(), R::resource_path(), id);
        log::debug!("Updating {} at {}", R::element_name(), url);
        self.send_record(Method::Put, &url, item).await
    }

    /// `DELETE {resource}/{id}/`
    pub async fn delete(&self, id: ResourceId) -> Result<(), ApiError> {
        let url = item_url(&self.cache.api_root(), R::resource_path(), id);
        log::debug!("Deleting {} at {}", R::element_name(), url);
        self.cache
            .transport()
            .send_json(Method::Delete, &url, None)
            .await?;
        Ok(())
    }

    /// Drop the cached `list_all` result
    pub fn invalidate_all(&self) {
        self.cache.invalidate(R::resource_path());
    }

    /// Create when `id` is absent, update otherwise
    pub async fn save(&self, item: &R) -> Result<R, ApiError> {
        match item.id() {
            Some(id) => self.update(id, item).await,
            None => self.create(item).await,
        }
    }

    async fn send_record(&self, method: Method, url: &str, item: &R) -> Result<R, ApiError> {
        let body = serde_json::to_value(item)?;
        let response = self
            .cache
            .transport()
            .send_json(method, url, Some(&body))
            .await?;

        match response {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(item.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;
    use crate::shared::testing::{ManualClock, ScriptedTransport, SeenRequest};
    use chrono::{Duration, TimeZone, Utc};
    use contracts::domain::a001_cable_operator::aggregate::CableOperator;
    use serde_json::json;
    use std::rc::Rc;

    type TestApi =
        ResourceApi<CableOperator, Rc<ScriptedTransport>, Rc<MemoryStore>, Rc<ManualClock>>;

    fn setup() -> (Rc<ScriptedTransport>, Rc<MemoryStore>, TestApi) {
        let transport = Rc::new(ScriptedTransport::default());
        let store = Rc::new(MemoryStore::new());
        let clock = Rc::new(ManualClock::at(
            Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap(),
        ));
        let cache = PagedCache::new(Rc::clone(&transport), Rc::clone(&store), clock)
            .with_ttl(Duration::minutes(5));
        (transport, store, ResourceApi::new(cache))
    }

    fn operator(id: Option<i64>, name: &str) -> CableOperator {
        CableOperator {
            id,
            name: name.to_string(),
            nit: "900123456-7".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_uses_page_and_search() {
        let (transport, store, api) = setup();
        transport.respond(
            "/api/operadores/?page=1&search=cable",
            Ok(json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{"id": 7, "nombre": "Cable Norte", "nit": "900", "activo": true}]
            })),
        );

        let page = api
            .list(&PageQuery::first().with_search(" cable "))
            .await
            .unwrap();

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Cable Norte");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_is_cached() {
        let (transport, _store, api) = setup();
        transport.respond(
            "/api/operadores/?page=1",
            Ok(json!({"count": 1, "next": null, "previous": null, "results": [{"id": 1, "nombre": "A", "nit": "1"}]})),
        );

        let first = api.list_all().await.unwrap();
        let second = api.list_all().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(transport.calls().len(), 1);

        api.invalidate_all();
        api.list_all().await.unwrap();
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (transport, _store, api) = setup();
        transport.respond(
            "/api/operadores/3/",
            Ok(json!({"id": 3, "nombre": "Fibra Sur", "nit": "800"})),
        );

        let op = api.get(3).await.unwrap();
        assert_eq!(op.id, Some(3));
        assert_eq!(op.name, "Fibra Sur");
    }

    #[tokio::test]
    async fn test_create_posts_to_collection() {
        let (transport, _store, api) = setup();
        transport.respond_to(
            Method::Post,
            "/api/operadores/",
            Ok(Some(json!({"id": 12, "nombre": "Nuevo", "nit": "900123456-7"}))),
        );

        let created = api.create(&operator(None, "Nuevo")).await.unwrap();

        assert_eq!(created.id, Some(12));
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["nombre"], json!("Nuevo"));
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_save_routes_by_id_and_keeps_input_on_empty_body() {
        let (transport, _store, api) = setup();
        transport.respond_to(Method::Put, "/api/operadores/5/", Ok(None));

        let item = operator(Some(5), "Editado");
        let saved = api.save(&item).await.unwrap();

        assert_eq!(saved, item);
        assert_eq!(transport.requests()[0].method, Method::Put);
    }

    #[tokio::test]
    async fn test_validation_error_is_readable() {
        let (transport, _store, api) = setup();
        transport.respond_to(
            Method::Post,
            "/api/operadores/",
            Err(ApiError::Http {
                status: 400,
                body: Some(json!({"nit": ["Ya existe un operador con este NIT."]})),
            }),
        );

        let err = api.create(&operator(None, "Duplicado")).await.unwrap_err();
        assert_eq!(err.user_message(), "nit: Ya existe un operador con este NIT.");
    }

    #[tokio::test]
    async fn test_delete_does_not_touch_cache() {
        let (transport, store, api) = setup();
        transport.respond(
            "/api/operadores/?page=1",
            Ok(json!({"count": 1, "next": null, "previous": null, "results": [{"id": 9, "nombre": "X", "nit": "1"}]})),
        );
        transport.respond_to(Method::Delete, "/api/operadores/9/", Ok(None));

        api.list_all().await.unwrap();
        api.delete(9).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            transport.requests().last(),
            Some(&SeenRequest {
                method: Method::Delete,
                url: "/api/operadores/9/".to_string(),
                body: None,
            })
        );
    }
}
