//! HTTP transport used by the data layer
//!
//! `HttpTransport` is the seam between `PagedCache`/`ResourceApi` and the
//! browser. `GlooTransport` is the production implementation; tests plug in
//! a scripted fake.

use crate::shared::error::ApiError;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// JSON over HTTP. Futures are `!Send` (browser event loop).
#[async_trait(?Send)]
pub trait HttpTransport {
    /// `GET url`, expecting a JSON body
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.send_json(Method::Get, url, None)
            .await?
            .ok_or_else(|| ApiError::Decode(format!("Empty response body from {}", url)))
    }

    /// Any method with an optional JSON body; `None` for empty responses (204)
    async fn send_json(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ApiError>;
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for Rc<T> {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        (**self).get_json(url).await
    }

    async fn send_json(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ApiError> {
        (**self).send_json(method, url, body).await
    }
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    fn builder(method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        builder.header("Accept", "application/json")
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send_json(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ApiError> {
        let builder = Self::builder(method, url);

        let response = match body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

        read_response(response).await
    }
}

async fn read_response(response: Response) -> Result<Option<Value>, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

    interpret_response(status, ok, &text)
}

/// Map status + raw body to the transport result
pub fn interpret_response(status: u16, ok: bool, text: &str) -> Result<Option<Value>, ApiError> {
    if !ok {
        let body = serde_json::from_str::<Value>(text).ok();
        log::debug!("HTTP {} with body: {:?}", status, body);
        return Err(ApiError::Http { status, body });
    }

    if status == 204 || text.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(text)?))
}
