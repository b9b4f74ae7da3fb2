//! Test doubles for the data layer seams

use crate::shared::clock::Clock;
use crate::shared::error::ApiError;
use crate::shared::http::{HttpTransport, Method};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// A request seen by `ScriptedTransport`
#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Answers by exact (method, URL) and records every request.
/// Unscripted requests get a 404.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<HashMap<(Method, String), Result<Option<Value>, ApiError>>>,
    seen: RefCell<Vec<SeenRequest>>,
}

impl ScriptedTransport {
    /// Script a GET
    pub fn respond(&self, url: &str, response: Result<Value, ApiError>) {
        self.respond_to(Method::Get, url, response.map(Some));
    }

    pub fn respond_to(&self, method: Method, url: &str, response: Result<Option<Value>, ApiError>) {
        self.responses
            .borrow_mut()
            .insert((method, url.to_string()), response);
    }

    /// URLs requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.seen.borrow().iter().map(|r| r.url.clone()).collect()
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send_json(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, ApiError> {
        self.seen.borrow_mut().push(SeenRequest {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });

        let key = (method, url.to_string());
        match self.responses.borrow().get(&key) {
            Some(response) => response.clone(),
            None => Err(ApiError::Http {
                status: 404,
                body: None,
            }),
        }
    }
}

/// Clock moved by hand
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
