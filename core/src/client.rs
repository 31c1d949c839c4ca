//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a normalized base `Url` and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Whoever sits in between (the `TodoApiClient` facade or a
//! host doing its own I/O) executes the actual round trip.
//!
//! Task ids are opaque: each one becomes exactly one percent-encoded path
//! segment, so `/`, `?`, `#` or spaces in an id never change the target.

use url::Url;

use crate::config::{parse_endpoint, ClientConfig, ConfigError};
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, ACCEPT, APPLICATION_JSON, CONTENT_TYPE};
use crate::interpret;
use crate::types::Task;

/// Collection path, relative to the base endpoint.
pub const TODOS_PATH: &str = "todos";

/// Synchronous, stateless request builder and response parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoClient {
    base: Url,
}

impl TodoClient {
    pub fn new(base_url: &str) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            base: parse_endpoint(base_url)?,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base: config.base_endpoint().clone(),
        }
    }

    /// Base endpoint without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    pub fn build_list_tasks(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.url(&[TODOS_PATH]), None)
    }

    pub fn build_get_task(&self, id: &str) -> Result<HttpRequest> {
        let url = self.task_url(id)?;
        Ok(self.request(HttpMethod::Get, url, None))
    }

    pub fn build_add_task(&self, task: &Task) -> Result<HttpRequest> {
        let body = serde_json::to_string(task).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(HttpMethod::Post, self.url(&[TODOS_PATH]), Some(body)))
    }

    pub fn build_delete_task(&self, id: &str) -> Result<HttpRequest> {
        let url = self.task_url(id)?;
        Ok(self.request(HttpMethod::Delete, url, None))
    }

    pub fn parse_list_tasks(&self, response: HttpResponse) -> Result<Vec<Task>> {
        interpret::decode(response)
    }

    pub fn parse_get_task(&self, response: HttpResponse) -> Result<Task> {
        interpret::decode(response)
    }

    pub fn parse_add_task(&self, response: HttpResponse) -> Result<Task> {
        interpret::decode(response)
    }

    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<()> {
        interpret::expect_no_content(response)
    }

    fn task_url(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(ApiError::EmptyId);
        }
        // URL path rules collapse `.` and `..`, so they cannot address an item.
        if id == "." || id == ".." {
            return Err(ApiError::InvalidId(id.to_string()));
        }
        Ok(self.url(&[TODOS_PATH, id]))
    }

    /// Append each segment, percent-encoded, after the base path.
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }

    fn request(&self, method: HttpMethod, url: String, body: Option<String>) -> HttpRequest {
        let mut headers = vec![(ACCEPT.to_string(), APPLICATION_JSON.to_string())];
        if body.is_some() {
            headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
        }
        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }
}
