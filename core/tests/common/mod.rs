//! Test doubles shared by the facade tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use todo_api_client::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

pub const BASE_URL: &str = "http://localhost:3000";

/// Thread-safe fake that replays queued responses and captures every request.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, status: u16, body: Option<&str>) -> &Self {
        let response = HttpResponse {
            status,
            body: body.map(str::to_string),
        };
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn enqueue_fixture(&self, status: u16, fixture: &str) -> &Self {
        self.enqueue(status, Some(fixture))
    }

    pub fn enqueue_failure(&self, message: &str) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::new(message)));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    pub fn assert_request_sent_to(&self, method: HttpMethod, path: &str) {
        let req = self.last_request();
        assert_eq!(req.method, method);
        assert_eq!(req.url, format!("{BASE_URL}{path}"));
    }

    pub fn assert_request_contains_header(&self, name: &str, value: &str) {
        let req = self.last_request();
        assert_eq!(req.header(name), Some(value), "header {name}");
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no response enqueued")))
    }
}

pub const TASKS_RESPONSE: &str = include_str!("../../../fixtures/get_tasks_response.json");
pub const TASK_RESPONSE: &str = include_str!("../../../fixtures/get_task_by_id_response.json");
pub const ADD_TASK_REQUEST: &str = include_str!("../../../fixtures/add_task_request.json");
pub const ADD_TASK_RESPONSE: &str = include_str!("../../../fixtures/add_task_response.json");
