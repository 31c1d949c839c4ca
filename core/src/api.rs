//! Blocking facade over `TodoClient` and a `Transport`.
//!
//! Every operation is build → execute once → interpret. Nothing is retried
//! or cached, and the client holds no per-call state, so a single instance
//! can be shared by reference across threads.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::config::{ClientConfig, ConfigError};
use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Task;

/// Client for the remote todo service.
#[derive(Debug, Clone)]
pub struct TodoApiClient<T> {
    requests: TodoClient,
    transport: T,
}

#[cfg(feature = "ureq")]
impl TodoApiClient<crate::transport::UreqTransport> {
    /// Client backed by the default blocking transport.
    pub fn new(base_endpoint: &str) -> std::result::Result<Self, ConfigError> {
        Self::with_transport(base_endpoint, crate::transport::UreqTransport::new())
    }
}

impl<T: Transport> TodoApiClient<T> {
    pub fn with_transport(base_endpoint: &str, transport: T) -> std::result::Result<Self, ConfigError> {
        Ok(Self {
            requests: TodoClient::new(base_endpoint)?,
            transport,
        })
    }

    /// The config's endpoint was validated when the config was built.
    pub fn from_config(config: &ClientConfig, transport: T) -> Self {
        Self {
            requests: TodoClient::from_config(config),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.requests.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All tasks, in the order the server returned them.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let response = self.send(self.requests.build_list_tasks())?;
        self.requests.parse_list_tasks(response)
    }

    pub fn get_task(&self, id: &str) -> Result<Task> {
        let response = self.send(self.requests.build_get_task(id)?)?;
        self.requests.parse_get_task(response)
    }

    /// Create a task. The body is the caller's task verbatim, `id` included;
    /// the returned task is the server's representation.
    pub fn add_task(&self, task: &Task) -> Result<Task> {
        let response = self.send(self.requests.build_add_task(task)?)?;
        self.requests.parse_add_task(response)
    }

    pub fn delete_task(&self, id: &str) -> Result<()> {
        let response = self.send(self.requests.build_delete_task(id)?)?;
        self.requests.parse_delete_task(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        match self.transport.execute(&request) {
            Ok(response) => {
                debug!(status = response.status, url = %request.url, "received response");
                Ok(response)
            }
            Err(e) => {
                warn!(method = request.method.as_str(), url = %request.url, error = %e, "transport failure");
                Err(ApiError::Transport(e.to_string()))
            }
        }
    }
}
