//! Blocking client for a remote todo REST service.
//!
//! # Overview
//! Lists, fetches, creates and deletes tasks over HTTP. Every operation
//! returns `Result<T, ApiError>`; HTTP and transport failures are classified
//! into a small closed error set instead of panicking.
//!
//! # Design
//! - `TodoClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `interpret` owns status classification and body decoding.
//! - `TodoApiClient` joins the two through a `Transport`, one call per
//!   operation. `UreqTransport` is the default adapter; tests inject fakes.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod interpret;
pub mod transport;
pub mod types;

pub use api::TodoApiClient;
pub use client::TodoClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, TransportError};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::Task;
