//! Error types for the todo API client.
//!
//! # Design
//! `ItemNotFound` gets a dedicated variant because callers frequently
//! distinguish "the resource does not exist" from "the server returned an
//! unexpected status." All other non-2xx responses land in `UnknownApiError`
//! with the raw status code. `Transport` covers failures where no status was
//! ever obtained, so it never masquerades as an HTTP code.
//!
//! Variants carry owned strings rather than source errors so the enum stays
//! `Clone + Eq` and two `UnknownApiError(500)` values compare equal.

use thiserror::Error;

/// Result of every client operation.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by `TodoClient` parse methods and the `TodoApiClient` facade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404, the requested task does not exist.
    #[error("item not found")]
    ItemNotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("unknown API error: HTTP {0}")]
    UnknownApiError(u16),

    /// The request never produced a status (connection refused, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// A 2xx body could not be decoded into the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A task id was empty, so no request path could be built.
    #[error("task id must not be empty")]
    EmptyId,

    /// The id is a dot segment (`.` or `..`), which no URL path can carry.
    #[error("task id {0:?} cannot be used as a path segment")]
    InvalidId(String),
}

impl ApiError {
    /// True when the server reported the task as absent (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::ItemNotFound)
    }

    /// HTTP status behind this error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ItemNotFound => Some(404),
            ApiError::UnknownApiError(code) => Some(*code),
            _ => None,
        }
    }
}
