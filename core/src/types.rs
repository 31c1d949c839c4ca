//! Domain DTOs for the todo API.
//!
//! # Design
//! `Task` mirrors the server's wire schema but is defined independently from
//! the mock-server crate. Integration tests catch any schema drift between
//! the two. Field names on the wire are `id`, `userId`, `title`, `finished`.

use serde::{Deserialize, Serialize};

/// A single task as exchanged with the API.
///
/// Used both as the decoded response payload and as the request body for
/// creation. The `id` is sent exactly as supplied, even though the server
/// usually assigns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Task {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    pub finished: bool,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        title: impl Into<String>,
        finished: bool,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: title.into(),
            finished,
        }
    }
}
