use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub finished: bool,
}

/// Insertion-ordered store; list responses keep this order.
pub type Db = Arc<RwLock<Vec<Task>>>;

pub fn app() -> Router {
    app_with_tasks(Vec::new())
}

pub fn app_with_tasks(tasks: Vec<Task>) -> Router {
    let db: Db = Arc::new(RwLock::new(tasks));
    Router::new()
        .route("/todos", get(list_tasks).post(create_task))
        .route("/todos/{id}", get(get_task).delete(delete_task))
        .with_state(db)
        .layer(middleware::from_fn(require_json_accept))
}

/// Reject requests whose `Accept` header does not list `application/json`.
/// A bare `*/*` is not enough: clients of this API must ask for JSON.
async fn require_json_accept(request: Request, next: Next) -> Response {
    let accepts_json = request
        .headers()
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|media| media.split(';').next().map(str::trim) == Some("application/json"));
    if !accepts_json {
        return StatusCode::NOT_ACCEPTABLE.into_response();
    }
    next.run(request).await
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_tasks(listener: TcpListener, tasks: Vec<Task>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_tasks(tasks)).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    Json(db.read().await.clone())
}

async fn create_task(
    State(db): State<Db>,
    Json(mut task): Json<Task>,
) -> Result<(StatusCode, Json<Task>), StatusCode> {
    let mut tasks = db.write().await;
    if task.id.is_empty() {
        task.id = next_id(&tasks);
    } else if tasks.iter().any(|t| t.id == task.id) {
        return Err(StatusCode::CONFLICT);
    }
    tracing::debug!(id = %task.id, "created task");
    tasks.push(task.clone());
    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_task(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Task>, StatusCode> {
    let tasks = db.read().await;
    tasks
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut tasks = db.write().await;
    let index = tasks.iter().position(|t| t.id == id).ok_or(StatusCode::NOT_FOUND)?;
    tasks.remove(index);
    tracing::debug!(%id, "deleted task");
    Ok(Json(serde_json::json!({})))
}

/// One past the largest numeric id; when that overflows, the lowest free
/// numeric id instead.
fn next_id(tasks: &[Task]) -> String {
    let taken = |candidate: u64| tasks.iter().any(|t| t.id == candidate.to_string());
    let max = tasks.iter().filter_map(|t| t.id.parse::<u64>().ok()).max().unwrap_or(0);
    let candidate = match max.checked_add(1) {
        Some(next) => next,
        None => (1..).find(|c| !taken(*c)).unwrap_or(0),
    };
    candidate.to_string()
}
