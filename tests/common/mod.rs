// In-process stand-in for the posts API, served by axum on an ephemeral port
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

#[derive(Default)]
struct Inner {
    posts: Vec<Value>,
    next_id: i64,
    fail_with: Option<StatusCode>,
    list_body: Option<String>,
    requests: Vec<String>,
}

/// Shared handle to the fixture's in-memory posts table
#[derive(Clone, Default)]
pub struct Collaborator {
    inner: Arc<Mutex<Inner>>,
}

impl Collaborator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a post created `minutes` after a fixed epoch
    pub fn seed(&self, message: &str, category: &str, upvotes: u32, minutes: i64) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        let timestamp =
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes);
        inner.posts.push(json!({
            "id": id,
            "message": message,
            "category": category,
            "upvotes": upvotes,
            "timestamp": timestamp.to_rfc3339(),
        }));
        id
    }

    /// Every endpoint answers with this status until cleared
    pub fn fail_with(&self, status: Option<StatusCode>) {
        self.inner.lock().unwrap().fail_with = status;
    }

    /// Replace the list response with a raw body
    pub fn list_body(&self, body: &str) {
        self.inner.lock().unwrap().list_body = Some(body.to_string());
    }

    pub fn posts(&self) -> Vec<Value> {
        self.inner.lock().unwrap().posts.clone()
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    fn begin(&self, request: String) -> Option<StatusCode> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        inner.fail_with
    }
}

async fn list(State(collab): State<Collaborator>) -> Response {
    if let Some(status) = collab.begin("GET /posts/".into()) {
        return status.into_response();
    }
    let inner = collab.inner.lock().unwrap();
    match &inner.list_body {
        Some(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => Json(Value::Array(inner.posts.clone())).into_response(),
    }
}

async fn create(State(collab): State<Collaborator>, Json(body): Json<Value>) -> Response {
    if let Some(status) = collab.begin("POST /posts/".into()) {
        return status.into_response();
    }
    let (Some(message), Some(category)) = (body["message"].as_str(), body["category"].as_str())
    else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let mut inner = collab.inner.lock().unwrap();
    inner.next_id += 1;
    let post = json!({
        "id": inner.next_id,
        "message": message,
        "category": category,
        "upvotes": 0,
        "timestamp": Utc::now().to_rfc3339(),
    });
    inner.posts.push(post.clone());
    (StatusCode::CREATED, Json(post)).into_response()
}

async fn upvote(State(collab): State<Collaborator>, Path(id): Path<i64>) -> Response {
    if let Some(status) = collab.begin(format!("POST /upvote/{}/", id)) {
        return status.into_response();
    }
    let mut inner = collab.inner.lock().unwrap();
    match inner.posts.iter_mut().find(|p| p["id"] == json!(id)) {
        Some(post) => {
            let upvotes = post["upvotes"].as_u64().unwrap_or(0) + 1;
            post["upvotes"] = json!(upvotes);
            Json(post.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Serve the fixture and return its API base URL
pub async fn spawn(collab: Collaborator) -> String {
    let app = Router::new()
        .route("/api/posts/", get(list).post(create))
        .route("/api/upvote/{id}/", post(upvote))
        .with_state(collab);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}
