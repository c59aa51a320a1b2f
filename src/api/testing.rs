// Scripted PostsApi for view-model tests
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use reqwest::StatusCode;
use tokio::sync::oneshot;

use super::PostsApi;
use crate::error::{ApiError, ApiResult};
use crate::posts::{Category, PostId, RawPost};

pub(crate) enum Reply<T> {
    Ready(ApiResult<T>),
    /// Resolves when the test sends on the paired channel
    Gated(oneshot::Receiver<ApiResult<T>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Create(String, Category),
    Upvote(PostId),
}

/// Replies are consumed in order; an empty queue answers 503.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    list: Mutex<VecDeque<Reply<Vec<RawPost>>>>,
    create: Mutex<VecDeque<Reply<RawPost>>>,
    upvote: Mutex<VecDeque<Reply<RawPost>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, reply: ApiResult<Vec<RawPost>>) -> &Self {
        self.list.lock().unwrap().push_back(Reply::Ready(reply));
        self
    }

    pub fn gate_list(&self) -> oneshot::Sender<ApiResult<Vec<RawPost>>> {
        let (tx, rx) = oneshot::channel();
        self.list.lock().unwrap().push_back(Reply::Gated(rx));
        tx
    }

    pub fn push_create(&self, reply: ApiResult<RawPost>) -> &Self {
        self.create.lock().unwrap().push_back(Reply::Ready(reply));
        self
    }

    pub fn gate_create(&self) -> oneshot::Sender<ApiResult<RawPost>> {
        let (tx, rx) = oneshot::channel();
        self.create.lock().unwrap().push_back(Reply::Gated(rx));
        tx
    }

    pub fn push_upvote(&self, reply: ApiResult<RawPost>) -> &Self {
        self.upvote.lock().unwrap().push_back(Reply::Ready(reply));
        self
    }

    pub fn gate_upvote(&self) -> oneshot::Sender<ApiResult<RawPost>> {
        let (tx, rx) = oneshot::channel();
        self.upvote.lock().unwrap().push_back(Reply::Gated(rx));
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

async fn answer<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> ApiResult<T> {
    let reply = queue.lock().unwrap().pop_front();
    match reply {
        Some(Reply::Ready(result)) => result,
        Some(Reply::Gated(rx)) => rx
            .await
            .unwrap_or(Err(ApiError::Status(StatusCode::SERVICE_UNAVAILABLE))),
        None => Err(ApiError::Status(StatusCode::SERVICE_UNAVAILABLE)),
    }
}

#[async_trait]
impl PostsApi for ScriptedApi {
    async fn list_posts(&self) -> ApiResult<Vec<RawPost>> {
        self.record(Call::List);
        answer(&self.list).await
    }

    async fn create_post(&self, message: &str, category: Category) -> ApiResult<RawPost> {
        self.record(Call::Create(message.to_string(), category));
        answer(&self.create).await
    }

    async fn upvote_post(&self, id: PostId) -> ApiResult<RawPost> {
        self.record(Call::Upvote(id));
        answer(&self.upvote).await
    }
}

/// A raw post created `minutes` after a fixed epoch
pub(crate) fn raw_post(id: i64, category: &str, upvotes: u32, minutes: i64) -> RawPost {
    RawPost {
        id: PostId(id),
        message: format!("voice {}", id),
        category: category.to_string(),
        upvotes,
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}

pub(crate) fn server_error() -> ApiError {
    ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)
}
