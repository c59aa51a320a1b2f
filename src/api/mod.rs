// Posts API seam - every network side effect goes through this trait
mod http;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::posts::{Category, PostId, RawPost};

pub use self::http::{parse_base_url, HttpPostsApi};

/// The three operations the feedback board needs from the server.
///
/// One attempt per call, no retries. Results come back exactly as the
/// server sent them; normalizing is the caller's job.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `GET /posts/`
    async fn list_posts(&self) -> ApiResult<Vec<RawPost>>;

    /// `POST /posts/` with `{message, category}`
    async fn create_post(&self, message: &str, category: Category) -> ApiResult<RawPost>;

    /// `POST /upvote/{id}/`
    async fn upvote_post(&self, id: PostId) -> ApiResult<RawPost>;
}
