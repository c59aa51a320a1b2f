use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::PostsApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::posts::{Category, PostId, RawPost};

#[derive(Serialize)]
struct NewPost<'a> {
    message: &'a str,
    category: Category,
}

/// `reqwest`-backed client. Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct HttpPostsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts/", self.base_url)
    }

    fn upvote_url(&self, id: PostId) -> String {
        format!("{}/upvote/{}/", self.base_url, id)
    }
}

/// Any 2xx is success; the body must match the expected schema.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> ApiResult<Vec<RawPost>> {
        let url = self.posts_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let posts: Vec<RawPost> = decode(response).await?;

        tracing::debug!("Fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn create_post(&self, message: &str, category: Category) -> ApiResult<RawPost> {
        let url = self.posts_url();
        tracing::debug!("POST {} ({})", url, category);

        let response = self
            .client
            .post(&url)
            .json(&NewPost { message, category })
            .send()
            .await?;
        decode(response).await
    }

    async fn upvote_post(&self, id: PostId) -> ApiResult<RawPost> {
        let url = self.upvote_url(id);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).send().await?;
        decode(response).await
    }
}

/// Validate an API base URL and strip its trailing slash.
pub fn parse_base_url(raw: &str) -> ApiResult<String> {
    let url = Url::parse(raw).map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{}: unsupported scheme {}",
                raw, other
            )))
        }
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
