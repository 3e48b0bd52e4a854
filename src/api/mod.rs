//! HTTP client for the remote blog API.
//!
//! The API exposes a single posts collection:
//! - `GET  {base}/posts` lists every post, in the server's order
//! - `POST {base}/posts` creates one from `{title, content}`
//! - `GET  {base}/posts/{id}` fetches one, 404 when unknown

mod error;

pub use error::ApiError;

use reqwest::{Response, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::models::{NewPost, Post, PostId};

/// Client for the posts collection.
///
/// Cheap to clone; clones share one connection pool. No request timeout is
/// configured, so a call to an unresponsive server waits indefinitely.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    posts_url: String,
}

impl ApiClient {
    /// Create a client for the API configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            posts_url: config.posts_url(),
        })
    }

    /// Fetch every post.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that is not a JSON array of posts.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.posts_url.as_str();
        debug!(url = %url, "Fetching posts");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        let response = ensure_success(url, response).await?;

        let posts: Vec<Post> = response.json().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })?;

        debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    /// Create a post. The created record in the response is not read.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn create_post(&self, post: &NewPost<'_>) -> Result<(), ApiError> {
        let url = self.posts_url.as_str();
        debug!(url = %url, title = %post.title, "Creating post");

        let response = self
            .http
            .post(url)
            .json(post)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        let response = ensure_success(url, response).await?;

        info!(status = %response.status(), title = %post.title, "Post created");
        Ok(())
    }

    /// Fetch a single post, `None` if the service does not know the id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status other
    /// than 404, or an undecodable body.
    pub async fn get_post(&self, id: &PostId) -> Result<Option<Post>, ApiError> {
        let mut url = Url::parse(&self.posts_url)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(&id.to_string());
        let url = url.to_string();
        debug!(url = %url, "Fetching post");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(&url, response).await?;

        let post: Post = response.json().await.map_err(|source| ApiError::Decode {
            url: url.clone(),
            source,
        })?;
        Ok(Some(post))
    }
}

/// Turn a non-success response into [`ApiError::Status`].
async fn ensure_success(url: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown".to_string());
    Err(ApiError::Status {
        url: url.to_string(),
        status,
        body,
    })
}
