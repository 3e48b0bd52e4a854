//! The blog view: the post list, the draft in the form, and the notice
//! from the last submission.
//!
//! Nothing re-renders on its own. A caller mutates the view through
//! [`BlogView::load`] or [`BlogView::submit`] and then calls
//! [`BlogView::render`].

mod page;

use chrono::FixedOffset;
use maud::Markup;
use serde::{Deserialize, Deserializer};
use tracing::{debug, error, info};

use crate::api::ApiClient;
use crate::models::{NewPost, Post};

/// Values of the two form fields.
///
/// Browsers submit line breaks as `\r\n`; they are stored as `\n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Draft {
    #[serde(default, deserialize_with = "lf_line_breaks")]
    pub title: String,
    #[serde(default, deserialize_with = "lf_line_breaks")]
    pub content: String,
}

fn lf_line_breaks<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.contains('\r') {
        Ok(value.replace("\r\n", "\n"))
    } else {
        Ok(value)
    }
}

impl Draft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields non-empty. No other validation is applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

/// Notification raised by a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Published,
    PublishFailed,
}

/// What [`BlogView::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A field was empty; nothing was sent.
    Skipped,
    /// The post was created and the list re-fetched.
    Published,
    /// The create request failed; the draft is untouched.
    Failed,
}

/// State of one rendering of the blog page.
#[derive(Debug, Clone, Default)]
pub struct BlogView {
    posts: Vec<Post>,
    draft: Draft,
    notice: Option<Notice>,
}

impl BlogView {
    /// Empty list, empty draft, no notice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a draft typed by the user.
    #[must_use]
    pub fn with_draft(draft: Draft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Replace the post list with the server's current set.
    ///
    /// On failure the error is logged and the list is left as it was.
    pub async fn load(&mut self, api: &ApiClient) {
        match api.list_posts().await {
            Ok(posts) => {
                debug!(count = posts.len(), "Loaded posts");
                self.posts = posts;
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch posts");
            }
        }
    }

    /// Send the draft to the server as a new post.
    ///
    /// An incomplete draft is a no-op. On success the draft is cleared, the
    /// list is re-loaded and [`Notice::Published`] is set. On failure the
    /// error is logged, the draft is kept and [`Notice::PublishFailed`] is set.
    ///
    /// Repeated calls are not deduplicated: each one sends its own request.
    pub async fn submit(&mut self, api: &ApiClient) -> SubmitOutcome {
        if !self.draft.is_complete() {
            debug!("Draft incomplete, not submitting");
            return SubmitOutcome::Skipped;
        }

        let new_post = NewPost {
            title: &self.draft.title,
            content: &self.draft.content,
        };

        let result = api.create_post(&new_post).await;

        match result {
            Ok(()) => {
                info!(title = %self.draft.title, "Post published");
                self.draft.clear();
                self.load(api).await;
                self.notice = Some(Notice::Published);
                SubmitOutcome::Published
            }
            Err(e) => {
                error!(error = %e, "Failed to create post");
                self.notice = Some(Notice::PublishFailed);
                SubmitOutcome::Failed
            }
        }
    }

    /// Render the full page for the current state.
    #[must_use]
    pub fn render(&self, offset: FixedOffset) -> Markup {
        page::render_blog_page(self, offset)
    }
}
