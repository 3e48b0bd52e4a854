//! Post cards and the post list.

use chrono::FixedOffset;
use maud::{html, Markup, Render};

use crate::constants::{EMPTY_PLACEHOLDER, PUBLISHED_AT_LABEL};
use crate::models::Post;

/// A single post rendered as an `<article>` block.
///
/// Content keeps its whitespace and line breaks (`white-space: pre-wrap`).
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    pub offset: FixedOffset,
    /// Link the title to the post's own page.
    pub link_title: bool,
}

impl<'a> PostCard<'a> {
    /// Create a card for a post, showing times at `offset`.
    #[must_use]
    pub const fn new(post: &'a Post, offset: FixedOffset) -> Self {
        Self {
            post,
            offset,
            link_title: true,
        }
    }

    /// Render the title as plain text.
    #[must_use]
    pub const fn without_link(mut self) -> Self {
        self.link_title = false;
        self
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let id = post.id.to_string();
        let href = format!("/posts/{id}");

        html! {
            article class="post" data-post-id=(id) {
                h3 class="post-title" {
                    @if self.link_title {
                        a href=(href) { (post.title) }
                    } @else {
                        (post.title)
                    }
                }
                p class="post-meta" {
                    small {
                        (PUBLISHED_AT_LABEL)
                        time datetime=(post.created_at) { (post.created_at_localized(self.offset)) }
                    }
                }
                p class="post-content" style="white-space: pre-wrap" { (post.content) }
            }
        }
    }
}

/// Placeholder shown when there is nothing to list.
#[derive(Debug, Clone)]
pub struct EmptyState<'a> {
    pub message: &'a str,
}

impl<'a> EmptyState<'a> {
    /// Create a new empty state.
    #[must_use]
    pub const fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// The "no posts yet" invitation.
    #[must_use]
    pub const fn no_posts() -> Self {
        Self {
            message: EMPTY_PLACEHOLDER,
        }
    }
}

impl Render for EmptyState<'_> {
    fn render(&self) -> Markup {
        html! {
            p class="empty-state" { (self.message) }
        }
    }
}

/// Every post in order, or the empty state.
#[derive(Debug, Clone)]
pub struct PostList<'a> {
    pub posts: &'a [Post],
    pub offset: FixedOffset,
}

impl<'a> PostList<'a> {
    #[must_use]
    pub const fn new(posts: &'a [Post], offset: FixedOffset) -> Self {
        Self { posts, offset }
    }
}

impl Render for PostList<'_> {
    fn render(&self) -> Markup {
        html! {
            @if self.posts.is_empty() {
                (EmptyState::no_posts())
            } @else {
                div class="post-list" {
                    @for post in self.posts {
                        (PostCard::new(post, self.offset))
                    }
                }
            }
        }
    }
}
