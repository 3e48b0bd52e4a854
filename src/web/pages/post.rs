//! Single-post page templates using maud.
//!
//! - Post detail page
//! - Not-found page for an unknown id
//! - Unavailable page when the remote service cannot be reached

use chrono::FixedOffset;
use maud::{html, Markup};

use crate::components::{Alert, BaseLayout, Button, EmptyState, PostCard};
use crate::models::{Post, PostId};

/// Render one post on its own page.
#[must_use]
pub fn render_post_detail_page(post: &Post, offset: FixedOffset) -> Markup {
    let content = html! {
        (PostCard::new(post, offset).without_link())
        p { (Button::outline("返回列表").href("/")) }
    };

    BaseLayout::new(&post.title).render(content)
}

/// Render the page for an id the remote service does not know.
#[must_use]
pub fn render_post_not_found_page(id: &PostId) -> Markup {
    let message = format!("文章 {id} 不存在。");
    let content = html! {
        (EmptyState::new(&message))
        p { (Button::outline("返回列表").href("/")) }
    };

    BaseLayout::new("未找到").render(content)
}

/// Render the page shown when the remote service failed.
#[must_use]
pub fn render_unavailable_page() -> Markup {
    let content = html! {
        (Alert::error("暂时无法加载文章，请稍后再试。").with_title("加载失败"))
        p { (Button::outline("返回列表").href("/")) }
    };

    BaseLayout::new("加载失败").render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: PostId::Number(3.into()),
            title: "Test Post Title".to_string(),
            content: "first\n\n  indented".to_string(),
            created_at: "2024-01-15T12:00:00".to_string(),
        }
    }

    #[test]
    fn test_render_post_detail_page() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let html = render_post_detail_page(&sample_post(), utc).into_string();

        assert!(html.contains("<title>Test Post Title - 我的个人博客</title>"));
        assert!(html.contains(r#"<h3 class="post-title">Test Post Title</h3>"#));
        assert!(html.contains("first\n\n  indented"));
        assert!(html.contains("2024/1/15 12:00:00"));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn test_render_post_not_found_page() {
        let html = render_post_not_found_page(&PostId::Number(42.into())).into_string();
        assert!(html.contains("文章 42 不存在。"));
    }

    #[test]
    fn test_render_unavailable_page() {
        let html = render_unavailable_page().into_string();
        assert!(html.contains(r#"class="error""#));
        assert!(html.contains("<strong>加载失败</strong>"));
    }
}
