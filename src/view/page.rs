//! The blog page: compose form, notification and post list.

use chrono::FixedOffset;
use maud::{html, Markup, Render};

use super::{BlogView, Draft, Notice};
use crate::components::{
    Alert, BaseLayout, Button, Form, FormGroup, Input, Notification, PostList, TextArea,
};
use crate::constants::{PUBLISH_FAILURE, PUBLISH_SUCCESS};

pub(super) fn render_blog_page(view: &BlogView, offset: FixedOffset) -> Markup {
    let content = html! {
        @if let Some(notice) = view.notice() {
            (NoticeDialog(notice))
        }

        (ComposeForm(view.draft()))

        hr;

        section class="posts" {
            h2 { "文章列表" }
            (PostList::new(view.posts(), offset))
        }
    };

    BaseLayout::new("首页").render(content)
}

struct NoticeDialog(Notice);

impl Render for NoticeDialog {
    fn render(&self) -> Markup {
        let alert = match self.0 {
            Notice::Published => Alert::success(PUBLISH_SUCCESS),
            Notice::PublishFailed => Alert::error(PUBLISH_FAILURE),
        };
        Notification::new(alert).dismiss_label("确定").render()
    }
}

/// The new-post form, pre-filled with the draft.
struct ComposeForm<'a>(&'a Draft);

impl Render for ComposeForm<'_> {
    fn render(&self) -> Markup {
        let draft = self.0;
        let fields = html! {
            h2 { "撰写新文章" }
            (FormGroup::new(
                "标题",
                "title",
                Input::text("title")
                    .id("title")
                    .value(&draft.title)
                    .placeholder("输入文章标题...")
                    .autocomplete("off")
                    .required()
                    .render(),
            ))
            (FormGroup::new(
                "内容",
                "content",
                TextArea::new("content")
                    .id("content")
                    .value(&draft.content)
                    .placeholder("输入文章内容...")
                    .rows(5)
                    .required()
                    .render(),
            ))
            (Button::primary("发布文章").r#type("submit"))
        };

        Form::post("/", fields).class("new-post").id("new-post").render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Post, PostId};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_empty_view_renders_placeholder_and_blank_form() {
        let html = BlogView::new().render(utc()).into_string();
        assert!(html.contains("还没有文章，赶快写一篇吧！"));
        assert!(!html.contains(r#"class="post""#));
        assert!(!html.contains("<dialog"));
        assert!(html.contains(r#"placeholder="输入文章标题...""#));
        assert!(html.contains(r#"name="content""#));
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_draft_is_echoed_into_form() {
        let view = BlogView::with_draft(Draft::new("Keep <me>", "body\ntext"));
        let html = view.render(utc()).into_string();
        assert!(html.contains(r#"value="Keep &lt;me&gt;""#));
        assert!(html.contains(">\nbody\ntext</textarea>"));
    }

    #[test]
    fn test_notices() {
        let mut view = BlogView::new();
        view.notice = Some(Notice::Published);
        let html = view.render(utc()).into_string();
        assert!(html.contains("<dialog"));
        assert!(html.contains("文章发布成功！"));

        view.notice = Some(Notice::PublishFailed);
        let html = view.render(utc()).into_string();
        assert!(html.contains("发布失败，请检查控制台日志。"));
        assert!(html.contains(r#"class="error""#));
    }

    #[test]
    fn test_posts_listed() {
        let view = BlogView {
            posts: vec![Post {
                id: PostId::Number(1.into()),
                title: "Hello".to_string(),
                content: "World\nLine2".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
            }],
            ..BlogView::default()
        };
        let html = view.render(utc()).into_string();
        assert!(!html.contains("还没有文章"));
        assert!(html.contains(r#"<a href="/posts/1">Hello</a>"#));
        assert!(html.contains("World\nLine2"));
    }
}
