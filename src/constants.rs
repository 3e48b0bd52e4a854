//! Shared constants used across the application.

/// Base URL of the remote blog API.
///
/// Fixed at build time; the posts collection lives at `{API_BASE}/posts`.
pub const API_BASE: &str = "http://localhost:5000/api";

/// Page heading.
pub const SITE_TITLE: &str = "我的个人博客";

/// Shown in place of the post list when the remote service has no posts.
pub const EMPTY_PLACEHOLDER: &str = "还没有文章，赶快写一篇吧！";

/// Notification after a successful submission.
pub const PUBLISH_SUCCESS: &str = "文章发布成功！";

/// Notification after a failed submission.
pub const PUBLISH_FAILURE: &str = "发布失败，请检查控制台日志。";

/// Label in front of a post's localized creation time.
pub const PUBLISHED_AT_LABEL: &str = "发布时间: ";
