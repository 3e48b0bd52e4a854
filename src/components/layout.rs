//! Base layout components for the web UI.
//!
//! The HTML skeleton, header and footer shared by every page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::constants::SITE_TITLE;

/// Page stylesheet. Inlined; the client serves no static files.
const PAGE_STYLE: &str = r"
body { font-family: system-ui, sans-serif; margin: 0; line-height: 1.5; }
.container { max-width: 800px; margin: 0 auto; padding: 20px; }
form.new-post { margin-bottom: 2rem; padding: 1rem; border: 1px solid #ccc; }
.form-group { margin-bottom: 1rem; }
.form-group label { display: block; font-weight: 600; }
.form-group input, .form-group textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
.btn { padding: 0.5rem 1.5rem; cursor: pointer; }
article.post { border: 1px solid #eee; padding: 1rem; margin-bottom: 1rem; }
article.success { color: #155724; }
article.error { color: #721c24; }
dialog.notification { border: 1px solid #ccc; border-radius: 4px; padding: 1rem 1.5rem; }
";

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h2 { "Posts" } };
/// let page = BaseLayout::new("Posts").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="zh-CN" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) " - " (SITE_TITLE) }
                    style { (PreEscaped(PAGE_STYLE)) }
                }
                body {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    fn render_header() -> Markup {
        html! {
            header class="container" {
                h1 { a href="/" { (SITE_TITLE) } }
            }
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small { (SITE_TITLE) }
            }
        }
    }
}
