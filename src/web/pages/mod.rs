//! Maud-based page templates for pages other than the blog page itself.

pub mod post;

pub use post::{render_post_detail_page, render_post_not_found_page, render_unavailable_page};
