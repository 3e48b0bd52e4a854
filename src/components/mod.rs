//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout
//! - `alert`: Inline alerts and the modal notification
//! - `button`: Button and link-button
//! - `card`: Post cards, the post list and its empty state
//! - `form`: Form elements

pub mod alert;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;

pub use alert::{Alert, AlertVariant, Notification};
pub use button::{Button, ButtonVariant};
pub use card::{EmptyState, PostCard, PostList};
pub use form::{Form, FormGroup, Input, TextArea};
pub use layout::BaseLayout;
