//! Alert and notification components.
//!
//! `Alert` is an inline message; `Notification` wraps one in an open modal
//! dialog that the reader has to dismiss.

use maud::{html, Markup, Render};

/// Alert variant types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Error,
}

impl AlertVariant {
    /// Get the CSS class for the alert article element.
    #[must_use]
    pub const fn article_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// ARIA role: errors interrupt, successes are announced politely.
    #[must_use]
    pub const fn role(&self) -> &'static str {
        match self {
            Self::Success => "status",
            Self::Error => "alert",
        }
    }
}

/// An alert message component.
///
/// # Example
///
/// ```ignore
/// use crate::components::alert::Alert;
///
/// let alert = Alert::error("Could not reach the server").with_title("Error");
/// ```
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub variant: AlertVariant,
    pub title: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new alert with the given variant and message.
    #[must_use]
    pub const fn new(variant: AlertVariant, message: &'a str) -> Self {
        Self {
            variant,
            title: None,
            message,
        }
    }

    /// Create a success alert.
    #[must_use]
    pub const fn success(message: &'a str) -> Self {
        Self::new(AlertVariant::Success, message)
    }

    /// Create an error alert.
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    /// Add a title to the alert.
    #[must_use]
    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl Render for Alert<'_> {
    fn render(&self) -> Markup {
        html! {
            article class=(self.variant.article_class()) role=(self.variant.role()) {
                @if let Some(title) = self.title {
                    strong { (title) }
                    " "
                }
                (self.message)
            }
        }
    }
}

/// A modal notification: an open `<dialog>` holding an alert and a
/// dismiss button.
///
/// Dismissal uses `method="dialog"`, so closing it never reaches the server.
#[derive(Debug, Clone)]
pub struct Notification<'a> {
    pub alert: Alert<'a>,
    pub dismiss_label: &'a str,
}

impl<'a> Notification<'a> {
    /// Wrap an alert in a modal.
    #[must_use]
    pub const fn new(alert: Alert<'a>) -> Self {
        Self {
            alert,
            dismiss_label: "OK",
        }
    }

    /// Change the dismiss button label.
    #[must_use]
    pub const fn dismiss_label(mut self, label: &'a str) -> Self {
        self.dismiss_label = label;
        self
    }
}

impl Render for Notification<'_> {
    fn render(&self) -> Markup {
        html! {
            dialog id="notification" class="notification" open {
                (self.alert)
                form method="dialog" {
                    button type="submit" autofocus { (self.dismiss_label) }
                }
            }
        }
    }
}
