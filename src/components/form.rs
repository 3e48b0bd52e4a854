//! Form components for maud templates.

use maud::{html, Markup, Render};

/// A form container element.
#[derive(Debug)]
pub struct Form<'a> {
    /// Form action URL
    pub action: &'a str,
    /// HTTP method ("get" or "post")
    pub method: &'a str,
    /// Form content (inputs, buttons, etc.)
    pub content: Markup,
    /// Optional CSS class
    pub class: Option<&'a str>,
    /// Optional form ID
    pub id: Option<&'a str>,
}

impl<'a> Form<'a> {
    /// Create a new form with the given action and method.
    #[must_use]
    pub fn new(action: &'a str, method: &'a str, content: Markup) -> Self {
        Self {
            action,
            method,
            content,
            class: None,
            id: None,
        }
    }

    /// Create a POST form.
    #[must_use]
    pub fn post(action: &'a str, content: Markup) -> Self {
        Self::new(action, "post", content)
    }

    /// Set the CSS class.
    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the form ID.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for Form<'_> {
    fn render(&self) -> Markup {
        html! {
            form
                action=(self.action)
                method=(self.method)
                class=[self.class]
                id=[self.id]
            {
                (self.content)
            }
        }
    }
}

/// An input element.
#[derive(Debug, Clone)]
pub struct Input<'a> {
    /// Input name attribute
    pub name: &'a str,
    /// Input type ("text", "hidden", ...)
    pub r#type: &'a str,
    /// Current value
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Whether the field is required
    pub required: bool,
    /// Optional ID attribute
    pub id: Option<&'a str>,
    /// Autocomplete attribute
    pub autocomplete: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Create a new input with the given name and type.
    #[must_use]
    pub fn new(name: &'a str, r#type: &'a str) -> Self {
        Self {
            name,
            r#type,
            value: None,
            placeholder: None,
            required: false,
            id: None,
            autocomplete: None,
        }
    }

    /// Create a text input.
    #[must_use]
    pub fn text(name: &'a str) -> Self {
        Self::new(name, "text")
    }

    /// Set the value. Empty values render no attribute.
    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value).filter(|v| !v.is_empty());
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Mark as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the ID.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the autocomplete attribute.
    #[must_use]
    pub fn autocomplete(mut self, autocomplete: &'a str) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }
}

impl Render for Input<'_> {
    fn render(&self) -> Markup {
        html! {
            input
                type=(self.r#type)
                name=(self.name)
                value=[self.value]
                placeholder=[self.placeholder]
                required[self.required]
                id=[self.id]
                autocomplete=[self.autocomplete];
        }
    }
}

/// A textarea element.
#[derive(Debug)]
pub struct TextArea<'a> {
    /// Textarea name attribute
    pub name: &'a str,
    /// Current value/content
    pub value: Option<&'a str>,
    /// Placeholder text
    pub placeholder: Option<&'a str>,
    /// Number of visible rows
    pub rows: Option<u32>,
    /// Whether the field is required
    pub required: bool,
    /// Optional ID attribute
    pub id: Option<&'a str>,
}

impl<'a> TextArea<'a> {
    /// Create a new textarea with the given name.
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            value: None,
            placeholder: None,
            rows: None,
            required: false,
            id: None,
        }
    }

    /// Set the value/content.
    #[must_use]
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the number of rows.
    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Mark as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the ID.
    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }
}

impl Render for TextArea<'_> {
    fn render(&self) -> Markup {
        html! {
            textarea
                name=(self.name)
                placeholder=[self.placeholder]
                rows=[self.rows]
                required[self.required]
                id=[self.id]
            {
                // A newline right after the start tag is dropped by parsers,
                // so emit one to keep a leading newline in the value.
                "\n"
                @if let Some(value) = self.value {
                    (value)
                }
            }
        }
    }
}

/// A labelled form field wrapper.
#[derive(Debug)]
pub struct FormGroup<'a> {
    /// Label text
    pub label: &'a str,
    /// Input ID (also used for label's `for` attribute)
    pub id: &'a str,
    /// The input element
    pub input: Markup,
}

impl<'a> FormGroup<'a> {
    /// Create a new form group.
    #[must_use]
    pub fn new(label: &'a str, id: &'a str, input: Markup) -> Self {
        Self { label, id, input }
    }
}

impl Render for FormGroup<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="form-group" {
                label for=(self.id) { (self.label) }
                (self.input)
            }
        }
    }
}
