use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Form,
    Div,
    Heading,
    Label,
    Input,
    Span,
    Icon,
    Button,
}

/// The `type` attribute of an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    Email,
    Date,
    Radio,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Date => "date",
            Self::Radio => "radio",
        }
    }

    /// Whether typed characters edit the value of this input.
    pub fn is_textual(&self) -> bool {
        !matches!(self, Self::Radio)
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,

    // Input state
    pub kind: Option<InputKind>,
    pub name: Option<String>,
    pub value: String,
    pub checked: bool,
    pub placeholder: Option<String>,

    // Content
    /// Static text for labels, headings, buttons and radio captions.
    pub text: String,
    /// Markup written at runtime (error slots).
    pub inner_html: String,
    pub children: Vec<Element>,

    // Interaction
    pub focusable: bool,
}

impl Element {
    fn new(tag: Tag, prefix: &str) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            classes: Vec::new(),
            kind: None,
            name: None,
            value: String::new(),
            checked: false,
            placeholder: None,
            text: String::new(),
            inner_html: String::new(),
            children: Vec::new(),
            focusable: false,
        }
    }

    pub fn form() -> Self {
        Self::new(Tag::Form, "form")
    }

    pub fn div() -> Self {
        Self::new(Tag::Div, "div")
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(Tag::Heading, "heading")
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(Tag::Label, "label")
        }
    }

    pub fn span() -> Self {
        Self::new(Tag::Span, "span")
    }

    pub fn icon() -> Self {
        Self {
            focusable: true,
            ..Self::new(Tag::Icon, "icon")
        }
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            focusable: true,
            ..Self::new(Tag::Button, "button")
        }
    }

    /// Create an input element of the given kind.
    pub fn input(kind: InputKind) -> Self {
        Self {
            kind: Some(kind),
            focusable: true,
            ..Self::new(Tag::Input, "input")
        }
    }

    /// Create a radio option belonging to the group `name`.
    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::input(InputKind::Radio).name(name).value(value)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    // Input state
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }

    // Class list
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Adding a class that is already present is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class, returning whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    pub fn is_input(&self) -> bool {
        self.tag == Tag::Input
    }

    /// Whether this element accepts typed text.
    pub fn accepts_text(&self) -> bool {
        self.kind.is_some_and(|k| k.is_textual())
    }
}
