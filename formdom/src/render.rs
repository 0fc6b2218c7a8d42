//! Turn a document into styled text lines.
//!
//! Containers carrying a `valid` or `invalid` class tint everything inside
//! them. Divs with the `inline` class lay their children out on one line;
//! everything else stacks vertically.

use crate::document::Document;
use crate::element::{Element, InputKind, Tag};
use crate::text::fit_to_width;

/// Width of the text area drawn for a text input, in cells.
pub const INPUT_WIDTH: usize = 36;

const MASK: char = '•';
const CURSOR: char = '▏';
const WARNING_GLYPH: char = '⚠';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Muted,
    Accent,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
    pub reversed: bool,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
            reversed: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// The line's text without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Render the whole document. `focused` is highlighted and shows a cursor.
pub fn render_document(doc: &Document, focused: Option<&str>) -> Vec<Line> {
    let mut lines = Vec::new();
    render_block(doc.root(), Tone::Normal, focused, &mut lines);
    lines
}

fn state_tone(element: &Element, inherited: Tone) -> Tone {
    if element.has_class("invalid") {
        Tone::Invalid
    } else if element.has_class("valid") {
        Tone::Valid
    } else {
        inherited
    }
}

fn render_block(element: &Element, tone: Tone, focused: Option<&str>, out: &mut Vec<Line>) {
    let tone = state_tone(element, tone);
    match element.tag {
        Tag::Form | Tag::Div if element.has_class("inline") => {
            let spans = element
                .children
                .iter()
                .flat_map(|child| render_inline(child, tone, focused))
                .collect();
            out.push(Line { spans });
        }
        Tag::Form | Tag::Div => {
            for child in &element.children {
                render_block(child, tone, focused, out);
            }
        }
        _ => out.push(Line {
            spans: render_inline(element, tone, focused),
        }),
    }
}

fn render_inline(element: &Element, tone: Tone, focused: Option<&str>) -> Vec<Span> {
    let is_focused = focused == Some(element.id.as_str());
    match element.tag {
        Tag::Heading => vec![Span::new(element.text.clone(), Tone::Accent).bold()],
        Tag::Label => vec![Span::new(element.text.clone(), tone).bold()],
        Tag::Input => vec![render_input(element, tone, is_focused)],
        Tag::Icon => {
            let glyph = if element.has_class("fa-eye") { " ◉ " } else { " ◌ " };
            vec![Span::new(glyph, Tone::Muted).reversed(is_focused)]
        }
        Tag::Button => {
            vec![Span::new(format!("[ {} ]", element.text), Tone::Accent)
                .bold()
                .reversed(is_focused)]
        }
        Tag::Span => {
            let text = if element.inner_html.is_empty() {
                element.text.clone()
            } else {
                html_to_text(&element.inner_html)
            };
            vec![Span::new(text, Tone::Invalid)]
        }
        Tag::Form | Tag::Div => {
            let tone = state_tone(element, tone);
            element
                .children
                .iter()
                .flat_map(|child| render_inline(child, tone, focused))
                .collect()
        }
    }
}

fn render_input(element: &Element, tone: Tone, is_focused: bool) -> Span {
    if element.kind == Some(InputKind::Radio) {
        let marker = if element.checked { "(•)" } else { "( )" };
        return Span::new(format!("{} {}  ", marker, element.text), tone).reversed(is_focused);
    }

    let (shown, tone) = if element.value.is_empty() {
        let placeholder = element.placeholder.clone().unwrap_or_default();
        let tone = if tone == Tone::Normal { Tone::Muted } else { tone };
        (placeholder, tone)
    } else if element.kind == Some(InputKind::Password) {
        (element.value.chars().map(|_| MASK).collect(), tone)
    } else {
        (element.value.clone(), tone)
    };

    let mut content = shown;
    if is_focused {
        content.push(CURSOR);
    }
    Span::new(format!("[{}]", fit_to_width(&content, INPUT_WIDTH)), tone).bold()
}

/// Strip markup from an HTML fragment, rendering the exclamation icon as a glyph.
pub fn html_to_text(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(end) = rest[start..].find('>') else {
            // Unterminated tag, keep the remainder as text.
            out.push_str(&rest[start..]);
            return out;
        };
        let tag = &rest[start + 1..start + end];
        if tag.starts_with('i') && tag.contains("circle-exclamation") {
            out.push(WARNING_GLYPH);
        }
        rest = &rest[start + end + 1..];
    }
    out.push_str(rest);

    out.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_icon_and_message() {
        let html = r#"<i class="fa-solid fa-circle-exclamation"></i> Data inválida!"#;
        assert_eq!(html_to_text(html), "⚠ Data inválida!");
    }

    #[test]
    fn test_html_to_text_plain() {
        assert_eq!(html_to_text(""), "");
        assert_eq!(html_to_text("a &amp; b"), "a & b");
        assert_eq!(html_to_text("<b>x"), "x");
    }

    #[test]
    fn test_password_is_masked() {
        let doc = Document::new(
            Element::div().child(Element::input(InputKind::Password).id("p").value("abc")),
        );
        let lines = render_document(&doc, None);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].plain_text().starts_with("[•••"));
        assert!(!lines[0].plain_text().contains("abc"));
    }

    #[test]
    fn test_invalid_container_tints_children() {
        let doc = Document::new(
            Element::div()
                .class("input-box")
                .class("invalid")
                .child(Element::label("Nome"))
                .child(Element::input(InputKind::Text).value("x")),
        );
        let lines = render_document(&doc, None);
        assert!(lines
            .iter()
            .flat_map(|l| &l.spans)
            .all(|s| s.tone == Tone::Invalid));
    }

    #[test]
    fn test_inline_div_renders_one_line() {
        let doc = Document::new(
            Element::div()
                .class("inline")
                .child(Element::radio("gender", "f").text("Feminino").checked(true))
                .child(Element::radio("gender", "m").text("Masculino")),
        );
        let lines = render_document(&doc, None);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].plain_text(), "(•) Feminino  ( ) Masculino  ");
    }
}
