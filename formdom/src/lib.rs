pub mod document;
pub mod element;
pub mod event;
pub mod focus;
pub mod render;
pub mod terminal;
pub mod text;

pub use document::Document;
pub use element::{Element, InputKind, Tag};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, FocusState};
pub use render::{html_to_text, render_document, Line, Span, Tone};
pub use terminal::Terminal;
