use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::document::Document;
use crate::element::{Element, Tag};
use crate::event::{Event, Key, Modifiers};

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.apply(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.apply(new_focus)
    }

    fn apply(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            log::debug!("focus -> {}", new_focus);
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Translate raw terminal events into targeted events.
    ///
    /// Tab/Shift+Tab are consumed for focus navigation. Enter or Space on a
    /// focused element that does not take text becomes a `Click`, or a
    /// `Submit` when that element is a button inside a form.
    pub fn process_events(&mut self, raw: &[CrosstermEvent], doc: &Document) -> Vec<Event> {
        let mut events = Vec::new();

        for event in raw {
            match event {
                CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    let key = Key::from(key_event.code);
                    let modifiers = Modifiers::from(key_event.modifiers);

                    match key {
                        Key::Tab => {
                            self.focus_next(doc.root());
                            continue;
                        }
                        Key::BackTab => {
                            self.focus_prev(doc.root());
                            continue;
                        }
                        _ => {}
                    }

                    if matches!(key, Key::Enter | Key::Char(' ')) && modifiers.none() {
                        if let Some(activated) = self.activate(doc) {
                            events.push(activated);
                            continue;
                        }
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }
                CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => {}
            }
        }

        events
    }

    fn activate(&self, doc: &Document) -> Option<Event> {
        let id = self.focused.as_deref()?;
        let element = doc.get_element_by_id(id)?;
        if element.accepts_text() {
            return None;
        }

        if element.tag == Tag::Button {
            let form = crate::element::ancestry(doc.root(), id)?
                .into_iter()
                .rev()
                .find(|el| el.tag == Tag::Form)
                .map(|el| el.id.clone());
            if let Some(form) = form {
                return Some(Event::Submit { form });
            }
        }

        Some(Event::Click {
            target: id.to_string(),
        })
    }
}

/// Ids of focusable elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    crate::element::descendants(root)
        .into_iter()
        .filter(|el| el.focusable)
        .map(|el| el.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::InputKind;

    fn sample() -> Element {
        Element::form()
            .id("form")
            .child(Element::input(InputKind::Text).id("a"))
            .child(Element::label("not focusable").id("l"))
            .child(Element::input(InputKind::Text).id("b"))
            .child(Element::button("Send").id("send"))
    }

    #[test]
    fn test_focus_cycles_forward_and_back() {
        let root = sample();
        let mut focus = FocusState::new();

        assert_eq!(focus.focus_next(&root).as_deref(), Some("a"));
        assert_eq!(focus.focus_next(&root).as_deref(), Some("b"));
        assert_eq!(focus.focus_next(&root).as_deref(), Some("send"));
        assert_eq!(focus.focus_next(&root).as_deref(), Some("a"));
        assert_eq!(focus.focus_prev(&root).as_deref(), Some("send"));
    }

    #[test]
    fn test_collect_focusable_skips_labels() {
        assert_eq!(collect_focusable(&sample()), vec!["a", "b", "send"]);
    }

    #[test]
    fn test_enter_on_button_submits_form() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let doc = Document::new(sample());
        let mut focus = FocusState::new();
        focus.focus("send");

        let raw = [CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::NONE,
        ))];
        let events = focus.process_events(&raw, &doc);
        assert_eq!(
            events,
            vec![Event::Submit {
                form: "form".to_string()
            }]
        );
    }

    #[test]
    fn test_typing_targets_focused_input() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let doc = Document::new(sample());
        let mut focus = FocusState::new();
        focus.focus("a");

        let raw = [CrosstermEvent::Key(KeyEvent::new(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
        ))];
        let events = focus.process_events(&raw, &doc);
        assert_eq!(
            events,
            vec![Event::Key {
                target: Some("a".to_string()),
                key: Key::Char(' '),
                modifiers: Modifiers::new(),
            }]
        );
    }
}
