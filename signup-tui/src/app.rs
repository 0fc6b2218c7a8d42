//! The registration page running in a terminal.
//!
//! The terminal takes the place of the browser. Key presses edit inputs,
//! Enter/Space activate radios, icons and the submit button, and a passing
//! submit ends the loop with the submitted values.

use std::io;

use formdom::{Event, FocusState, InputKind, Key, Line, Span, Terminal, Tone, render_document};
use log::{error, info};
use signup::page::registration_page;
use signup::{
    DomError, DomForm, FormSchema, GateOutcome, PasswordToggle, SubmitEvent, SubmitGate,
    Submission,
};

const HELP: &str = "Tab/Shift+Tab navegar · Enter ativar · Ctrl+S enviar · Esc sair";

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Status {
    Blocked(usize),
    Failed(String),
}

pub struct FormApp {
    form: DomForm,
    gate: SubmitGate,
    toggle: PasswordToggle,
    focus: FocusState,
    status: Option<Status>,
}

impl FormApp {
    pub fn new() -> Result<Self, DomError> {
        let schema = FormSchema::registration();
        let form = DomForm::new(registration_page());
        let toggle = PasswordToggle::attach(&form)?;

        let mut focus = FocusState::new();
        focus.focus_next(form.document().root());

        Ok(Self {
            form,
            gate: SubmitGate::new(schema),
            toggle,
            focus,
            status: None,
        })
    }

    /// The most recent submission, if the form was submitted.
    pub fn submission(&self) -> Option<&Submission> {
        self.form.submissions().last()
    }

    pub fn handle(&mut self, event: &Event) -> Control {
        match event {
            Event::Submit { .. } => self.submit(),
            Event::Click { target } => {
                self.click(target);
                Control::Continue
            }
            Event::Key {
                key: Key::Escape, ..
            } => Control::Quit,
            Event::Key {
                key: Key::Char('c'),
                modifiers,
                ..
            } if modifiers.ctrl => Control::Quit,
            Event::Key {
                key: Key::Char('s'),
                modifiers,
                ..
            } if modifiers.ctrl => self.submit(),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if !modifiers.ctrl && !modifiers.alt => {
                self.edit(target, *key);
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    fn submit(&mut self) -> Control {
        let mut event = SubmitEvent::new();
        match self.gate.handle(&mut self.form, &mut event) {
            Ok(GateOutcome::Submitted) => Control::Submitted,
            Ok(GateOutcome::Blocked(report)) => {
                if let Some(first) = report.first_invalid_field() {
                    info!("first invalid field: {}", first);
                }
                self.status = Some(Status::Blocked(report.errors().len()));
                Control::Continue
            }
            Err(e) => {
                error!("submit failed: {}", e);
                self.status = Some(Status::Failed(e.to_string()));
                Control::Continue
            }
        }
    }

    fn click(&mut self, target: &str) {
        let is_radio = self
            .form
            .document()
            .get_element_by_id(target)
            .is_some_and(|el| el.kind == Some(InputKind::Radio));
        if is_radio {
            self.form.document_mut().check_radio(target);
            return;
        }

        if let Err(e) = self.toggle.handle_click(&mut self.form, target) {
            error!("toggle failed: {}", e);
            self.status = Some(Status::Failed(e.to_string()));
        }
    }

    fn edit(&mut self, target: &str, key: Key) {
        let Some(input) = self.form.document_mut().get_element_by_id_mut(target) else {
            return;
        };
        if !input.accepts_text() {
            return;
        }
        match key {
            Key::Char(c) => input.value.push(c),
            Key::Backspace => {
                input.value.pop();
            }
            _ => {}
        }
    }

    pub fn lines(&self) -> Vec<Line> {
        let mut lines = render_document(self.form.document(), self.focus.focused());
        lines.push(Line::default());
        lines.push(Line {
            spans: vec![Span::new(HELP, Tone::Muted)],
        });

        let status = match &self.status {
            Some(Status::Blocked(count)) => {
                Span::new(format!("{} campo(s) com erro", count), Tone::Invalid)
            }
            Some(Status::Failed(message)) => Span::new(format!("Erro: {}", message), Tone::Invalid),
            None => Span::new("", Tone::Normal),
        };
        lines.push(Line {
            spans: vec![status],
        });
        lines
    }
}

/// Run the form until it is submitted or the user quits.
pub fn run() -> io::Result<Option<Submission>> {
    let mut app = FormApp::new().map_err(io::Error::other)?;
    let mut term = Terminal::new()?;

    loop {
        term.draw(&app.lines())?;

        let raw = term.poll(None)?;
        let events = app.focus.process_events(&raw, app.form.document());
        for event in &events {
            match app.handle(event) {
                Control::Continue => {}
                Control::Quit => {
                    info!("quit without submitting");
                    return Ok(None);
                }
                Control::Submitted => return Ok(app.submission().cloned()),
            }
        }
    }
}
