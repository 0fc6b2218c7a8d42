use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetForegroundColor},
    terminal,
};

use crate::render::{Line, Tone};
use crate::text::display_width;

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Redraw the screen with `lines`, clipped to the terminal size.
    pub fn draw(&mut self, lines: &[Line]) -> io::Result<()> {
        let (width, height) = terminal::size()?;

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;

        for (y, line) in lines.iter().take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(1, y as u16))?;
            let mut used = 0usize;

            for span in &line.spans {
                let span_width = display_width(&span.text);
                if used + span_width > width as usize {
                    break;
                }
                used += span_width;

                queue!(self.stdout, SetForegroundColor(tone_color(span.tone)))?;
                if span.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if span.reversed {
                    queue!(self.stdout, SetAttribute(Attribute::Reverse))?;
                }
                queue!(
                    self.stdout,
                    Print(&span.text),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }

        self.stdout.flush()
    }
}

fn tone_color(tone: Tone) -> CtColor {
    match tone {
        Tone::Normal => CtColor::Reset,
        Tone::Muted => CtColor::DarkGrey,
        Tone::Accent => CtColor::Cyan,
        Tone::Valid => CtColor::Green,
        Tone::Invalid => CtColor::Red,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
