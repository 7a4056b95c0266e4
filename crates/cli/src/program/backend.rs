//! Terminal backends the [`Program`](super::Program) draws on and reads from.

use std::collections::VecDeque;
use std::io::{stdout, Stdout, Write};
use std::ops::{Deref, DerefMut};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::debug;

use super::frame::{Frame, Tone};
use shelf_core::error::{Error, Result};

/// A terminal a program can take over for one run.
pub trait Backend {
    /// Takes exclusive control of the terminal.
    fn enter(&mut self) -> Result<()>;

    /// Gives the terminal back. Must be safe to call after a partial `enter`.
    fn leave(&mut self) -> Result<()>;

    /// Width and height in cells.
    fn size(&self) -> Result<(u16, u16)>;

    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Blocks until the next input event.
    fn next_event(&mut self) -> Result<Event>;

    /// Writes `text` to the normal screen once the terminal has been released.
    fn print(&mut self, text: &str) -> Result<()>;
}

/// Exclusive hold on a backend's terminal, released when dropped.
pub struct TerminalSession<'a, B: Backend> {
    backend: &'a mut B,
}

impl<'a, B: Backend> TerminalSession<'a, B> {
    /// # Errors
    ///
    /// Returns the backend's error if the terminal could not be taken over; in
    /// that case whatever was acquired has already been released.
    pub fn open(backend: &'a mut B) -> Result<Self> {
        if let Err(e) = backend.enter() {
            let _ = backend.leave();
            return Err(e);
        }

        Ok(Self { backend })
    }
}

impl<B: Backend> Deref for TerminalSession<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: Backend> DerefMut for TerminalSession<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: Backend> Drop for TerminalSession<'_, B> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            debug!("Failed to restore terminal: {e}");
        }
    }
}

/// The real terminal, driven through crossterm.
pub struct CrosstermBackend {
    stdout: Stdout,
}

impl CrosstermBackend {
    #[must_use]
    pub fn new() -> Self {
        Self { stdout: stdout() }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        enable_raw_mode()?;
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        let (width, height) = terminal::size()?;
        let width = width as usize;

        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;

        for (row, line) in frame.lines().iter().take(height as usize).enumerate() {
            let content: String = line.text.chars().take(width).collect();
            let padding = " ".repeat(width.saturating_sub(content.chars().count()));

            queue!(self.stdout, MoveTo(0, row as u16))?;

            match line.tone {
                Tone::Plain => {}
                Tone::Header => queue!(self.stdout, SetBackgroundColor(Color::DarkGreen))?,
                Tone::Selected => queue!(
                    self.stdout,
                    SetAttribute(Attribute::Bold),
                    SetBackgroundColor(Color::DarkBlue),
                    SetForegroundColor(Color::Yellow),
                )?,
                Tone::Muted => queue!(self.stdout, SetForegroundColor(Color::DarkGrey))?,
                Tone::Error => queue!(self.stdout, SetForegroundColor(Color::Red))?,
            }

            queue!(self.stdout, Print(content))?;
            if matches!(line.tone, Tone::Header | Tone::Selected) {
                queue!(self.stdout, Print(padding))?;
            }

            queue!(
                self.stdout,
                SetAttribute(Attribute::Reset),
                SetBackgroundColor(Color::Reset),
                SetForegroundColor(Color::Reset),
            )?;
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn next_event(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.stdout, "{text}")?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// A headless backend that replays a fixed list of events and records what
/// was drawn. Useful for exercising models without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    events: VecDeque<Event>,
    size: (u16, u16),
    fail_enter: bool,
    frames: Vec<Frame>,
    printed: Vec<String>,
    entered: usize,
    left: usize,
}

impl ScriptedBackend {
    #[must_use]
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            size: (80, 24),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    /// Makes `enter` fail, as it would without a usable terminal.
    #[must_use]
    pub fn failing_enter(mut self) -> Self {
        self.fail_enter = true;
        self
    }

    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    #[must_use]
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    /// How many times the terminal was taken over and released.
    #[must_use]
    pub fn sessions(&self) -> (usize, usize) {
        (self.entered, self.left)
    }
}

impl Backend for ScriptedBackend {
    fn enter(&mut self) -> Result<()> {
        if self.fail_enter {
            return Err(Error::Runner("could not open a terminal".to_string()));
        }
        self.entered += 1;
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        self.left += 1;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(self.size)
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn next_event(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| Error::Runner("event script exhausted".to_string()))
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.printed.push(text.to_string());
        Ok(())
    }
}
