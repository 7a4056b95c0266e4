//! The interactive program runner.
//!
//! A [`Model`] is a small terminal application: it is initialised once, fed
//! input events one at a time and asked to render itself after every change.
//! A [`Program`] owns the terminal for the duration of a single run and drives
//! one model until it asks to quit.
//!
//! Ctrl+C always ends the run, whatever the model does with other keys.

pub mod backend;
pub mod frame;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use backend::{Backend, TerminalSession};
use frame::Frame;
use shelf_core::error::Result;

/// What the program should do after a model handled something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// An interactive terminal application.
pub trait Model {
    /// Called once before the first event. Errors end the run.
    fn init(&mut self) -> Result<Step> {
        Ok(Step::Continue)
    }

    /// Handles one input event. The first event is always the terminal size
    /// as an [`Event::Resize`].
    fn update(&mut self, event: &Event) -> Result<Step>;

    fn view(&self) -> Frame;

    /// Text to leave on the normal screen after the run, if any.
    fn summary(&self) -> Option<String> {
        None
    }
}

/// Runs a model to completion.
pub trait Runner {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be used or the model fails.
    fn run(&mut self, model: Box<dyn Model>) -> Result<()>;
}

/// Drives models on a [`Backend`].
pub struct Program<B: Backend> {
    backend: B,
}

impl<B: Backend> Program<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn event_loop(session: &mut TerminalSession<'_, B>, model: &mut dyn Model) -> Result<()> {
        let mut step = model.init()?;

        if step == Step::Continue {
            let (width, height) = session.size()?;
            step = model.update(&Event::Resize(width, height))?;
        }

        loop {
            session.draw(&model.view())?;

            if step == Step::Quit {
                return Ok(());
            }

            let event = session.next_event()?;

            if let Event::Key(key_event) = &event {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }

                if is_interrupt(key_event) {
                    debug!("Interrupted");
                    return Ok(());
                }
            }

            step = model.update(&event)?;
        }
    }
}

impl<B: Backend> Runner for Program<B> {
    fn run(&mut self, mut model: Box<dyn Model>) -> Result<()> {
        {
            let mut session = TerminalSession::open(&mut self.backend)?;
            Self::event_loop(&mut session, model.as_mut())?;
        }

        if let Some(summary) = model.summary() {
            self.backend.print(&summary)?;
        }

        Ok(())
    }
}

fn is_interrupt(key_event: &KeyEvent) -> bool {
    key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::backend::ScriptedBackend;
    use super::*;
    use shelf_core::error::Error;

    /// Counts key presses, quits on `q`.
    #[derive(Default)]
    struct Counter {
        presses: usize,
        width: u16,
        fail_init: bool,
    }

    impl Model for Counter {
        fn init(&mut self) -> Result<Step> {
            if self.fail_init {
                return Err(Error::Runner("init failed".to_string()));
            }
            Ok(Step::Continue)
        }

        fn update(&mut self, event: &Event) -> Result<Step> {
            match event {
                Event::Resize(width, _) => self.width = *width,
                Event::Key(key) if key.code == KeyCode::Char('q') => return Ok(Step::Quit),
                Event::Key(_) => self.presses += 1,
                _ => {}
            }
            Ok(Step::Continue)
        }

        fn view(&self) -> Frame {
            let mut frame = Frame::new();
            frame.plain(format!("{} presses at width {}", self.presses, self.width));
            frame
        }

        fn summary(&self) -> Option<String> {
            Some(format!("pressed {}", self.presses))
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_runs_until_model_quits() {
        let backend = ScriptedBackend::new([key('a'), key('b'), key('q'), key('z')]).with_size(40, 10);
        let mut program = Program::new(backend);

        program.run(Box::<Counter>::default()).unwrap();

        let backend = program.backend();
        assert_eq!(backend.frames().len(), 4);
        assert_eq!(backend.last_frame().unwrap().text(), "2 presses at width 40");
        assert_eq!(backend.printed(), ["pressed 2"]);
        assert_eq!(backend.sessions(), (1, 1));
    }

    #[test]
    fn test_ctrl_c_ends_the_run() {
        let interrupt = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let mut program = Program::new(ScriptedBackend::new([key('a'), interrupt]));

        program.run(Box::<Counter>::default()).unwrap();

        assert_eq!(program.backend().sessions(), (1, 1));
        assert_eq!(program.backend().printed(), ["pressed 1"]);
    }

    #[test]
    fn test_terminal_released_when_model_fails() {
        let mut program = Program::new(ScriptedBackend::new([]));
        let model = Counter {
            fail_init: true,
            ..Counter::default()
        };

        let result = program.run(Box::new(model));

        assert!(matches!(result, Err(Error::Runner(_))));
        assert_eq!(program.backend().sessions(), (1, 1));
        assert!(program.backend().printed().is_empty());
    }

    #[test]
    fn test_enter_failure_is_reported() {
        let mut program = Program::new(ScriptedBackend::new([key('q')]).failing_enter());

        let result = program.run(Box::<Counter>::default());

        assert!(matches!(result, Err(Error::Runner(_))));
        assert!(program.backend().frames().is_empty());
    }

    #[test]
    fn test_exhausted_events_fail_the_run() {
        let mut program = Program::new(ScriptedBackend::new([key('a')]));

        let result = program.run(Box::<Counter>::default());

        assert!(result.is_err());
        assert_eq!(program.backend().sessions(), (1, 1));
    }
}
