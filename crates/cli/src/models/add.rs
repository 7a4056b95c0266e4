//! Form for appending a command to the catalog.

use std::fmt::{Display, Formatter};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use indexmap::IndexMap;
use log::{info, warn};

use crate::command::FlagMap;
use crate::flags::{value_of, Flag};
use crate::program::frame::{Frame, Tone};
use crate::program::{Model, Step};
use shelf_core::command_definitions::CommandDefinition;
use shelf_core::config::get_config_path;
use shelf_core::error::Result;
use shelf_core::file_handling::{append_command_definition, get_command_definitions_or_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Description,
    Command,
    WorkingDirectory,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Id => "ID",
            Field::Description => "Description",
            Field::Command => "Command",
            Field::WorkingDirectory => "Working directory",
        })
    }
}

pub struct AddModel {
    config_path: String,
    fields: IndexMap<Field, String>,
    /// Command words as given on the command line, until the field is edited
    args: Option<Vec<String>>,
    focus: usize,
    problem: Option<String>,
    saved: Option<CommandDefinition>,
}

impl AddModel {
    /// Pre-fills the form from the flags; `args` are the command's words.
    #[must_use]
    pub fn new(args: &[String], flags: &FlagMap) -> Self {
        let fields = IndexMap::from([
            (Field::Id, value_of(flags, Flag::Id).to_string()),
            (Field::Description, value_of(flags, Flag::Description).to_string()),
            (Field::Command, args.join(" ")),
            (
                Field::WorkingDirectory,
                value_of(flags, Flag::WorkingDirectory).to_string(),
            ),
        ]);

        Self {
            config_path: get_config_path(value_of(flags, Flag::ConfigPath)),
            fields,
            args: (!args.is_empty()).then(|| args.to_vec()),
            focus: 0,
            problem: None,
            saved: None,
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.fields.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn focused(&self) -> Field {
        *self
            .fields
            .get_index(self.focus)
            .map_or(&Field::Id, |(field, _)| field)
    }

    #[must_use]
    pub fn saved(&self) -> Option<&CommandDefinition> {
        self.saved.as_ref()
    }

    /// The definition the form currently describes.
    #[must_use]
    pub fn definition(&self) -> CommandDefinition {
        let optional = |field| {
            let value = self.value(field).trim();
            (!value.is_empty()).then(|| value.to_string())
        };

        let command = match &self.args {
            Some(args) => args.clone(),
            None => self
                .value(Field::Command)
                .split_whitespace()
                .map(ToString::to_string)
                .collect(),
        };

        CommandDefinition {
            command,
            id: optional(Field::Id),
            description: optional(Field::Description),
            working_directory: optional(Field::WorkingDirectory),
        }
    }

    fn focused_value(&mut self) -> Option<&mut String> {
        if self.focused() == Field::Command {
            self.args = None;
        }
        self.fields.get_index_mut(self.focus).map(|(_, value)| value)
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.fields.len();
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn save(&mut self) -> Step {
        let definition = self.definition();

        match append_command_definition(&self.config_path, definition.clone()) {
            Ok(_) => {
                info!("Saved `{definition}`");
                self.saved = Some(definition);
                Step::Quit
            }
            Err(e) => {
                warn!("Not saving: {e}");
                self.problem = Some(e.to_string());
                Step::Continue
            }
        }
    }

    fn handle_key(&mut self, key_event: &KeyEvent) -> Step {
        let control = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('s') if control => return self.save(),
            KeyCode::Esc => return Step::Quit,
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Enter => {
                if self.focus + 1 == self.fields.len() {
                    return self.save();
                }
                self.move_focus(true);
            }
            KeyCode::Backspace => {
                if let Some(value) = self.focused_value() {
                    value.pop();
                }
            }
            KeyCode::Char(c) if !control => {
                if let Some(value) = self.focused_value() {
                    value.push(c);
                }
            }
            _ => {}
        }

        Step::Continue
    }
}

impl Model for AddModel {
    fn init(&mut self) -> Result<Step> {
        // Fail before any typing if the catalog is unreadable
        get_command_definitions_or_empty(&self.config_path)?;
        Ok(Step::Continue)
    }

    fn update(&mut self, event: &Event) -> Result<Step> {
        match event {
            Event::Key(key_event) => Ok(self.handle_key(key_event)),
            _ => Ok(Step::Continue),
        }
    }

    fn view(&self) -> Frame {
        let mut frame = Frame::new();
        frame.push(
            Tone::Header,
            format!("  Add a command to {}", self.config_path),
        );

        let label_width = self
            .fields
            .keys()
            .map(|field| field.to_string().len())
            .max()
            .unwrap_or(0);

        for (position, (field, value)) in self.fields.iter().enumerate() {
            let label = format!("{:<label_width$}", field.to_string());
            if position == self.focus {
                frame.push(Tone::Selected, format!("> {label}  {value}_"));
            } else {
                frame.plain(format!("  {label}  {value}"));
            }
        }

        frame.plain("");
        if let Some(problem) = &self.problem {
            frame.push(Tone::Error, problem.clone());
        }
        frame.push(
            Tone::Muted,
            "<tab>: Next Field   |   <enter>: Save on Last Field   |   <ctrl-s>: Save   |   <esc>: Cancel",
        );

        frame
    }

    fn summary(&self) -> Option<String> {
        self.saved
            .as_ref()
            .map(|definition| format!("Saved `{definition}` to {}", self.config_path))
    }
}
