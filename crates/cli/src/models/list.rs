//! Scrollable, filterable view of the command catalog.

use std::fmt::Display;

use crossterm::event::{Event, KeyCode, KeyEvent};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

use crate::command::FlagMap;
use crate::flags::{value_of, Flag};
use crate::program::frame::{Frame, Tone};
use crate::program::{Model, Step};
use shelf_core::command_definitions::CommandDefinition;
use shelf_core::config::{expand_working_directory, get_config_path};
use shelf_core::error::Result;
use shelf_core::file_handling::get_command_definitions;

/// Rows taken by the header and the filter line.
const CHROME_HEIGHT: u16 = 2;

/// Visible window over the filtered rows.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct UiState {
    /// Position within the filtered rows
    pub selected_index: usize,
    pub viewport: ViewportState,
    /// Keystrokes go to the filter rather than navigation
    pub is_filtering: bool,
    pub filter_text: String,
}

#[derive(Clone, Copy)]
enum CycleDirection {
    Up,
    Down,
}

pub struct ListModel {
    config_path: String,
    verbose: bool,
    commands: Vec<CommandDefinition>,
    /// Catalog positions matching the filter, in catalog order
    visible: Vec<usize>,
    ui_state: UiState,
    chosen: Option<usize>,
}

impl ListModel {
    #[must_use]
    pub fn new(flags: &FlagMap) -> Self {
        Self {
            config_path: get_config_path(value_of(flags, Flag::ConfigPath)),
            verbose: value_of(flags, Flag::Verbose) == "true",
            commands: Vec::new(),
            visible: Vec::new(),
            ui_state: UiState {
                filter_text: value_of(flags, Flag::Filter).to_string(),
                ..UiState::default()
            },
            chosen: None,
        }
    }

    #[must_use]
    pub fn chosen(&self) -> Option<&CommandDefinition> {
        self.chosen.map(|index| &self.commands[index])
    }

    fn refilter(&mut self) {
        self.visible = filter_indexes(&self.commands, &self.ui_state.filter_text);
        self.ui_state.selected_index = 0;
        self.ui_state.viewport.offset = 0;
    }

    fn handle_key(&mut self, key_event: &KeyEvent) -> Step {
        if self.ui_state.is_filtering {
            match key_event.code {
                KeyCode::Esc => {
                    self.ui_state.is_filtering = false;
                    self.ui_state.filter_text.clear();
                    self.refilter();
                }
                KeyCode::Enter => self.ui_state.is_filtering = false,
                KeyCode::Backspace => {
                    if self.ui_state.filter_text.pop().is_some() {
                        self.refilter();
                    }
                }
                KeyCode::Char(c) => {
                    self.ui_state.filter_text.push(c);
                    self.refilter();
                }
                KeyCode::Up => self.ui_state = self.moved(CycleDirection::Up),
                KeyCode::Down => self.ui_state = self.moved(CycleDirection::Down),
                _ => {}
            }
            return Step::Continue;
        }

        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.ui_state = self.moved(CycleDirection::Up),
            KeyCode::Down | KeyCode::Char('j') => self.ui_state = self.moved(CycleDirection::Down),
            KeyCode::Char('/') => self.ui_state.is_filtering = true,
            KeyCode::Enter => {
                if let Some(&index) = self.visible.get(self.ui_state.selected_index) {
                    self.chosen = Some(index);
                    return Step::Quit;
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => return Step::Quit,
            _ => {}
        }

        Step::Continue
    }

    fn moved(&self, direction: CycleDirection) -> UiState {
        move_selected_index(&self.ui_state, self.visible.len(), direction)
    }

    fn resize(&mut self, width: u16, height: u16) {
        let new_height = height.saturating_sub(CHROME_HEIGHT).max(1);
        let viewport = &mut self.ui_state.viewport;
        viewport.width = width;
        viewport.height = new_height;

        // Keep the selection on screen
        let selected = self.ui_state.selected_index;
        if selected >= viewport.offset + new_height as usize {
            viewport.offset = selected + 1 - new_height as usize;
        }
        if viewport.offset + new_height as usize > self.visible.len() {
            viewport.offset = self.visible.len().saturating_sub(new_height as usize);
        }
    }

    fn row_text(&self, index: usize) -> String {
        let definition = &self.commands[index];
        let position = pad_to_width_of(index + 1, self.commands.len());
        let mut row = format!("[{position}] {definition}");

        if self.verbose {
            row.push_str(&format!("  $ {}", definition.command_line()));
            if let Some(working_directory) =
                expand_working_directory(definition.working_directory.as_deref())
            {
                row.push_str(&format!("  (in {working_directory})"));
            }
        }

        row
    }
}

impl Model for ListModel {
    fn init(&mut self) -> Result<Step> {
        self.commands = get_command_definitions(&self.config_path)?;
        self.refilter();
        Ok(Step::Continue)
    }

    fn update(&mut self, event: &Event) -> Result<Step> {
        match event {
            Event::Resize(width, height) => {
                self.resize(*width, *height);
                Ok(Step::Continue)
            }
            Event::Key(key_event) => Ok(self.handle_key(key_event)),
            _ => Ok(Step::Continue),
        }
    }

    fn view(&self) -> Frame {
        let mut frame = Frame::new();
        let ui_state = &self.ui_state;

        let instructions = if ui_state.is_filtering {
            "<esc>: Stop Filtering   |   <enter>: Keep Filter".to_string()
        } else {
            let count = self.visible.len();
            let position = if count == 0 { 0 } else { ui_state.selected_index + 1 };
            format!(
                "/: Filter   |   {}/{}   |   <enter>: Pick   |   q: Quit",
                pad_to_width_of(position, count),
                count
            )
        };
        frame.push(Tone::Header, format!("  {instructions}"));

        if self.visible.is_empty() {
            frame.push(Tone::Error, "No matching commands!");
        }

        let rows = self
            .visible
            .iter()
            .enumerate()
            .skip(ui_state.viewport.offset)
            .take(ui_state.viewport.height as usize);

        for (position, &index) in rows {
            let tone = if position == ui_state.selected_index {
                Tone::Selected
            } else {
                Tone::Plain
            };
            frame.push(tone, self.row_text(index));
        }

        if ui_state.is_filtering {
            frame.plain(format!("Filter: {}", ui_state.filter_text));
        } else if !ui_state.filter_text.is_empty() {
            frame.push(
                Tone::Muted,
                format!("Filter: {} (/ to edit)", ui_state.filter_text),
            );
        }

        frame
    }

    fn summary(&self) -> Option<String> {
        self.chosen().map(CommandDefinition::command_line)
    }
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = max_number.to_string().len();
    format!("{:>width$}", value.to_string())
}

/// Catalog positions whose row matches `predicate`.
///
/// A numeric predicate matches on the 1-based position; anything else is a
/// fuzzy match against the displayed text.
fn filter_indexes(commands: &[CommandDefinition], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..commands.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let by_position = predicate.parse::<usize>().is_ok();

    let filtered: Vec<usize> = commands
        .iter()
        .enumerate()
        .filter(|(i, definition)| {
            if by_position {
                (i + 1).to_string().contains(predicate)
            } else {
                let haystack = format!("{definition} {}", definition.command_line());
                matcher.fuzzy_match(&haystack, predicate).is_some()
            }
        })
        .map(|(i, _)| i)
        .collect();

    debug!("Filter `{predicate}` matched {} commands", filtered.len());
    filtered
}

/// Move the selected index in the given direction, wrapping at both ends
fn move_selected_index(
    ui_state: &UiState,
    rows: usize,
    direction: CycleDirection,
) -> UiState {
    let mut ui_state = ui_state.clone();
    if rows == 0 {
        return ui_state;
    }

    let height = ui_state.viewport.height.max(1) as usize;
    let previous = ui_state.selected_index;

    let new_index = match direction {
        CycleDirection::Up => {
            if previous == 0 {
                let last = rows - 1;
                ui_state.viewport.offset = last.saturating_sub(height - 1);
                last
            } else {
                let new_index = previous - 1;
                if new_index < ui_state.viewport.offset {
                    ui_state.viewport.offset = new_index;
                }
                new_index
            }
        }
        CycleDirection::Down => {
            let new_index = (previous + 1) % rows;
            if new_index < previous {
                ui_state.viewport.offset = 0;
            } else if new_index >= ui_state.viewport.offset + height {
                ui_state.viewport.offset = new_index + 1 - height;
            }
            new_index
        }
    };

    ui_state.selected_index = new_index;
    ui_state
}
