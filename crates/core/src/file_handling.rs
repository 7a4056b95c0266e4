//! File handling and validation for the shelf command catalog.
//!
//! Reads and writes command definitions and validates their IDs.

use std::collections::HashSet;
use std::fs::{self, File};
use std::path::Path;

use log::{debug, info};

use crate::command_definitions::CommandDefinition;
use crate::error::Error::{EmptyCommand, EmptyId, IdWithColon, IdWithSpace, NonUniqueCommandId, NumericId};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn read_definitions(config_path: &str) -> Result<Vec<CommandDefinition>> {
    let config_reader = get_reader("catalog", config_path)?;

    let parsed_command_defs: Vec<CommandDefinition> = serde_yaml::from_reader(config_reader)
        .map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "catalog".to_string(),
                config_path.to_string(),
                e,
            )
        })?;

    validate_command_ids(&parsed_command_defs)?;

    Ok(parsed_command_defs)
}

/// Checks a command or catalog ID.
///
/// # Errors
///
/// Returns an error when the ID is empty, contains a space or colon, or is
/// purely numeric (numbers are reserved for list positions).
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(' ') {
        return Err(IdWithSpace(id.to_string()));
    }

    if id.contains(':') {
        return Err(IdWithColon(id.to_string()));
    }

    if id.chars().all(|c| c.is_numeric()) {
        return Err(NumericId(id.to_string()));
    }

    Ok(())
}

fn validate_command_ids(commands: &[CommandDefinition]) -> Result<()> {
    let mut ids = HashSet::new();

    for cmd in commands {
        if let Some(id) = &cmd.id {
            validate_id(id)?;

            if !ids.insert(id.as_str()) {
                return Err(NonUniqueCommandId(id.clone()));
            }
        }
    }

    Ok(())
}

/// Validates a definition that is about to join an existing catalog.
///
/// # Errors
///
/// Returns an error if the command has no words, the ID is invalid, or the
/// ID is already used by one of `existing`.
pub fn validate_command_definition(
    definition: &CommandDefinition,
    existing: &[CommandDefinition],
) -> Result<()> {
    if definition.command.iter().all(|word| word.trim().is_empty()) {
        return Err(EmptyCommand);
    }

    if let Some(id) = &definition.id {
        validate_id(id)?;

        if existing.iter().any(|cmd| cmd.id.as_ref() == Some(id)) {
            return Err(NonUniqueCommandId(id.clone()));
        }
    }

    Ok(())
}

/// Loads and validates command definitions from the catalog file.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The catalog is empty
/// - Command IDs are invalid or non-unique
///
/// # Examples
///
/// ```no_run
/// use shelf_core::file_handling::get_command_definitions;
///
/// let commands = get_command_definitions("/home/me/.shelf/commands.yml")?;
/// println!("Loaded {} commands", commands.len());
/// # Ok::<(), shelf_core::error::Error>(())
/// ```
pub fn get_command_definitions(config_path: &str) -> Result<Vec<CommandDefinition>> {
    let parsed_command_defs = read_definitions(config_path)?;

    if parsed_command_defs.is_empty() {
        return Err(Error::empty_command_definition(config_path.to_string()));
    }

    debug!(
        "Loaded {} command definitions from `{}`",
        parsed_command_defs.len(),
        config_path
    );

    Ok(parsed_command_defs)
}

/// Like [`get_command_definitions`], but a missing or empty catalog is an
/// empty list rather than an error.
///
/// # Errors
///
/// Returns an error if an existing catalog cannot be read or is invalid.
pub fn get_command_definitions_or_empty(config_path: &str) -> Result<Vec<CommandDefinition>> {
    if !Path::new(config_path).exists() {
        debug!("No catalog at `{}` yet", config_path);
        return Ok(Vec::new());
    }

    read_definitions(config_path)
}

/// Writes the whole catalog, creating its parent directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or
/// serialization fails.
pub fn write_command_definitions(config_path: &str, commands: &[CommandDefinition]) -> Result<()> {
    if let Some(parent) = Path::new(config_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io_error("catalog directory".to_string(), parent.display().to_string(), e)
            })?;
        }
    }

    let f = File::create(config_path)
        .map_err(|e| Error::io_error("catalog".to_string(), config_path.to_string(), e))?;

    serde_yaml::to_writer(f, commands).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "catalog".to_string(),
            config_path.to_string(),
            e,
        )
    })
}

/// Validates `definition` against the catalog at `config_path` and appends it.
///
/// Returns the catalog as written.
///
/// # Errors
///
/// Returns an error if the existing catalog cannot be read, the definition is
/// invalid, or writing fails.
pub fn append_command_definition(
    config_path: &str,
    definition: CommandDefinition,
) -> Result<Vec<CommandDefinition>> {
    let mut commands = get_command_definitions_or_empty(config_path)?;
    validate_command_definition(&definition, &commands)?;

    info!("Adding `{}` to catalog `{}`", definition, config_path);
    commands.push(definition);
    write_command_definitions(config_path, &commands)?;

    Ok(commands)
}
