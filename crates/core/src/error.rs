use std::fmt::{Display, Formatter};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Where a flag value was expected to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagScope {
    /// The invoked command's own flags.
    Local,
    /// Persistent flags registered by an ancestor command.
    Inherited,
}

impl Display for FlagScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagScope::Local => f.write_str("flag"),
            FlagScope::Inherited => f.write_str("inherited flag"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error reading {} {}: {}", .scope, .flag, .cause)]
    FlagRead {
        flag: String,
        scope: FlagScope,
        cause: String,
    },

    #[error("Invalid arguments for `{}`: {}", .command, .reason)]
    InvalidArgs { command: String, reason: String },

    #[error("Error: {}", .0)]
    Runner(String),

    #[error("Error: terminal failure: {}", .0)]
    Terminal(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("No commands were found in the command catalog. Is `{}` empty?", .path)]
    EmptyCommandDefinition { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Found a non-unique command ID: `{}`", .0)]
    NonUniqueCommandId(String),

    #[error("A command needs at least one word to run")]
    EmptyCommand,

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("Invalid ID `{}`: ID may not contain a colon (reserved for future use)", .0)]
    IdWithColon(String),

    #[error("Invalid ID `{}`: ID cannot be purely numeric", .0)]
    NumericId(String),
}

impl Error {
    pub fn flag_read(flag: &str, scope: FlagScope, cause: impl Display) -> Self {
        Self::FlagRead {
            flag: flag.to_string(),
            scope,
            cause: cause.to_string(),
        }
    }

    pub fn invalid_args(command: &str, reason: String) -> Self {
        Self::InvalidArgs {
            command: command.to_string(),
            reason,
        }
    }

    pub fn empty_command_definition(path: String) -> Self {
        Self::EmptyCommandDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_read_messages_name_the_scope() {
        let local = Error::flag_read("url", FlagScope::Local, "unknown argument");
        assert_eq!(
            local.to_string(),
            "Error reading flag url: unknown argument"
        );

        let inherited = Error::flag_read("verbose", FlagScope::Inherited, "not persistent");
        assert_eq!(
            inherited.to_string(),
            "Error reading inherited flag verbose: not persistent"
        );
    }

    #[test]
    fn test_runner_message() {
        let error = Error::Runner("no terminal".to_string());
        assert_eq!(error.to_string(), "Error: no terminal");
    }
}
