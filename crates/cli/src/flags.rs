//! Every flag the `shelf` command tree knows about.

use crate::command::{FlagDescriptor, FlagMap};
use shelf_core::config::DEFAULT_CONFIG_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Catalog file; registered persistently by the root command.
    ConfigPath,
    /// Extra detail in views; registered persistently by the root command.
    Verbose,
    Filter,
    Id,
    Description,
    WorkingDirectory,
}

impl Flag {
    /// Flags the root command registers for the whole tree.
    pub const ROOT: [Flag; 2] = [Flag::ConfigPath, Flag::Verbose];
}

impl FlagDescriptor for Flag {
    fn name(&self) -> &str {
        match self {
            Flag::ConfigPath => "config-path",
            Flag::Verbose => "verbose",
            Flag::Filter => "filter",
            Flag::Id => "id",
            Flag::Description => "description",
            Flag::WorkingDirectory => "working-directory",
        }
    }

    fn shorthand(&self) -> Option<char> {
        match self {
            Flag::ConfigPath => Some('c'),
            Flag::Verbose => Some('v'),
            Flag::Filter => Some('f'),
            Flag::Id => Some('i'),
            Flag::Description => Some('d'),
            Flag::WorkingDirectory => Some('w'),
        }
    }

    fn default_value(&self) -> &str {
        match self {
            Flag::ConfigPath => DEFAULT_CONFIG_PATH,
            Flag::Verbose => "false",
            Flag::Filter | Flag::Id | Flag::Description | Flag::WorkingDirectory => "",
        }
    }

    fn usage(&self) -> &str {
        match self {
            Flag::ConfigPath => "Path to the command catalog YAML",
            Flag::Verbose => "Show command lines and working directories",
            Flag::Filter => "Start with the list filtered by this text",
            Flag::Id => "ID of the new command",
            Flag::Description => "Description of the new command",
            Flag::WorkingDirectory => "Directory the new command runs in",
        }
    }

    fn is_parent_flag(&self) -> bool {
        matches!(self, Flag::ConfigPath | Flag::Verbose)
    }

    fn is_inherited(&self) -> bool {
        matches!(self, Flag::ConfigPath | Flag::Verbose)
    }

    fn implicit_value(&self) -> Option<&str> {
        match self {
            Flag::Verbose => Some("true"),
            _ => None,
        }
    }
}

/// Reads `flag` from a resolved flag map, empty when absent.
#[must_use]
pub fn value_of<'a>(flags: &'a FlagMap, flag: Flag) -> &'a str {
    flags.get(flag.name()).map_or("", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Flag; 6] = [
        Flag::ConfigPath,
        Flag::Verbose,
        Flag::Filter,
        Flag::Id,
        Flag::Description,
        Flag::WorkingDirectory,
    ];

    #[test]
    fn test_names_and_shorthands_are_unique() {
        let names: HashSet<&str> = ALL.iter().map(FlagDescriptor::name).collect();
        assert_eq!(names.len(), ALL.len());

        let shorthands: HashSet<char> = ALL.iter().filter_map(FlagDescriptor::shorthand).collect();
        assert_eq!(shorthands.len(), ALL.len());
    }

    #[test]
    fn test_root_flags_are_parent_flags_everywhere_else() {
        for flag in Flag::ROOT {
            assert!(flag.is_parent_flag());
            assert!(flag.is_inherited());
        }

        for flag in [Flag::Filter, Flag::Id, Flag::Description, Flag::WorkingDirectory] {
            assert!(!flag.is_parent_flag());
            assert!(!flag.is_inherited());
        }
    }

    #[test]
    fn test_value_of() {
        let mut flags = FlagMap::new();
        flags.insert("filter".to_string(), "git".to_string());

        assert_eq!(value_of(&flags, Flag::Filter), "git");
        assert_eq!(value_of(&flags, Flag::Id), "");
    }
}
