//! The `shelf` command tree.

use crate::command::{new_command, Command, PositionalArgs, SubCommand};
use crate::flags::Flag;
use crate::models::build_model;

const ROOT_LONG: &str = "Keep a shelf of saved shell commands in a YAML catalog and \
browse or extend it from interactive terminal views.";

const LIST_LONG: &str = "Browse the catalog. Type / to filter, move with the arrow keys \
or j/k, and press enter to print the selected command line.";

const ADD_LONG: &str = "Add a command to the catalog. Any arguments become the command's \
words and pre-fill the form, for example:

    shelf commands add --id st -- git status";

/// Builds the whole command tree.
///
/// The root registers `--config-path` and `--verbose` for every command; the
/// leaves read them as parent flags.
#[must_use]
pub fn build_cli() -> Command {
    let mut root = Command::new("shelf", "Keep and browse saved shell commands", ROOT_LONG);
    for flag in Flag::ROOT {
        root.add_persistent_flag(&flag);
    }

    let mut commands = Command::new("commands", "Manage saved commands", "");

    commands.add_command(new_command(
        "list",
        "List saved commands",
        LIST_LONG,
        PositionalArgs::NoArgs,
        vec![Flag::ConfigPath, Flag::Verbose, Flag::Filter],
        SubCommand::List,
        build_model,
    ));

    commands.add_command(new_command(
        "add",
        "Add a saved command",
        ADD_LONG,
        PositionalArgs::ArbitraryArgs,
        vec![
            Flag::ConfigPath,
            Flag::Verbose,
            Flag::Id,
            Flag::Description,
            Flag::WorkingDirectory,
        ],
        SubCommand::Add,
        build_model,
    ));

    root.add_command(commands);
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(command: &'a Command, path: &[&str]) -> &'a Command {
        path.iter().fold(command, |command, name| {
            command
                .children()
                .iter()
                .find(|child| child.name() == *name)
                .unwrap()
        })
    }

    #[test]
    fn test_tree_shape() {
        let root = build_cli();

        assert_eq!(root.persistent_flags(), ["config-path", "verbose"]);
        assert!(root.local_flags().is_empty());
        assert!(!root.is_runnable());

        let list = find(&root, &["commands", "list"]);
        assert!(list.is_runnable());
        assert_eq!(list.local_flags(), ["filter"]);
        assert!(list.persistent_flags().is_empty());

        let add = find(&root, &["commands", "add"]);
        assert_eq!(add.local_flags(), ["description", "id", "working-directory"]);
    }

    #[test]
    fn test_clap_definition_is_valid() {
        build_cli().to_clap().debug_assert();
    }

    #[test]
    fn test_global_flags_parse_anywhere() {
        let root = build_cli();
        let matches = root
            .try_get_matches_from(["shelf", "commands", "list", "-v", "-c", "/tmp/x.yml"])
            .unwrap();

        let (_, commands) = matches.subcommand().unwrap();
        let (_, list) = commands.subcommand().unwrap();
        assert_eq!(list.get_one::<String>("verbose").unwrap(), "true");
        assert_eq!(list.get_one::<String>("config-path").unwrap(), "/tmp/x.yml");
    }
}
