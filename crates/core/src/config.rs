//! Configuration path utilities for shelf.
//!
//! Resolves the catalog path and expands shell shorthands like `~`.

/// Default path for the command catalog
pub const DEFAULT_CONFIG_PATH: &str = "~/.shelf/commands.yml";

/// Resolves the catalog file path.
///
/// An empty value falls back to [`DEFAULT_CONFIG_PATH`]. Shell expansions like
/// `~` are resolved.
///
/// # Examples
///
/// ```
/// use shelf_core::config::get_config_path;
///
/// let default_path = get_config_path("");
/// assert!(default_path.ends_with("commands.yml"));
///
/// let custom_path = get_config_path("/path/to/commands.yml");
/// assert_eq!(custom_path, "/path/to/commands.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: &str) -> String {
    let config_path = if config_path_arg.trim().is_empty() {
        DEFAULT_CONFIG_PATH
    } else {
        config_path_arg
    };

    shellexpand::tilde(config_path).to_string()
}

/// Expands shell variables in a working directory path.
///
/// Returns `None` when no working directory is provided.
#[must_use]
pub fn expand_working_directory(working_directory: Option<&str>) -> Option<String> {
    working_directory.map(|working_directory| shellexpand::tilde(working_directory).to_string())
}
