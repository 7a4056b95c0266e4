//! The flag descriptor contract and its translation into clap arguments.

use clap::{Arg, ArgAction};

/// Static description of a string-valued command-line flag.
///
/// A descriptor plays exactly one role for a given command: either the
/// command registers it (locally, or persistently when [`is_inherited`]) or
/// the command reads it from an ancestor (when [`is_parent_flag`]).
///
/// [`is_inherited`]: FlagDescriptor::is_inherited
/// [`is_parent_flag`]: FlagDescriptor::is_parent_flag
pub trait FlagDescriptor {
    /// Long name, unique within a command's flag set.
    fn name(&self) -> &str;

    fn shorthand(&self) -> Option<char>;

    fn default_value(&self) -> &str;

    fn usage(&self) -> &str;

    /// The value lives on an ancestor command that already registered and
    /// parsed it.
    fn is_parent_flag(&self) -> bool;

    /// The registering command makes the flag visible to its descendants.
    fn is_inherited(&self) -> bool;

    /// Value used when the flag is passed without one, e.g. `--verbose`.
    fn implicit_value(&self) -> Option<&str> {
        None
    }
}

/// Builds the clap argument for `flag`, global when `persistent`.
pub(crate) fn to_arg<D: FlagDescriptor + ?Sized>(flag: &D, persistent: bool) -> Arg {
    let mut arg = Arg::new(flag.name().to_string())
        .long(flag.name().to_string())
        .help(flag.usage().to_string())
        .default_value(flag.default_value().to_string())
        .action(ArgAction::Set)
        .global(persistent);

    if let Some(shorthand) = flag.shorthand() {
        arg = arg.short(shorthand);
    }

    if let Some(implicit) = flag.implicit_value() {
        arg = arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value(implicit.to_string());
    }

    arg
}
