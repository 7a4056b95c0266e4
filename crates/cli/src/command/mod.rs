//! Commands that launch interactive programs.
//!
//! [`new_command`] turns a declarative description of a subcommand (its name,
//! help text, accepted positional arguments, flags and [`SubCommand`] tag)
//! into a runnable [`Command`]. Running it resolves every declared flag from
//! the right scope, builds a model through the given [`ModelFactory`] and
//! hands it to a [`Runner`].
//!
//! Flags reach a command in one of two ways:
//!
//! - flags the command registers itself, either locally or persistently so
//!   that descendants can read them too;
//! - flags registered persistently by an ancestor, which the command only
//!   reads (the descriptor's `is_parent_flag`).
//!
//! # Examples
//!
//! ```no_run
//! use shelf_cli::command::{new_command, Command, FlagMap, PositionalArgs, SubCommand};
//! use shelf_cli::flags::Flag;
//! use shelf_cli::models::build_model;
//! use shelf_cli::program::backend::CrosstermBackend;
//! use shelf_cli::program::Program;
//!
//! let mut root = Command::new("shelf", "Saved commands", "");
//! root.add_persistent_flag(&Flag::ConfigPath);
//! root.add_persistent_flag(&Flag::Verbose);
//! root.add_command(new_command(
//!     "list",
//!     "List saved commands",
//!     "",
//!     PositionalArgs::NoArgs,
//!     vec![Flag::ConfigPath, Flag::Verbose, Flag::Filter],
//!     SubCommand::List,
//!     build_model,
//! ));
//!
//! let matches = root.try_get_matches_from(["shelf", "list"]).unwrap();
//! root.dispatch(&matches, &mut Program::new(CrosstermBackend::new()))?;
//! # Ok::<(), shelf_core::error::Error>(())
//! ```

pub mod args;
pub mod flag;
pub mod subcommand;

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;

use clap::{Arg, ArgMatches};
use itertools::Itertools;
use log::debug;

pub use args::PositionalArgs;
pub use flag::FlagDescriptor;
pub use subcommand::SubCommand;

use crate::program::{Model, Runner};
use shelf_core::error::{Error, FlagScope, Result};

/// Resolved flag values for one invocation, keyed by flag name.
pub type FlagMap = HashMap<String, String>;

/// Clap id of the variadic positional argument every runnable command takes.
const POSITIONAL_ARGS_ID: &str = "positional-args";

/// Builds the model a command launches.
pub trait ModelFactory {
    fn build(&self, args: Vec<String>, flags: FlagMap, sub_command: SubCommand) -> Box<dyn Model>;
}

impl<F> ModelFactory for F
where
    F: Fn(Vec<String>, FlagMap, SubCommand) -> Box<dyn Model>,
{
    fn build(&self, args: Vec<String>, flags: FlagMap, sub_command: SubCommand) -> Box<dyn Model> {
        self(args, flags, sub_command)
    }
}

type RunFn = Box<dyn Fn(&Invocation<'_>, &mut dyn Runner) -> Result<()>>;

/// The parsed state a command runs with.
pub struct Invocation<'a> {
    command: &'a str,
    args: Vec<String>,
    matches: &'a ArgMatches,
    inherited: &'a HashSet<String>,
}

impl<'a> Invocation<'a> {
    fn new(command: &'a str, matches: &'a ArgMatches, inherited: &'a HashSet<String>) -> Self {
        let args = matches
            .try_get_many::<String>(POSITIONAL_ARGS_ID)
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        Self {
            command,
            args,
            matches,
            inherited,
        }
    }

    #[must_use]
    pub fn command(&self) -> &str {
        self.command
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Reads one of the command's own flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlagRead`] if the command has no such flag.
    pub fn flag(&self, name: &str) -> Result<String> {
        read_string(self.matches, name, FlagScope::Local)
    }

    /// Reads a flag registered persistently by an ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlagRead`] if no ancestor on the invoked path
    /// registered `name` as persistent.
    pub fn inherited_flag(&self, name: &str) -> Result<String> {
        if !self.inherited.contains(name) {
            return Err(Error::flag_read(
                name,
                FlagScope::Inherited,
                "no parent command registers it as persistent",
            ));
        }

        read_string(self.matches, name, FlagScope::Inherited)
    }
}

fn read_string(matches: &ArgMatches, name: &str, scope: FlagScope) -> Result<String> {
    match matches.try_get_one::<String>(name) {
        Ok(Some(value)) => Ok(value.clone()),
        Ok(None) => Err(Error::flag_read(name, scope, "flag has no value")),
        Err(e) => Err(Error::flag_read(name, scope, e)),
    }
}

/// A node of the command tree.
///
/// Wraps the clap definition with the behavior to run once parsing
/// succeeded. Commands without a run behavior only group their children.
pub struct Command {
    clap: clap::Command,
    run: Option<RunFn>,
    children: Vec<Command>,
}

impl Command {
    /// A command that only groups subcommands.
    #[must_use]
    pub fn new(name: &str, short: &str, long: &str) -> Self {
        let mut clap = clap::Command::new(name.to_string()).about(short.to_string());
        if !long.is_empty() {
            clap = clap.long_about(long.to_string());
        }

        Self {
            clap,
            run: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.clap.get_name()
    }

    #[must_use]
    pub fn is_runnable(&self) -> bool {
        self.run.is_some()
    }

    #[must_use]
    pub fn children(&self) -> &[Command] {
        &self.children
    }

    pub fn add_command(&mut self, child: Command) {
        self.children.push(child);
    }

    /// Registers a flag only this command can read.
    pub fn add_local_flag<D: FlagDescriptor + ?Sized>(&mut self, flag: &D) {
        self.add_arg(flag::to_arg(flag, false));
    }

    /// Registers a flag this command and all of its descendants can read.
    pub fn add_persistent_flag<D: FlagDescriptor + ?Sized>(&mut self, flag: &D) {
        self.add_arg(flag::to_arg(flag, true));
    }

    fn add_arg(&mut self, arg: Arg) {
        self.clap = std::mem::take(&mut self.clap).arg(arg);
    }

    fn flag_names(&self, persistent: bool) -> Vec<String> {
        self.clap
            .get_arguments()
            .filter(|arg| !arg.is_positional() && arg.is_global_set() == persistent)
            .map(|arg| arg.get_id().to_string())
            .sorted()
            .collect()
    }

    /// Names of the flags registered locally, sorted.
    #[must_use]
    pub fn local_flags(&self) -> Vec<String> {
        self.flag_names(false)
    }

    /// Names of the flags registered persistently, sorted.
    #[must_use]
    pub fn persistent_flags(&self) -> Vec<String> {
        self.flag_names(true)
    }

    /// The full clap definition of this command and its descendants.
    #[must_use]
    pub fn to_clap(&self) -> clap::Command {
        self.children
            .iter()
            .fold(self.clap.clone(), |clap, child| clap.subcommand(child.to_clap()))
    }

    /// Parses `argv` (program name first) against the whole tree.
    ///
    /// # Errors
    ///
    /// Returns clap's error for unknown flags, `--help`, `--version` and the
    /// like. Callers usually finish with [`clap::Error::exit`].
    pub fn try_get_matches_from<I, T>(&self, argv: I) -> clap::error::Result<ArgMatches>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.to_clap().try_get_matches_from(argv)
    }

    /// Runs the command `matches` selected.
    ///
    /// Walks down the subcommand chain, collecting the persistent flags
    /// registered above the invoked command, and runs it with `runner`. A
    /// command that cannot run prints its help instead.
    ///
    /// # Errors
    ///
    /// Returns the invoked command's error: invalid positional arguments, an
    /// unreadable flag, or a runner failure.
    pub fn dispatch(&self, matches: &ArgMatches, runner: &mut dyn Runner) -> Result<()> {
        self.dispatch_with(self, &[], matches, &HashSet::new(), runner)
    }

    /// The clap command at `path` below this one, built as part of the whole
    /// tree so its usage line and global options match the real invocation.
    #[must_use]
    pub fn help_command(&self, path: &[String]) -> clap::Command {
        let mut clap = self.to_clap();
        clap.build();

        let found = path
            .iter()
            .try_fold(&clap, |command, name| command.find_subcommand(name))
            .cloned();
        found.unwrap_or(clap)
    }

    fn dispatch_with(
        &self,
        root: &Command,
        path: &[String],
        matches: &ArgMatches,
        inherited: &HashSet<String>,
        runner: &mut dyn Runner,
    ) -> Result<()> {
        if let Some((name, sub_matches)) = matches.subcommand() {
            if let Some(child) = self.children.iter().find(|child| child.name() == name) {
                let mut inherited = inherited.clone();
                inherited.extend(self.persistent_flags());
                let mut path = path.to_vec();
                path.push(name.to_string());
                return child.dispatch_with(root, &path, sub_matches, &inherited, runner);
            }
        }

        match &self.run {
            Some(run) => {
                debug!("Running `{}`", self.name());
                run(&Invocation::new(self.name(), matches, inherited), runner)
            }
            None => {
                root.help_command(path).print_help()?;
                Ok(())
            }
        }
    }
}

/// Registers every flag `flags` owns on `command`.
///
/// Parent flags belong to an ancestor and are skipped; the rest become
/// persistent or local according to [`FlagDescriptor::is_inherited`].
pub fn register_flags<D: FlagDescriptor>(command: &mut Command, flags: &[D]) {
    for flag in flags {
        if flag.is_parent_flag() {
            continue;
        }

        if flag.is_inherited() {
            command.add_persistent_flag(flag);
        } else {
            command.add_local_flag(flag);
        }
    }
}

/// Reads every flag in `flags` from its scope, in order.
///
/// # Errors
///
/// Stops at the first flag that cannot be read.
pub fn resolve_flags<D: FlagDescriptor>(invocation: &Invocation<'_>, flags: &[D]) -> Result<FlagMap> {
    let mut resolved = FlagMap::with_capacity(flags.len());

    for flag in flags {
        let value = if flag.is_parent_flag() {
            invocation.inherited_flag(flag.name())?
        } else {
            invocation.flag(flag.name())?
        };

        resolved.insert(flag.name().to_string(), value);
    }

    Ok(resolved)
}

/// Creates a command that runs the model `model_factory` builds.
///
/// On every run the positional arguments are checked against `args`, each
/// flag in `flags` is resolved, and `model_factory` is called once with the
/// arguments, the resolved flags and `sub_command`. The model is then run to
/// completion. Nothing is built if any step before it fails.
pub fn new_command<D, F>(
    name: &str,
    short: &str,
    long: &str,
    args: PositionalArgs,
    flags: Vec<D>,
    sub_command: SubCommand,
    model_factory: F,
) -> Command
where
    D: FlagDescriptor + 'static,
    F: ModelFactory + 'static,
{
    let mut command = Command::new(name, short, long);
    register_flags(&mut command, &flags);
    command.add_arg(
        Arg::new(POSITIONAL_ARGS_ID)
            .value_name("ARGS")
            .num_args(1..)
            .trailing_var_arg(true)
            .allow_hyphen_values(true),
    );

    command.run = Some(Box::new(move |invocation: &Invocation<'_>, runner: &mut dyn Runner| {
        args.validate(invocation.command(), invocation.args())?;

        let resolved = resolve_flags(invocation, &flags)?;
        debug!(
            "Resolved flags for `{}`: {:?}",
            invocation.command(),
            resolved.iter().sorted().collect::<Vec<_>>()
        );

        let model = model_factory.build(invocation.args().to_vec(), resolved, sub_command);
        runner.run(model)
    }));

    command
}
