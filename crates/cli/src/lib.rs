//! Shelf CLI Library
//!
//! This crate provides the command-line interface for shelf. Its commands are
//! thin wrappers that resolve their flags and launch an interactive terminal
//! view, which then runs until the user leaves it.
//!
//! # Key Features
//!
//! - **Command Factory**: Build runnable commands from a name, help text,
//!   positional-argument shape, flag descriptors and a model factory
//! - **Scoped Flags**: Local flags, persistent flags, and flags read from a parent
//! - **Program Runner**: Drive a model on a terminal it holds exclusively
//! - **Catalog Views**: Browse the catalog or add to it interactively
//!
//! # Architecture
//!
//! - [`command`]: The command factory, flag descriptors and dispatch
//! - [`program`]: Models, backends and the runner
//! - [`flags`]: The flag catalog
//! - [`models`]: The list and add views
//! - [`cli`]: The `shelf` command tree
//!
//! # Examples
//!
//! ```bash
//! # Browse the catalog
//! shelf commands list
//!
//! # Start filtered, with command lines shown
//! shelf --verbose commands list --filter git
//!
//! # Add a command from the command line, finishing in the form
//! shelf commands add --id st -- git status
//!
//! # Use another catalog
//! shelf -c ./team-commands.yml commands list
//! ```

pub mod cli;
pub mod command;
pub mod flags;
pub mod models;
pub mod program;
