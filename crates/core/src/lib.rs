//! Shelf Core Library
//!
//! This crate provides the storage side of shelf, a terminal tool for keeping a
//! catalog of saved shell commands.
//!
//! # Key Features
//!
//! - **Command Definitions**: Parse and validate the YAML command catalog
//! - **Catalog Updates**: Append validated definitions, creating the file on demand
//! - **Configuration Management**: Resolve the catalog path with `~` expansion
//! - **Error Handling**: One error type for catalog, flag, and terminal failures
//!
//! # Examples
//!
//! Loading command definitions from the catalog:
//!
//! ```no_run
//! use shelf_core::config::get_config_path;
//! use shelf_core::file_handling::get_command_definitions;
//!
//! let commands = get_command_definitions(&get_config_path(""))?;
//! for command in &commands {
//!     println!("Command: {}", command);
//! }
//! # Ok::<(), shelf_core::error::Error>(())
//! ```

pub mod command_definitions;
pub mod config;
pub mod error;
pub mod file_handling;
