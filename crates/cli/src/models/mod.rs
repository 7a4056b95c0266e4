//! The interactive views `shelf` commands launch.

pub mod add;
pub mod list;

pub use add::AddModel;
pub use list::ListModel;

use crate::command::{FlagMap, SubCommand};
use crate::program::Model;

/// Model factory shared by the catalog commands, keyed on the subcommand.
#[must_use]
pub fn build_model(args: Vec<String>, flags: FlagMap, sub_command: SubCommand) -> Box<dyn Model> {
    match sub_command {
        SubCommand::List => Box::new(ListModel::new(&flags)),
        SubCommand::Add => Box::new(AddModel::new(&args, &flags)),
    }
}
