/// Which interactive view a command launches.
///
/// Only ever compared; the discriminants are stable but carry no meaning.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubCommand {
    /// Browse existing items
    List = 0,
    /// Create a new item
    Add = 1,
}
