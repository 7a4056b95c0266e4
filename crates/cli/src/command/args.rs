//! Positional-argument validators.

use shelf_core::error::{Error, Result};

/// Accepted shape of a command's positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionalArgs {
    NoArgs,
    ArbitraryArgs,
    ExactArgs(usize),
    MinimumNArgs(usize),
    MaximumNArgs(usize),
    /// Inclusive on both ends.
    RangeArgs(usize, usize),
}

impl PositionalArgs {
    /// Checks `args` for the command named `command`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgs`] describing the mismatch.
    pub fn validate(&self, command: &str, args: &[String]) -> Result<()> {
        let count = args.len();

        let reason = match *self {
            PositionalArgs::ArbitraryArgs => None,
            PositionalArgs::NoArgs if count > 0 => {
                Some(format!("unknown command \"{}\"", args[0]))
            }
            PositionalArgs::NoArgs => None,
            PositionalArgs::ExactArgs(n) if count != n => {
                Some(format!("accepts {n} arg(s), received {count}"))
            }
            PositionalArgs::MinimumNArgs(n) if count < n => {
                Some(format!("requires at least {n} arg(s), only received {count}"))
            }
            PositionalArgs::MaximumNArgs(n) if count > n => {
                Some(format!("accepts at most {n} arg(s), received {count}"))
            }
            PositionalArgs::RangeArgs(min, max) if count < min || count > max => Some(format!(
                "accepts between {min} and {max} arg(s), received {count}"
            )),
            _ => None,
        };

        match reason {
            Some(reason) => Err(Error::invalid_args(command, reason)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("arg{i}")).collect()
    }

    #[test]
    fn test_no_args() {
        assert!(PositionalArgs::NoArgs.validate("list", &args(0)).is_ok());

        let error = PositionalArgs::NoArgs.validate("list", &args(1)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid arguments for `list`: unknown command \"arg0\""
        );
    }

    #[test]
    fn test_counted_validators() {
        assert!(PositionalArgs::ExactArgs(3).validate("x", &args(3)).is_ok());
        assert!(PositionalArgs::ExactArgs(3).validate("x", &args(2)).is_err());

        assert!(PositionalArgs::MinimumNArgs(1).validate("x", &args(4)).is_ok());
        assert!(PositionalArgs::MinimumNArgs(1).validate("x", &args(0)).is_err());

        assert!(PositionalArgs::MaximumNArgs(1).validate("x", &args(1)).is_ok());
        assert!(PositionalArgs::MaximumNArgs(1).validate("x", &args(2)).is_err());

        assert!(PositionalArgs::RangeArgs(1, 2).validate("x", &args(2)).is_ok());
        assert!(PositionalArgs::RangeArgs(1, 2).validate("x", &args(0)).is_err());
        assert!(PositionalArgs::RangeArgs(1, 2).validate("x", &args(3)).is_err());

        assert!(PositionalArgs::ArbitraryArgs.validate("x", &args(9)).is_ok());
    }
}
