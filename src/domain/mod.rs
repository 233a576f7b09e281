//! Domain layer: option model and invocation building
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod catalog;
pub mod choice;
pub mod error;
pub mod option;
pub mod option_set;

pub use builder::{Invocation, InvocationBuilder};
pub use catalog::{GlobalOption, LatticeOption, StreamOption};
pub use choice::{CopyDirection, LatticePlotType, OutputFormat, ShiftDirection, StreamPlotType};
pub use error::DomainError;
pub use option::{CommandOption, FlagValue, Subcommand, SubcommandOption};
pub use option_set::OptionSet;

/// Expand `~`, `$VAR` and `${VAR}`; returns the input unchanged on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
