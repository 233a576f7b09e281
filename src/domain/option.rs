//! Option abstraction: a flag name paired with a typed payload.
//!
//! Every concrete option vocabulary (`GlobalOption`, `LatticeOption`,
//! `StreamOption`) only maps its variants onto `(flag, payload)`. Token
//! formatting lives in one place, the [`FlagValue`] impls below.

use std::fmt;

use itertools::Itertools;

use crate::domain::choice::{
    CopyDirection, LatticePlotType, OutputFormat, ShiftDirection, StreamPlotType,
};

/// Encodes a typed flag payload into zero or more argument tokens.
pub trait FlagValue: fmt::Debug + Send + Sync {
    fn encode(&self, tokens: &mut Vec<String>);
}

/// Presence-only flag: no value tokens.
impl FlagValue for () {
    fn encode(&self, _tokens: &mut Vec<String>) {}
}

impl FlagValue for String {
    fn encode(&self, tokens: &mut Vec<String>) {
        tokens.push(self.clone());
    }
}

impl FlagValue for i64 {
    fn encode(&self, tokens: &mut Vec<String>) {
        tokens.push(self.to_string());
    }
}

/// Shortest round-trip decimal, never in exponent form (`1.0` -> `1`).
///
/// Non-finite values are not rejected here; they reach camelot verbatim as
/// `NaN`, `inf` and `-inf`.
impl FlagValue for f64 {
    fn encode(&self, tokens: &mut Vec<String>) {
        tokens.push(self.to_string());
    }
}

/// Fixed-arity numeric flags emit one token per element, in order.
impl<const N: usize> FlagValue for [f64; N] {
    fn encode(&self, tokens: &mut Vec<String>) {
        for value in self {
            value.encode(tokens);
        }
    }
}

/// Multi-choice flags are emitted as a single comma-joined token.
impl FlagValue for Vec<ShiftDirection> {
    fn encode(&self, tokens: &mut Vec<String>) {
        tokens.push(self.iter().map(ShiftDirection::as_str).join(","));
    }
}

macro_rules! choice_flag_value {
    ($($choice:ty),+ $(,)?) => {
        $(
            impl FlagValue for $choice {
                fn encode(&self, tokens: &mut Vec<String>) {
                    tokens.push(self.as_str().to_string());
                }
            }
        )+
    };
}

choice_flag_value!(
    OutputFormat,
    CopyDirection,
    LatticePlotType,
    StreamPlotType,
);

/// A single, independently constructed command-line option.
pub trait CommandOption: fmt::Debug + Send + Sync {
    /// Flag name and the payload it carries.
    fn parts(&self) -> (&'static str, &dyn FlagValue);

    fn flag(&self) -> &'static str {
        self.parts().0
    }

    /// Append this option's tokens: the flag, then its values.
    fn flatten_into(&self, tokens: &mut Vec<String>) {
        let (flag, value) = self.parts();
        tokens.push(flag.to_string());
        value.encode(tokens);
    }

    fn flatten(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        self.flatten_into(&mut tokens);
        tokens
    }
}

/// camelot sub-operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subcommand {
    /// Use lines between text to parse the table.
    Lattice,
    /// Use spaces between text to parse the table.
    Stream,
}

impl Subcommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subcommand::Lattice => "lattice",
            Subcommand::Stream => "stream",
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options scoped to one sub-operation. The option type selects the
/// sub-operation, so lattice options can never reach `stream`.
pub trait SubcommandOption: CommandOption {
    const SUBCOMMAND: Subcommand;
}
