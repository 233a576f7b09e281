//! Invocation builder: merges global and sub-operation options into one
//! ordered argument vector.

use std::fmt;

use crate::domain::catalog::GlobalOption;
use crate::domain::option::{Subcommand, SubcommandOption};
use crate::domain::option_set::OptionSet;

/// One fully ordered call of the external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    subcommand: Option<Subcommand>,
    args: Vec<String>,
}

impl Invocation {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn subcommand(&self) -> Option<Subcommand> {
        self.subcommand
    }

    /// Argument tokens, excluding the program itself.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }
}

/// Shell-style rendering, for `--dry-run` and diagnostics.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(token: &str) -> String {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.,/:=@+%".contains(c));
    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

/// Holds the program name and the global options shared by every call.
///
/// The global set is fixed at construction; each call reads it and builds
/// a fresh argument vector, so one builder can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct InvocationBuilder {
    program: String,
    global: OptionSet<GlobalOption>,
}

impl InvocationBuilder {
    pub fn new(program: impl Into<String>, global: OptionSet<GlobalOption>) -> Self {
        Self {
            program: program.into(),
            global,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn global_options(&self) -> &OptionSet<GlobalOption> {
        &self.global
    }

    /// Top-level call: global tokens only, no sub-operation.
    pub fn global(&self) -> Invocation {
        Invocation {
            program: self.program.clone(),
            subcommand: None,
            args: self.global.flatten(),
        }
    }

    /// Sub-operation call: global tokens, sub-operation name, sub-operation
    /// tokens, then `target`. The target is always appended, even when empty.
    pub fn subcommand<O: SubcommandOption>(
        &self,
        target: &str,
        options: &OptionSet<O>,
    ) -> Invocation {
        let mut args = self.global.flatten();
        args.push(O::SUBCOMMAND.as_str().to_string());
        options.flatten_into(&mut args);
        args.push(target.to_string());

        Invocation {
            program: self.program.clone(),
            subcommand: Some(O::SUBCOMMAND),
            args,
        }
    }
}
