//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, Read};
use std::process::{Command, Stdio};

/// Exit code and combined stdout/stderr of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// stdout and stderr interleaved in write order.
    pub output: Vec<u8>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, block until it exits and capture combined output.
    ///
    /// Errors only if the process could not be started or its output could
    /// not be read; a non-zero exit is reported through `CommandOutput::code`.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        // stdout and stderr share one pipe so the bytes keep their order
        let (mut reader, writer) = io::pipe()?;

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);

        let mut child = command.spawn()?;
        // the command still holds write ends; drop them or the read never sees EOF
        drop(command);

        let mut output = Vec::new();
        let read = reader.read_to_end(&mut output);
        let status = child.wait()?;
        read?;

        Ok(CommandOutput {
            code: status.code(),
            output,
        })
    }
}
