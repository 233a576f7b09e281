//! camelot façade service
//!
//! Builds one invocation per call from the shared global options and the
//! caller's sub-operation options, runs it, and hands back the raw output.

use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    Invocation, InvocationBuilder, LatticeOption, OptionSet, StreamOption, SubcommandOption,
};
use crate::infrastructure::traits::CommandRunner;

/// Typed entry point for running camelot.
pub struct CamelotService {
    cmd: Arc<dyn CommandRunner>,
    builder: InvocationBuilder,
}

impl CamelotService {
    /// Create a new camelot service.
    pub fn new(cmd: Arc<dyn CommandRunner>, builder: InvocationBuilder) -> Self {
        Self { cmd, builder }
    }

    pub fn builder(&self) -> &InvocationBuilder {
        &self.builder
    }

    /// Run camelot with the global options only (e.g. `--help`, `--version`).
    pub fn exec(&self) -> ApplicationResult<Vec<u8>> {
        self.run(&self.builder.global())
    }

    /// Line-based table extraction.
    pub fn lattice(
        &self,
        input: &str,
        options: &OptionSet<LatticeOption>,
    ) -> ApplicationResult<Vec<u8>> {
        self.extract(input, options)
    }

    /// Whitespace-based table extraction.
    pub fn stream(
        &self,
        input: &str,
        options: &OptionSet<StreamOption>,
    ) -> ApplicationResult<Vec<u8>> {
        self.extract(input, options)
    }

    /// Run the sub-operation selected by the option type against `input`.
    pub fn extract<O: SubcommandOption>(
        &self,
        input: &str,
        options: &OptionSet<O>,
    ) -> ApplicationResult<Vec<u8>> {
        self.run(&self.builder.subcommand(input, options))
    }

    /// Run a prepared invocation.
    ///
    /// A non-zero exit is an error that still carries the combined output,
    /// see [`ApplicationError::output`].
    #[instrument(skip_all, fields(subcommand = ?invocation.subcommand()))]
    pub fn run(&self, invocation: &Invocation) -> ApplicationResult<Vec<u8>> {
        debug!(
            "run: program={}, args={}",
            invocation.program(),
            invocation.args().len()
        );
        trace!("run: {:?}", invocation.args());

        let result = self
            .cmd
            .run(invocation.program(), invocation.args())
            .map_err(|e| ApplicationError::Launch {
                program: invocation.program().to_string(),
                source: e,
            })?;

        debug!(
            "run: exit code={:?}, output={} bytes",
            result.code,
            result.output.len()
        );

        if !result.success() {
            return Err(ApplicationError::NonZeroExit {
                program: invocation.program().to_string(),
                code: result.code,
                output: result.output,
            });
        }

        Ok(result.output)
    }
}
