//! Service container for dependency injection
//!
//! Wires up the camelot service with its dependencies.

use std::sync::Arc;

use crate::application::services::CamelotService;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::{GlobalOption, InvocationBuilder, OptionSet};
use crate::infrastructure::traits::{CommandRunner, RealCommandRunner};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealCommandRunner))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, cmd: Arc<dyn CommandRunner>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, cmd }
    }

    /// Build the camelot service.
    ///
    /// Global options from settings come first, followed by `extra`; for
    /// single-valued flags camelot keeps the last occurrence.
    pub fn camelot_service(
        &self,
        extra: OptionSet<GlobalOption>,
    ) -> ApplicationResult<CamelotService> {
        let mut global = self.settings.global_options()?;
        global.extend(extra);

        let builder = InvocationBuilder::new(self.settings.program.clone(), global);
        Ok(CamelotService::new(self.cmd.clone(), builder))
    }
}
