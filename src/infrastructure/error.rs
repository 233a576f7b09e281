//! Errors raised at the process boundary, outside the camelot call itself

use std::io;

use thiserror::Error;

use crate::application::ApplicationError;

/// Wraps application errors and failures to hand camelot output on.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Relaying camelot's combined output failed (closed pipe, full disk).
    #[error("failed to write camelot output to {sink}: {source}")]
    Relay {
        sink: &'static str,
        #[source]
        source: io::Error,
    },
}

impl InfraError {
    pub fn relay(sink: &'static str, source: io::Error) -> Self {
        Self::Relay { sink, source }
    }
}
