//! Typed invocation builder and runner for the camelot PDF table extraction CLI.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rscamelot::application::services::CamelotService;
//! use rscamelot::domain::{
//!     GlobalOption, InvocationBuilder, LatticeOption, OptionSet, OutputFormat,
//! };
//! use rscamelot::infrastructure::traits::RealCommandRunner;
//!
//! let global = OptionSet::new()
//!     .with(GlobalOption::Pages("1,3".into()))
//!     .with(GlobalOption::Format(OutputFormat::Csv))
//!     .with(GlobalOption::Output("tables.csv".into()));
//! let service = CamelotService::new(
//!     Arc::new(RealCommandRunner),
//!     InvocationBuilder::new("camelot", global),
//! );
//!
//! let options = OptionSet::new().with(LatticeOption::LineScale(40));
//! let tables = service.lattice("report.pdf", &options)?;
//! print!("{}", String::from_utf8_lossy(&tables));
//! # Ok::<(), rscamelot::application::ApplicationError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
