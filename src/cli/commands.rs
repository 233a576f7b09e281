//! Command dispatch: turns parsed arguments into a camelot invocation.

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument, warn};

use crate::application::services::CamelotService;
use crate::application::ApplicationResult;
use crate::cli::args::{Cli, Commands, ConfigCommands, UsageTopic};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{GlobalOption, Invocation, LatticeOption, OptionSet, StreamOption};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        Commands::Config { command } => cmd_config(cli, command),
        Commands::Version => {
            let service = camelot_service(cli, Some(GlobalOption::Version))?;
            run(cli, &service, service.builder().global())
        }
        Commands::Usage { topic } => cmd_usage(cli, *topic),
        Commands::Lattice(args) => {
            let service = camelot_service(cli, None)?;
            let invocation = service
                .builder()
                .subcommand(target_str(&args.file)?, &args.options());
            run(cli, &service, invocation)
        }
        Commands::Stream(args) => {
            let service = camelot_service(cli, None)?;
            let invocation = service
                .builder()
                .subcommand(target_str(&args.file)?, &args.options());
            run(cli, &service, invocation)
        }
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(program) = &cli.program {
        settings.program = program.clone();
    }
    Ok(settings)
}

/// Service with config defaults, then CLI global flags, then `trailing`.
fn camelot_service(cli: &Cli, trailing: Option<GlobalOption>) -> CliResult<CamelotService> {
    let settings = load_settings(cli)?;
    let mut global = cli.global.options();
    global.extend(trailing);

    let container = ServiceContainer::new(settings);
    Ok(container.camelot_service(global)?)
}

fn target_str(path: &Path) -> CliResult<&str> {
    path.to_str()
        .ok_or_else(|| CliError::InvalidArgs(format!("path is not UTF-8: {}", path.display())))
}

#[instrument(skip_all, fields(dry_run = cli.dry_run))]
fn run(cli: &Cli, service: &CamelotService, invocation: Invocation) -> CliResult<()> {
    if cli.dry_run {
        output::dry_run(&invocation);
        return Ok(());
    }

    relay(service.run(&invocation), output::raw)
}

/// Hand camelot's output to `write`, then report the run's outcome.
///
/// On a failed run the output holds camelot's diagnostics and is written
/// before the error. A write failure there is only logged so the caller
/// still sees camelot's exit code.
fn relay(
    result: ApplicationResult<Vec<u8>>,
    write: impl Fn(&[u8]) -> io::Result<()>,
) -> CliResult<()> {
    match result {
        Ok(bytes) => write(&bytes).map_err(|e| InfraError::relay("stdout", e).into()),
        Err(e) => {
            if let Some(bytes) = e.output() {
                if let Err(relay_err) = write(bytes) {
                    warn!("could not relay camelot output to stdout: {}", relay_err);
                }
            }
            Err(e.into())
        }
    }
}

fn cmd_usage(cli: &Cli, topic: Option<UsageTopic>) -> CliResult<()> {
    debug!("cmd_usage: topic={:?}", topic);
    match topic {
        None => {
            let service = camelot_service(cli, Some(GlobalOption::Help))?;
            run(cli, &service, service.builder().global())
        }
        Some(UsageTopic::Lattice) => {
            let service = camelot_service(cli, None)?;
            let options = OptionSet::new().with(LatticeOption::Help);
            run(cli, &service, service.builder().subcommand("", &options))
        }
        Some(UsageTopic::Stream) => {
            let service = camelot_service(cli, None)?;
            let options = OptionSet::new().with(StreamOption::Help);
            run(cli, &service, service.builder().subcommand("", &options))
        }
    }
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".into());
            output::action("global", &global);
            if let Some(path) = &cli.config {
                output::action("explicit", &path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::application::ApplicationError;
    use crate::exitcode;

    fn broken_pipe(_: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn non_zero_exit(code: Option<i32>) -> ApplicationError {
        ApplicationError::NonZeroExit {
            program: "camelot".into(),
            code,
            output: b"Error: no tables found".to_vec(),
        }
    }

    #[test]
    fn successful_run_writes_output() {
        let written = RefCell::new(Vec::new());

        relay(Ok(b"a,b\n".to_vec()), |bytes| {
            written.borrow_mut().extend_from_slice(bytes);
            Ok(())
        })
        .unwrap();

        assert_eq!(written.into_inner(), b"a,b\n");
    }

    #[test]
    fn failed_run_writes_diagnostics_before_error() {
        let written = RefCell::new(Vec::new());

        let err = relay(Err(non_zero_exit(Some(2))), |bytes| {
            written.borrow_mut().extend_from_slice(bytes);
            Ok(())
        })
        .unwrap_err();

        assert_eq!(written.into_inner(), b"Error: no tables found");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn failed_run_keeps_camelot_exit_code_when_output_cannot_be_written() {
        let err = relay(Err(non_zero_exit(Some(3))), broken_pipe).unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert!(matches!(
            err,
            CliError::Infra(InfraError::Application(ApplicationError::NonZeroExit { .. }))
        ));
    }

    #[test]
    fn successful_run_reports_write_failure_as_ioerr() {
        let err = relay(Ok(b"data".to_vec()), broken_pipe).unwrap_err();

        assert_eq!(err.exit_code(), exitcode::IOERR);
    }
}
