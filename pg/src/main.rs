use clap::Parser;
use eyre::{Context, Result};
use log::{debug, info, warn};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use planguard::cli::Cli;
use planguard::config::Config;
use planguard::report::Reporter;
use planguard::{Validator, VerdictCode};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let color = !cli.no_color && io::stdout().is_terminal();

    if let Err(e) = setup_logging(cli.verbose).context("Failed to setup logging") {
        eprintln!("ERROR: {:#}", e);
        return VerdictCode::InputError.into();
    }

    run(cli, color).into()
}

fn run(cli: Cli, color: bool) -> VerdictCode {
    let config = match Config::load(cli.config.as_ref()).context("Failed to load configuration") {
        Ok(config) => config.with_overrides(cli.address_prefix, cli.format),
        Err(e) => {
            let reporter = Reporter::new(planguard::DEFAULT_ADDRESS_PREFIX, Default::default(), false);
            if let Err(write_err) = reporter.error_line(&format!("{:#}", e), &mut io::stderr().lock()) {
                warn!("Failed to write error report: {}", write_err);
            }
            return VerdictCode::InputError;
        }
    };
    debug!("planguard config: {:?}", config);

    let reporter = Reporter::new(&config.address_prefix, config.format, color);
    let validator = Validator::new(config.address_prefix.as_str());

    info!("Validating {}", cli.plan.display());
    match validator.validate(&cli.plan) {
        Ok(verdict) => {
            if let Err(e) = reporter.verdict(&verdict, &mut io::stdout().lock()) {
                warn!("Failed to write verdict report: {}", e);
            }
            verdict.code()
        }
        Err(e) => {
            debug!("Unusable plan input {}: {:?}", e.path().display(), e);
            if let Err(write_err) = reporter.input_error(&e, &mut io::stderr().lock()) {
                warn!("Failed to write error report: {}", write_err);
            }
            VerdictCode::InputError
        }
    }
}
