//! CLI entrypoint for quorumtool
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use quorumtool_application::{CommandOutcome, FAILURE_STATUS, QuorumTool, WaitOptions};
use quorumtool_infrastructure::{
    ConfigLoader, FileConfig, IpcServiceConnector, SystemNameResolver,
};
use quorumtool_presentation::{Cli, ConsoleFormatter, Diagnostics, OutputFormatter, usage_text};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "quorumtool".to_string());

    // No arguments at all: usage, success, nothing opened
    if std::env::args_os().len() <= 1 {
        print!("{}", usage_text(&program));
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            print!("{}", e);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            if let Some(reason) = e.to_string().lines().next() {
                eprintln!("{}", reason);
            }
            print!("{}", usage_text(&program));
            return exit_status(FAILURE_STATUS);
        }
    };

    init_tracing(cli.verbose);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return ExitCode::SUCCESS;
    }

    match run(&cli, &program) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn run(cli: &Cli, program: &str) -> Result<ExitCode> {
    let config = load_config(cli)?;
    debug!("Configuration: {:?}", config);

    // Single-threaded: the tool never runs two daemon calls at once
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    Ok(runtime.block_on(execute(cli, &config, program)))
}

async fn execute(cli: &Cli, config: &FileConfig, program: &str) -> ExitCode {
    let diagnostics = Diagnostics::new(config.output.color);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let mut wait = WaitOptions::new().with_cancellation(cancel);
    let timeout = match cli.wait_timeout {
        Some(0) => None,
        Some(ms) => Some(Duration::from_millis(ms)),
        None => config.wait.timeout(),
    };
    if let Some(timeout) = timeout {
        wait = wait.with_timeout(timeout);
    }

    // === Dependency Injection ===
    let connector = Arc::new(IpcServiceConnector::from_config(&config.daemon));
    let resolver = Arc::new(SystemNameResolver::new());
    let tool = QuorumTool::new(connector, resolver, wait);

    let request = cli.command_request(config.output.nodeid_format, config.output.name_format);
    info!(
        "Using daemon sockets in {}",
        config.daemon.socket_dir.display()
    );

    let formatter = ConsoleFormatter::default();
    match tool.run(&request).await {
        Ok(outcome) => {
            match &outcome {
                CommandOutcome::Usage => print!("{}", usage_text(program)),
                CommandOutcome::Status(report) => print!("{}", formatter.format_status(report)),
                CommandOutcome::Nodes(listing) => {
                    print!(
                        "{}",
                        formatter.format_nodes(listing, request.node_id_format)
                    )
                }
                CommandOutcome::VotesChanged { .. } | CommandOutcome::ExpectedChanged { .. } => {}
            }
            exit_status(outcome.exit_code())
        }
        Err(e) => {
            diagnostics.error(&e.to_string());
            if e.wants_usage() {
                print!("{}", usage_text(program));
            }
            exit_status(e.exit_code())
        }
    }
}

/// Truncate a status to the 8 bits a process can return. A nonzero status
/// whose low byte is zero still reports failure.
fn exit_status(code: i32) -> ExitCode {
    let byte = (code & 0xff) as u8;
    if byte == 0 && code != 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::from(byte)
    }
}
