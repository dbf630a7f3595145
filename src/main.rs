use anyhow::{Context, Result};
use clap::Parser;
use reactive_sum::{
    run_session, validate_log_level, CommandInterpreter, IoWrapper, SessionConfig,
    SubscriptionFilter, SumEvent,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "reactive-sum",
    version,
    about = "Keep a running sum of two variables, reporting it when both change"
)]
struct Args {
    /// Skip the two banner lines.
    #[arg(long, env = "REACTIVE_SUM_NO_BANNER")]
    no_banner: bool,

    /// Do not print an empty line after each input.
    #[arg(long, env = "REACTIVE_SUM_COMPACT")]
    compact: bool,

    /// Print every session event to stderr as one JSON object per line.
    #[arg(long, env = "REACTIVE_SUM_EVENTS")]
    events: bool,

    /// Logging level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, env = "REACTIVE_SUM_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            show_banner: !self.no_banner,
            blank_line_after_cycle: !self.compact,
        }
    }
}

fn init_logging(log_level: &str) -> Result<()> {
    let log_level = validate_log_level(log_level)?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_level))
        .context("Failed to build log filter")?;

    // stdout carries the calculator dialogue only
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    Ok(())
}

fn print_event(event: &SumEvent) {
    match serde_json::to_string(event) {
        Ok(json) => eprintln!("{json}"),
        Err(e) => tracing::warn!(error = %e, "failed to encode event"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let mut interpreter = CommandInterpreter::new();
    let mut io = IoWrapper::stdio();

    if args.events {
        interpreter.subscribe(SubscriptionFilter::all(), print_event);
    }

    let summary = run_session(&mut interpreter, &mut io, &args.session_config())
        .context("Session failed")?;

    tracing::debug!(?summary, "exiting");
    Ok(())
}
