use clap::Parser;
use dotenvy::dotenv;
use homework_bot::{
    observability, run,
    tasks::types::{MISSING_TOKENS_MESSAGE, PROGRAM_FAILURE_MESSAGE},
    BotError, Config, ConfigError, RunMode,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run a single poll cycle and exit
    #[clap(long)]
    once: bool,

    /// Log file path (overrides LOG_FILE)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    let args = Args::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(log_file) = args.log_file {
        config.logging.log_file = log_file;
    }

    let _log_guard = match observability::init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    let mode = if args.once { RunMode::Once } else { RunMode::Forever };
    match run(&config, mode, shutdown).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(BotError::Config(ConfigError::MissingTokens(missing))) => {
            error!(?missing, "{MISSING_TOKENS_MESSAGE}");
            eprintln!("{MISSING_TOKENS_MESSAGE}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{PROGRAM_FAILURE_MESSAGE}: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn cancel_on_ctrl_c(shutdown: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("Received Ctrl-C, shutting down");
            shutdown.cancel();
        }
        Err(e) => warn!("Unable to listen for Ctrl-C: {e}"),
    }
}
