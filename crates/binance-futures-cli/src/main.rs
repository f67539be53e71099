/*
[INPUT]:  CLI arguments, environment credentials, user input
[OUTPUT]: Trading operations against the exchange with logged outcomes
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or logging setup
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use console::style;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, fmt};

use binance_futures_adapter::{BotError, FuturesBot};
use binance_futures_cli::cli::{Cli, commands, interactive};

const DEFAULT_BASE_URL: &str = "https://testnet.binancefuture.com";
const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "binance-futures.log";

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    let _guard = init_tracing(&args.log_level)?;

    let (api_key, secret_key, base_url) = load_credentials()?;
    info!(base_url = %base_url, "starting binance-futures CLI");

    let bot = match FuturesBot::new(&api_key, &secret_key, &base_url) {
        Ok(bot) => bot,
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    };

    let outcome = match args.command {
        Some(command) => commands::run_command(&bot, command).await,
        None => {
            return interactive::run_interactive(&bot).await;
        }
    };

    if let Err(err) = outcome {
        report_error(&err);
        std::process::exit(1);
    }

    Ok(())
}

/// Console layer plus a non-blocking file appender. The returned guard is
/// held until process exit so buffered log lines are flushed.
fn init_tracing(log_level: &str) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;

    std::fs::create_dir_all(LOG_DIR).context("create log directory")?;
    let file_appender = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn load_credentials() -> Result<(String, String, String)> {
    let api_key = std::env::var("BINANCE_API_KEY")
        .context("BINANCE_API_KEY must be set (environment or .env file)")?;
    let secret_key = std::env::var("BINANCE_SECRET_KEY")
        .context("BINANCE_SECRET_KEY must be set (environment or .env file)")?;
    let base_url =
        std::env::var("BINANCE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    Ok((api_key, secret_key, base_url))
}

fn report_error(err: &BotError) {
    match err {
        BotError::Validation(validation) => {
            eprintln!("{} {validation}", style("Validation error:").red().bold());
        }
        BotError::Runtime { message } => {
            eprintln!("{} {message}", style("Runtime error:").red().bold());
        }
    }
}
