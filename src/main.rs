mod config;
mod generator;
mod output;
mod runner;

use rand::Rng;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, Config, ConfigError, ExecutionMode};
use crate::output::{write_csv, OutputError};
use crate::runner::generate_dataset;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

fn init_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

fn run() -> Result<(), AppError> {
    let config: Config = load_config(CONFIG_PATH)?;

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!(
        "run_seed={} (set `seed` in {} to replay this run)",
        seed,
        CONFIG_PATH
    );
    log::info!(
        "generating {} servers x {} days at {}s cadence, {} execution",
        config.num_servers,
        config.num_days,
        config.interval_secs,
        config.execution.as_str()
    );
    if config.execution == ExecutionMode::Parallel {
        log::info!("using {} worker threads", rayon::current_num_threads());
    }

    let rows = generate_dataset(&config, seed);
    log::info!("generated {} rows", rows.len());

    write_csv(&config.output.path, &rows)?;
    log::info!("dataset written to {}", config.output.path);
    Ok(())
}

fn main() {
    init_logging();

    if let Err(error) = run() {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
