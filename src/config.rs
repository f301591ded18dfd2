//! Runtime configuration from command-line arguments and environment.

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_DATA_DIR: &str = "SPROUT_DATA_DIR";
pub const ENV_LOG: &str = "SPROUT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "sprout=info";
pub const LOG_FILE_NAME: &str = "sprout.log";

pub const HELP_TEXT: &str = "\
Sprout - grow a lily one click at a time

Usage: sprout [options]

Options:
  --data-dir <path>  Where the save file and log live
  --seed <n>         Seed the random number generator
  --version, -v      Show version information
  --help, -h         Show this help message

Environment:
  SPROUT_DATA_DIR    Same as --data-dir
  SPROUT_LOG         Log filter (default: sprout=info)";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("could not determine a data directory; pass --data-dir")]
    NoDataDir,
}

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the save file and the log
    pub data_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
    /// Fixed RNG seed (None = thread RNG)
    pub seed: Option<u64>,
}

impl AppConfig {
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(AppConfig),
    Version,
    Help,
}

fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sprout").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Parse arguments (without the program name). `env` looks up environment
/// variables; flags override the environment.
pub fn parse_args<I, F>(args: I, env: F) -> Result<CliCommand, ConfigError>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut data_dir = env(ENV_DATA_DIR).map(PathBuf::from);
    let mut seed = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--data-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                data_dir = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                seed = Some(
                    value
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidSeed(value.clone()))?,
                );
            }
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    let data_dir = match data_dir {
        Some(dir) => dir,
        None => default_data_dir().ok_or(ConfigError::NoDataDir)?,
    };

    Ok(CliCommand::Run(AppConfig {
        data_dir,
        log_filter: env(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        seed,
    }))
}
