//! Runtime settings
//!
//! Resolved in increasing precedence: built-in defaults, the TOML config
//! file, environment variables, command-line flags. Clap folds the last two
//! together through its `env` support.

use clap::{Args, ValueEnum};
use fitlog_core::errors::{FlError, FlErrorKind};
use fitlog_core::logging_facility::Profile;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file looked up inside the data directory
pub const CONFIG_FILE_NAME: &str = "fitlog.toml";

/// Durable storage backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per collection
    #[default]
    Fs,
    /// A SQLite key-value table
    Sqlite,
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Directory holding the persisted collections [default: ~/.fitlog]
    #[arg(long, global = true, env = "FITLOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage backend [default: fs]
    #[arg(long, global = true, value_enum, env = "FITLOG_BACKEND")]
    pub backend: Option<Backend>,

    /// Config file [default: <data-dir>/fitlog.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log profile: dev or prod [default: dev]
    #[arg(long, global = true, env = "FITLOG_LOG_PROFILE")]
    pub log_profile: Option<Profile>,
}

/// Contents of the TOML config file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    data_dir: Option<PathBuf>,
    backend: Option<Backend>,
    log_profile: Option<String>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub backend: Backend,
    pub log_profile: Profile,
}

impl Settings {
    /// Resolve settings from flags (and the environment, via clap) over the
    /// config file over the defaults
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if an explicitly named config file is missing,
    /// or any config file cannot be read or parsed.
    pub fn resolve(args: &GlobalArgs) -> Result<Self, FlError> {
        let fallback_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

        let file = match &args.config {
            Some(path) => load_file(path)?,
            None => {
                let implicit = fallback_dir.join(CONFIG_FILE_NAME);
                if implicit.exists() {
                    load_file(&implicit)?
                } else {
                    FileSettings::default()
                }
            }
        };

        let file_profile = file
            .log_profile
            .as_deref()
            .map(str::parse::<Profile>)
            .transpose()
            .map_err(|e| config_error(e.to_string()))?;

        Ok(Settings {
            data_dir: args
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or(fallback_dir),
            backend: args.backend.or(file.backend).unwrap_or_default(),
            log_profile: args.log_profile.or(file_profile).unwrap_or_default(),
        })
    }
}

/// `~/.fitlog`, or `.fitlog` in the working directory when there is no home
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fitlog")
}

fn load_file(path: &Path) -> Result<FileSettings, FlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        config_error(format!(
            "failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    toml::from_str(&contents).map_err(|e| {
        config_error(format!(
            "failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn config_error(message: impl Into<String>) -> FlError {
    FlError::new(FlErrorKind::Config)
        .with_op("resolve_settings")
        .with_message(message)
}
