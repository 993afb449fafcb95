use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::fixture::Fixture;

#[derive(Debug, Parser)]
#[command(name = "notecards", version, about = "A scrollable stack of note cards")]
pub struct Cli {
    /// Which built-in notes to show.
    #[arg(long, value_enum, default_value_t = Fixture::Sample)]
    pub fixture: Fixture,

    #[arg(long, value_enum, env = "NOTECARDS_LOG", default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Where log files go. Defaults to `notecards` under the temp directory.
    #[arg(long, env = "NOTECARDS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("notecards"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
