use std::path::Path;

use color_eyre::eyre::WrapErr;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::config::LogLevel;

const LOG_FILE_BASENAME: &str = "notecards";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Starts file logging; the terminal belongs to the UI. Keep the handle
/// alive until exit so buffered lines get flushed.
pub fn init(level: LogLevel, dir: &Path) -> color_eyre::Result<LoggerHandle> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create log directory `{}`", dir.display()))?;

    let handle = Logger::try_with_str(level.as_str())?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .wrap_err("failed to start logger")?;

    Ok(handle)
}
