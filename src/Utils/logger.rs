/// Logger initialisation: terminal output, optionally mirrored to a file.
/// Only the first initialisation in a process takes effect, later calls are reported and ignored.
use log::{LevelFilter, info, warn};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot create log file: {0}")]
    Io(#[from] std::io::Error),
}

fn portal_config() -> Config {
    ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Off)
        .build()
}

fn install(loggers: Vec<Box<dyn SharedLogger>>) -> bool {
    match CombinedLogger::init(loggers) {
        Ok(()) => true,
        Err(_) => {
            warn!("logger is already initialised, keeping the existing one");
            false
        }
    }
}

/// Terminal logger at `level`. Returns false if a logger was already set.
pub fn init_logger(level: LevelFilter) -> bool {
    install(vec![TermLogger::new(
        level,
        portal_config(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
}

/// Terminal logger at `level` plus a file logger writing everything from `file_level` up
pub fn init_logger_with_file(
    level: LevelFilter,
    file_level: LevelFilter,
    log_file: &Path,
) -> Result<bool, LoggerError> {
    let file = File::create(log_file)?;
    let installed = install(vec![
        TermLogger::new(
            level,
            portal_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(file_level, portal_config(), file),
    ]);
    if installed {
        info!("logging to {}", log_file.display());
    }
    Ok(installed)
}
