// src/logging.rs

use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::time::Duration;

/// Sets up file logging. Stderr belongs to the TUI, so everything goes to
/// a `moodchat_*.log` file in the working directory. The returned handle
/// must stay alive for the lifetime of the program.
pub fn init_logging(level: &str) -> anyhow::Result<LoggerHandle> {
    let handle = Logger::try_with_str(level)?
        .log_to_file(FileSpec::default().basename("moodchat"))
        .start()?;
    Ok(handle)
}

/// One line per API call: endpoint, status and round-trip time.
pub fn log_api_call(endpoint: &str, status: u16, elapsed: Duration) {
    log::info!(
        "{} - status {} - {}ms",
        endpoint,
        status,
        elapsed.as_millis()
    );
}
