use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};
use std::path::Path;

/// Starts the global logger.
///
/// `RUST_LOG` wins over `spec`. With a directory, logs rotate at 10 MB and only
/// the newest file is kept; without one they go to stderr so stdout stays JSON.
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(spec: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(spec)?.format(opt_format);
    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(1),
            ),
        None => logger.log_to_stderr(),
    };
    logger.start()
}
