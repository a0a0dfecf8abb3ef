use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, SetLoggerError};

use crate::{level::Level, line_logger::LineLogger};

/// Forwards records of the `log` facade to a [`LineLogger`].
struct LogBridge {
    logger: Arc<LineLogger>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.logger.log(Level::from(record.level()), record.args());
    }

    fn flush(&self) {}
}

/// Routes `log::info!` and friends to `logger`, up to `level`.
///
/// `Error` maps to CRIT and `Trace` to DEBUG; debug lines still need
/// [`loggos_core::Sink::enable_debug_logging`] on the logger.
pub fn init_log_bridge(
    logger: Arc<LineLogger>,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge { logger }))?;
    log::set_max_level(level);
    Ok(())
}

#[test]
fn test_log_bridge() {
    use loggos_core::Capture;

    let capture = Capture::default();
    let logger = Arc::new(LineLogger::new(20));
    logger.override_printer(capture.clone());
    logger.override_timestamping(|| "ts".to_string());
    logger.enable_debug_logging(true);
    init_log_bridge(Arc::clone(&logger), LevelFilter::Debug).unwrap();
    assert!(init_log_bridge(Arc::clone(&logger), LevelFilter::Debug).is_err());

    log::error!("broken {}", 1);
    log::warn!("careful");
    log::info!("Hello, world!");
    log::debug!("details");
    log::trace!("too chatty");
    logger.flush().wait();
    assert_eq!(
        capture.show(),
        vec![
            "ts CRIT broken 1",
            "ts WARN careful",
            "ts INFO Hello, world!",
            "ts DEBUG details",
        ]
    );
}
