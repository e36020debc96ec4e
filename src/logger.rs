//! Logging collaborator handed to decoders by the host

/// Fire-and-forget sink for decoder messages
pub trait Logger {
    /// Informational message
    fn log(&self, message: &str);

    /// Something unexpected that does not stop the caller
    fn warn(&self, message: &str);

    /// Error message
    fn log_error(&self, message: &str);

    /// Error message emitted even when the logger is not verbose
    fn log_error_experimental(&self, message: &str) {
        self.log_error(message);
    }
}

/// Logger that forwards to `tracing` when verbose
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseLogger {
    verbose: bool,
}

impl BaseLogger {
    /// Create a logger; a quiet logger drops everything but experimental errors
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Logger for BaseLogger {
    fn log(&self, message: &str) {
        if self.verbose {
            tracing::info!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        if self.verbose {
            tracing::warn!("{message}");
        }
    }

    fn log_error(&self, message: &str) {
        if self.verbose {
            tracing::error!("{message}");
        }
    }

    fn log_error_experimental(&self, message: &str) {
        tracing::error!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured(run: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, run);
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_quiet_logger_drops_all_but_experimental() {
        let out = captured(|| {
            let logger = BaseLogger::new(false);
            logger.log("quiet-info");
            logger.warn("quiet-warn");
            logger.log_error("quiet-error");
            logger.log_error_experimental("experimental-error");
        });
        assert!(!out.contains("quiet-info"));
        assert!(!out.contains("quiet-warn"));
        assert!(!out.contains("quiet-error"));
        assert!(out.contains("experimental-error"));
    }

    #[test]
    fn test_verbose_logger_forwards_everything() {
        let out = captured(|| {
            let logger = BaseLogger::new(true);
            logger.log("loud-info");
            logger.warn("loud-warn");
            logger.log_error("loud-error");
            logger.log_error_experimental("experimental-error");
        });
        assert!(out.contains("INFO") && out.contains("loud-info"));
        assert!(out.contains("WARN") && out.contains("loud-warn"));
        assert!(out.contains("ERROR") && out.contains("loud-error"));
        assert!(out.contains("experimental-error"));
    }
}
