//! Tracing-backed layout logger
//!
//! Routes `LayoutLogger` entries into `tracing` events carrying the channel
//! as a field.

use tracing::{debug, error, info, warn};

use crate::domain::ports::{LayoutLogger, LogChannel, Severity};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl LayoutLogger for TracingLogger {
    fn log(&self, message: &str, severity: Severity, channel: LogChannel) {
        match severity {
            Severity::Error => error!(%channel, "{message}"),
            Severity::Warning => warn!(%channel, "{message}"),
            Severity::Notice | Severity::Info => info!(%channel, "{message}"),
            Severity::Debug => debug!(%channel, "{message}"),
        }
    }
}
