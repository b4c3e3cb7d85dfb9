//! Outbound logging seam.
//!
//! Triage only ever needs two entry points into the logging subsystem: one
//! for error-level lines and one for warning-level lines. Keeping them
//! behind a trait lets tests record what would have been logged, while the
//! default implementation hands lines to the `log` facade under a fixed
//! graphics target.

use log::{error, warn};
use std::sync::Arc;

/// Log target for every line this crate emits.
pub const LOG_TARGET: &str = "gpu";

/// Destination for triaged validation lines.
///
/// `target` is always [`LOG_TARGET`]; it is passed through so sinks that
/// fan lines out across categories do not need a mapping of their own.
/// Implementations are best-effort: they have no way to report failure
/// back into the triage pipeline.
pub trait LogSink: Send + Sync {
    /// Accepts one formatted line at error level.
    fn error(&self, target: &str, line: &str);
    /// Accepts one formatted line at warning level.
    fn warning(&self, target: &str, line: &str);
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn error(&self, target: &str, line: &str) {
        (**self).error(target, line);
    }

    fn warning(&self, target: &str, line: &str) {
        (**self).warning(target, line);
    }
}

/// Default sink: forwards to the `log` facade, so whatever logger the
/// application installed picks the lines up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn error(&self, target: &str, line: &str) {
        // Records get their own newline from the logger; drop the line's.
        error!(target: target, "{}", line.trim_end());
    }

    fn warning(&self, target: &str, line: &str) {
        warn!(target: target, "{}", line.trim_end());
    }
}
